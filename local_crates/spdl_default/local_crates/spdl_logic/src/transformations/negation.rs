// spdl_logic
// Copyright (C) 2021  Univ. Artois & CNRS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use super::FormulaTransformer;
use crate::Formula;
use rustc_hash::FxHashSet;

/// The suffix appended to the name of an atom to build the atom standing for its negation.
pub const NEGATED_ATOM_SUFFIX: &str = "^-";

/// Returns the name of the fresh atom standing for the negation of an atom.
///
/// # Examples
///
/// ```
/// use spdl_logic::negated_atom_name;
///
/// assert_eq!("p^-", negated_atom_name("p"));
/// ```
pub fn negated_atom_name(name: &str) -> String {
    format!("{}{}", name, NEGATED_ATOM_SUFFIX)
}

/// The negation normal form transformation.
///
/// Negations are pushed down to the atoms; `->` implications are rewritten as disjunctions,
/// while `=)` implications and equivalences are kept, their operands being transformed.
///
/// # Examples
///
/// ```
/// use spdl_logic::{parse, FormulaTransformer, NnfTransformer, Syntax};
///
/// let f = parse("!(a -> !b)", Syntax::PlainText).unwrap().into_formula().unwrap();
/// assert_eq!("(a & b)", NnfTransformer.transform(&f).to_string());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NnfTransformer;

impl FormulaTransformer for NnfTransformer {
    fn transform(&self, formula: &Formula) -> Formula {
        NegationPusher::Classical.positive(formula)
    }
}

/// Returns the negation normal form of a formula (see [`NnfTransformer`]).
pub fn to_nnf(formula: &Formula) -> Formula {
    NnfTransformer.transform(formula)
}

/// The paraconsistent negation normal form transformation.
///
/// This transformation acts as the [`NnfTransformer`], except for two points.
/// First, when a negation reaches an atom considered as inconsistent, the negated atom is replaced by a fresh atom
/// (see [`negated_atom_name`]), allowing both the atom and its negation to hold.
/// Second, `=)` implications are rewritten as disjunctions in which the negation of the left operand is kept classical.
///
/// The *full* version of this transformation considers all the atoms as inconsistent.
///
/// # Examples
///
/// ```
/// use spdl_logic::{Formula, FormulaTransformer, ParaconsistentNnfTransformer};
///
/// let f = Formula::new_and(vec![
///     Formula::new_not(Formula::new_atom("a")),
///     Formula::new_not(Formula::new_atom("b")),
/// ]);
/// let pnnf = ParaconsistentNnfTransformer::new(vec!["a"]);
/// assert_eq!("(a^- & !b)", pnnf.transform(&f).to_string());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParaconsistentNnfTransformer {
    inconsistents: FxHashSet<String>,
    full: bool,
}

impl ParaconsistentNnfTransformer {
    /// Builds a transformer considering the given atoms as inconsistent.
    pub fn new<I, S>(inconsistents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ParaconsistentNnfTransformer {
            inconsistents: inconsistents.into_iter().map(|s| s.into()).collect(),
            full: false,
        }
    }

    /// Builds a transformer considering all the atoms as inconsistent.
    pub fn full() -> Self {
        ParaconsistentNnfTransformer {
            inconsistents: FxHashSet::default(),
            full: true,
        }
    }

    /// Replaces the set of inconsistent atoms.
    ///
    /// This has no effect on the full version of the transformer.
    pub fn set_inconsistents<I, S>(&mut self, inconsistents: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inconsistents = inconsistents.into_iter().map(|s| s.into()).collect();
    }

    fn should_rename(&self, name: &str) -> bool {
        self.full || self.inconsistents.contains(name)
    }
}

impl FormulaTransformer for ParaconsistentNnfTransformer {
    fn transform(&self, formula: &Formula) -> Formula {
        NegationPusher::Paraconsistent(self).positive(formula)
    }
}

/// Returns the full paraconsistent negation normal form of a formula (see [`ParaconsistentNnfTransformer::full`]).
pub fn to_full_pnnf(formula: &Formula) -> Formula {
    ParaconsistentNnfTransformer::full().transform(formula)
}

enum NegationPusher<'a> {
    Classical,
    Paraconsistent(&'a ParaconsistentNnfTransformer),
}

impl NegationPusher<'_> {
    fn positive(&self, formula: &Formula) -> Formula {
        match formula {
            Formula::Atom(_) => formula.clone(),
            Formula::Not(sub) => self.negative(sub),
            Formula::Imply(l, r) => Formula::Or(vec![self.negative(l), self.positive(r)]),
            Formula::Implication(l, r) => match self {
                NegationPusher::Classical => {
                    Formula::new_implication(self.positive(l), self.positive(r))
                }
                NegationPusher::Paraconsistent(_) => Formula::Or(vec![
                    Formula::new_not(self.positive(l)),
                    self.positive(r),
                ]),
            },
            _ => formula.map_sub_formulas(|f| self.positive(f)),
        }
    }

    fn negative(&self, formula: &Formula) -> Formula {
        match formula {
            Formula::Atom(name) => match self {
                NegationPusher::Paraconsistent(t) if t.should_rename(name) => {
                    Formula::Atom(negated_atom_name(name))
                }
                _ => Formula::new_not(formula.clone()),
            },
            Formula::Not(sub) => self.positive(sub),
            Formula::And(subs) => Formula::Or(subs.iter().map(|f| self.negative(f)).collect()),
            Formula::Or(subs) => Formula::And(subs.iter().map(|f| self.negative(f)).collect()),
            Formula::Imply(l, r) | Formula::Implication(l, r) => {
                Formula::And(vec![self.positive(l), self.negative(r)])
            }
            Formula::Equiv(l, r) => Formula::new_equiv(self.positive(l), self.negative(r)),
        }
    }
}
