// spdl_default
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
//
// Contributors:
//   *   CRIL - initial API and implementation

use super::ClassicalDefaultLogic;
use lazy_static::lazy_static;
use spdl_logic::{
    collect_atoms, subst, to_full_pnnf, ClassicalLogic, Formula, ParaconsistentLogic,
    PropositionalLogic,
};

lazy_static! {
    static ref INCONSISTENCY_TESTER: Formula = {
        let p = Formula::new_atom("p");
        let not_p = Formula::new_not(p.clone());
        Formula::new_implication(
            Formula::new_or(vec![p.clone(), not_p.clone()]),
            Formula::new_and(vec![p, not_p]),
        )
    };
}

/// Returns the formula `a | !a =) a & !a`, stating the atom `a` is genuinely inconsistent.
///
/// # Examples
///
/// ```
/// use spdl_default::inconsistency_tester;
///
/// assert_eq!("((a | !a) =) (a & !a))", inconsistency_tester("a").to_string());
/// ```
pub fn inconsistency_tester(atom: &str) -> Formula {
    subst(&INCONSISTENCY_TESTER, "p", &Formula::new_atom(atom))
}

/// The way a paraconsistent default theory expresses that some atoms may be inconsistent.
pub trait InconsistencyEncoding: Clone + Default {
    /// The propositional logic the extensions are computed in.
    type Ground: PropositionalLogic;

    /// The name of the encoding.
    fn name(&self) -> &'static str;

    /// Translates a formula given by the user into the ground logic.
    fn transform(&self, formula: &Formula) -> Formula;

    /// Restricts a classical default theory such that only the given atoms may be inconsistent.
    ///
    /// The tracked atoms are the atoms occurring in the paraconsistent theory.
    fn restrict(
        &self,
        theory: &mut ClassicalDefaultLogic<Self::Ground>,
        tracked: &[String],
        inconsistents: &[String],
    );

    /// Prepares a classical default theory for a query involving atoms that may not be tracked.
    fn prepare_query(
        &self,
        _theory: &mut ClassicalDefaultLogic<Self::Ground>,
        _tracked: &[String],
        _query: &Formula,
    ) {
    }
}

/// An encoding relying on a paraconsistent ground logic, to which inconsistent atoms are given directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NativeEncoding;

impl InconsistencyEncoding for NativeEncoding {
    type Ground = ParaconsistentLogic;

    fn name(&self) -> &'static str {
        "spdl1"
    }

    fn transform(&self, formula: &Formula) -> Formula {
        formula.clone()
    }

    fn restrict(
        &self,
        theory: &mut ClassicalDefaultLogic<ParaconsistentLogic>,
        _tracked: &[String],
        inconsistents: &[String],
    ) {
        theory.ground_mut().set_inconsistents(inconsistents.iter().cloned());
    }
}

/// An encoding relying on a classical ground logic.
///
/// Every formula is translated into its full paraconsistent negation normal form,
/// in which each negated atom `!a` is replaced by a fresh atom `a^-`.
/// The atoms that must behave classically are then constrained by facts `a <-> !a^-`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenamingEncoding;

impl RenamingEncoding {
    /// Returns the fact forcing an atom to behave classically.
    ///
    /// # Examples
    ///
    /// ```
    /// use spdl_default::RenamingEncoding;
    ///
    /// assert_eq!("(a <-> !a^-)", RenamingEncoding.classical_assertion("a").to_string());
    /// ```
    pub fn classical_assertion(&self, atom: &str) -> Formula {
        let a = Formula::new_atom(atom);
        Formula::new_equiv(
            to_full_pnnf(&a),
            Formula::new_not(to_full_pnnf(&Formula::new_not(a))),
        )
    }
}

impl InconsistencyEncoding for RenamingEncoding {
    type Ground = ClassicalLogic;

    fn name(&self) -> &'static str {
        "spdl2"
    }

    fn transform(&self, formula: &Formula) -> Formula {
        to_full_pnnf(formula)
    }

    fn restrict(
        &self,
        theory: &mut ClassicalDefaultLogic<ClassicalLogic>,
        tracked: &[String],
        inconsistents: &[String],
    ) {
        for atom in tracked.iter().filter(|a| !inconsistents.contains(*a)) {
            theory.ground_mut().add(self.classical_assertion(atom));
        }
    }

    fn prepare_query(
        &self,
        theory: &mut ClassicalDefaultLogic<ClassicalLogic>,
        tracked: &[String],
        query: &Formula,
    ) {
        for atom in collect_atoms(query)
            .into_iter()
            .filter(|a| !tracked.contains(a))
        {
            theory.ground_mut().add(self.classical_assertion(&atom));
        }
    }
}
