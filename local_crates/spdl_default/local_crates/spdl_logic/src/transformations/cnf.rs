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

/// A CNF clause given as a list of atom names associated with their polarities.
pub type SignedClause<'a> = Vec<(&'a str, bool)>;

/// The conjunctive normal form transformation.
///
/// The transformation distributes the disjunctions over the conjunctions, without introducing new variables;
/// its output may thus be exponentially larger than its input.
/// The result is a conjunction of disjunctions of literals; the empty disjunction stands for the false formula.
///
/// # Examples
///
/// ```
/// use spdl_logic::{parse, CnfTransformer, FormulaTransformer, Syntax};
///
/// let f = parse("A & (B | (D & E))", Syntax::PlainText).unwrap().into_formula().unwrap();
/// assert_eq!("(A & (B | D) & (B | E))", CnfTransformer.transform(&f).to_string());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CnfTransformer;

impl FormulaTransformer for CnfTransformer {
    fn transform(&self, formula: &Formula) -> Formula {
        Formula::And(
            cnf_clauses(formula)
                .into_iter()
                .map(|c| {
                    Formula::Or(
                        c.into_iter()
                            .map(|(name, polarity)| {
                                let atom = Formula::new_atom(name);
                                if polarity {
                                    atom
                                } else {
                                    Formula::new_not(atom)
                                }
                            })
                            .collect(),
                    )
                })
                .collect(),
        )
    }
}

/// Returns the conjunctive normal form of a formula (see [`CnfTransformer`]).
pub fn to_cnf(formula: &Formula) -> Formula {
    CnfTransformer.transform(formula)
}

/// Computes the clauses of the conjunctive normal form of a formula.
///
/// # Examples
///
/// ```
/// use spdl_logic::{cnf_clauses, parse, Syntax};
///
/// let f = parse("!(B | C)", Syntax::PlainText).unwrap().into_formula().unwrap();
/// assert_eq!(vec![vec![("B", false)], vec![("C", false)]], cnf_clauses(&f));
/// ```
pub fn cnf_clauses(formula: &Formula) -> Vec<SignedClause> {
    positive(formula)
}

fn positive(formula: &Formula) -> Vec<SignedClause> {
    match formula {
        Formula::Atom(name) => vec![vec![(name.as_str(), true)]],
        Formula::Not(sub) => negative(sub),
        Formula::And(subs) => subs.iter().flat_map(|f| positive(f)).collect(),
        Formula::Or(subs) => product(subs.iter().map(|f| positive(f)).collect()),
        Formula::Imply(l, r) | Formula::Implication(l, r) => product(vec![negative(l), positive(r)]),
        Formula::Equiv(l, r) => {
            let mut clauses = product(vec![negative(l), positive(r)]);
            clauses.append(&mut product(vec![negative(r), positive(l)]));
            clauses
        }
    }
}

fn negative(formula: &Formula) -> Vec<SignedClause> {
    match formula {
        Formula::Atom(name) => vec![vec![(name.as_str(), false)]],
        Formula::Not(sub) => positive(sub),
        Formula::And(subs) => product(subs.iter().map(|f| negative(f)).collect()),
        Formula::Or(subs) => subs.iter().flat_map(|f| negative(f)).collect(),
        Formula::Imply(l, r) | Formula::Implication(l, r) => {
            let mut clauses = positive(l);
            clauses.append(&mut negative(r));
            clauses
        }
        Formula::Equiv(l, r) => {
            let mut left_to_right = positive(l);
            left_to_right.append(&mut negative(r));
            let mut right_to_left = positive(r);
            right_to_left.append(&mut negative(l));
            product(vec![left_to_right, right_to_left])
        }
    }
}

/// Distributes a disjunction over the CNFs of its operands.
fn product(cnfs: Vec<Vec<SignedClause>>) -> Vec<SignedClause> {
    cnfs.into_iter().fold(vec![vec![]], |acc, cnf| {
        acc.iter()
            .flat_map(|prefix| {
                cnf.iter().map(move |clause| {
                    let mut merged = prefix.clone();
                    merged.extend_from_slice(clause);
                    merged
                })
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, Syntax};

    fn formula(s: &str) -> Formula {
        parse(s, Syntax::PlainText).unwrap().into_formula().unwrap()
    }

    fn atom(name: &str) -> Formula {
        Formula::new_atom(name)
    }

    fn not(name: &str) -> Formula {
        Formula::new_not(atom(name))
    }

    #[test]
    fn test_not_or() {
        assert_eq!(
            Formula::new_and(vec![
                Formula::new_or(vec![not("B")]),
                Formula::new_or(vec![not("C")])
            ]),
            to_cnf(&formula("!(B|C)"))
        );
    }

    #[test]
    fn test_equiv() {
        assert_eq!(
            Formula::new_and(vec![
                Formula::new_or(vec![not("B"), atom("P_1"), atom("P_2")]),
                Formula::new_or(vec![not("P_1"), atom("B")]),
                Formula::new_or(vec![not("P_2"), atom("B")]),
            ]),
            to_cnf(&formula("(B <-> (P_1 | P_2))"))
        );
    }

    #[test]
    fn test_distribution() {
        assert_eq!(
            Formula::new_and(vec![
                Formula::new_or(vec![atom("A"), atom("B"), atom("D")]),
                Formula::new_or(vec![atom("A"), atom("C"), atom("D")]),
            ]),
            to_cnf(&formula("(A | (B & C) | D)"))
        );
        assert_eq!(
            Formula::new_and(vec![
                Formula::new_or(vec![atom("A")]),
                Formula::new_or(vec![atom("B"), atom("D")]),
                Formula::new_or(vec![atom("B"), atom("E")]),
            ]),
            to_cnf(&formula("(A & (B | (D & E)))"))
        );
    }

    #[test]
    fn test_implications() {
        let expected = Formula::new_and(vec![Formula::new_or(vec![not("a"), atom("b")])]);
        assert_eq!(expected, to_cnf(&formula("a -> b")));
        assert_eq!(expected, to_cnf(&formula("a =) b")));
        assert_eq!(
            Formula::new_and(vec![
                Formula::new_or(vec![atom("a")]),
                Formula::new_or(vec![not("b")])
            ]),
            to_cnf(&formula("!(a -> b)"))
        );
    }

    #[test]
    fn test_not_equiv() {
        let clauses = cnf_clauses(&formula("!(a <-> b)"));
        assert_eq!(
            vec![
                vec![("a", true), ("b", true)],
                vec![("a", true), ("a", false)],
                vec![("b", false), ("b", true)],
                vec![("b", false), ("a", false)],
            ],
            clauses
        );
    }

    #[test]
    fn test_trivial_formulas() {
        assert!(cnf_clauses(&Formula::new_and(vec![])).is_empty());
        assert_eq!(vec![Vec::<(&str, bool)>::new()], cnf_clauses(&Formula::new_or(vec![])));
    }
}
