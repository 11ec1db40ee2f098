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

/// Merges nested conjunctions (resp. disjunctions) into their parent conjunction (resp. disjunction).
///
/// Only the direct chains of the same connector are merged;
/// the operands of other connectors are left untouched.
/// A conjunction or a disjunction with a single operand is replaced by this operand.
///
/// # Examples
///
/// ```
/// use spdl_logic::{parse, to_plain, Syntax};
///
/// let f = parse("(a & b) & c", Syntax::PlainText).unwrap().into_formula().unwrap();
/// assert_eq!("(a & b & c)", to_plain(&f).to_string());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlainTransformer;

impl FormulaTransformer for PlainTransformer {
    fn transform(&self, formula: &Formula) -> Formula {
        match formula {
            Formula::And(subs) => unwrap_single(
                merge(subs, |f| match f {
                    Formula::And(inner) => Ok(inner),
                    other => Err(other),
                }),
                Formula::And,
            ),
            Formula::Or(subs) => unwrap_single(
                merge(subs, |f| match f {
                    Formula::Or(inner) => Ok(inner),
                    other => Err(other),
                }),
                Formula::Or,
            ),
            _ => formula.clone(),
        }
    }
}

fn unwrap_single<F>(mut subs: Vec<Formula>, connector: F) -> Formula
where
    F: Fn(Vec<Formula>) -> Formula,
{
    match subs.len() {
        1 => subs.remove(0),
        _ => connector(subs),
    }
}

fn merge<F>(subs: &[Formula], same_connector: F) -> Vec<Formula>
where
    F: Fn(Formula) -> Result<Vec<Formula>, Formula>,
{
    let mut merged = Vec::with_capacity(subs.len());
    for sub in subs {
        match same_connector(PlainTransformer.transform(sub)) {
            Ok(mut inner) => merged.append(&mut inner),
            Err(other) => merged.push(other),
        }
    }
    merged
}

/// Merges the nested conjunctions and disjunctions of a formula (see [`PlainTransformer`]).
pub fn to_plain(formula: &Formula) -> Formula {
    PlainTransformer.transform(formula)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(name: &str) -> Formula {
        Formula::new_atom(name)
    }

    #[test]
    fn test_merge_chains() {
        let f = Formula::new_and(vec![
            Formula::new_and(vec![atom("A"), atom("B")]),
            atom("C"),
        ]);
        assert_eq!(
            Formula::new_and(vec![atom("A"), atom("B"), atom("C")]),
            to_plain(&f)
        );
    }

    #[test]
    fn test_other_connectors_are_kept() {
        let f = Formula::new_and(vec![
            Formula::new_or(vec![Formula::new_or(vec![atom("A"), atom("B")]), atom("C")]),
            atom("D"),
        ]);
        assert_eq!(
            Formula::new_and(vec![
                Formula::new_or(vec![atom("A"), atom("B"), atom("C")]),
                atom("D")
            ]),
            to_plain(&f)
        );
        let g = Formula::new_not(Formula::new_and(vec![
            Formula::new_and(vec![atom("A"), atom("B")]),
            atom("C"),
        ]));
        assert_eq!(g, to_plain(&g));
    }

    #[test]
    fn test_single_operands_are_unwrapped() {
        let f = Formula::new_and(vec![
            Formula::new_or(vec![atom("A")]),
            Formula::new_or(vec![atom("B"), Formula::new_and(vec![atom("C")])]),
        ]);
        assert_eq!(
            Formula::new_and(vec![atom("A"), Formula::new_or(vec![atom("B"), atom("C")])]),
            to_plain(&f)
        );
        assert_eq!(atom("A"), to_plain(&Formula::new_and(vec![Formula::new_or(vec![atom("A")])])));
    }
}
