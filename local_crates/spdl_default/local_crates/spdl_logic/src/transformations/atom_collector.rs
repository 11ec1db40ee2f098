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

use crate::Formula;
use rustc_hash::FxHashSet;

/// Returns the names of the atoms occurring in a formula.
///
/// Names are given in the order of their first occurrence, without duplicates.
///
/// # Examples
///
/// ```
/// use spdl_logic::{collect_atoms, parse, Syntax};
///
/// let f = parse("(b -> a) & !b", Syntax::PlainText).unwrap().into_formula().unwrap();
/// assert_eq!(vec!["b", "a"], collect_atoms(&f));
/// ```
pub fn collect_atoms(formula: &Formula) -> Vec<String> {
    let mut atoms = Vec::new();
    let mut seen = FxHashSet::default();
    collect_atoms_into(formula, &mut atoms, &mut seen);
    atoms
}

/// Appends to `atoms` the names of the atoms of `formula` that are not already in `seen`.
fn collect_atoms_into(
    formula: &Formula,
    atoms: &mut Vec<String>,
    seen: &mut FxHashSet<String>,
) {
    match formula {
        Formula::Atom(name) => {
            if seen.insert(name.clone()) {
                atoms.push(name.clone());
            }
        }
        _ => formula
            .sub_formulas()
            .into_iter()
            .for_each(|f| collect_atoms_into(f, atoms, seen)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_atom() {
        assert_eq!(vec!["a"], collect_atoms(&Formula::new_atom("a")));
    }

    #[test]
    fn test_order_and_duplicates() {
        let f = Formula::new_equiv(
            Formula::new_or(vec![Formula::new_atom("c"), Formula::new_atom("a")]),
            Formula::new_and(vec![
                Formula::new_atom("a"),
                Formula::new_not(Formula::new_atom("b")),
                Formula::new_atom("c"),
            ]),
        );
        assert_eq!(vec!["c", "a", "b"], collect_atoms(&f));
    }
}
