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

use crate::{theory_to_markup, Formula};
use std::fmt::Display;

/// A propositional theory able to decide satisfiability and entailment.
///
/// Theories are built empty and grow by adding formulas.
/// Cloning a theory gives an independent theory: adding formulas to a clone does not alter the original.
pub trait PropositionalLogic: Clone + Default + Display {
    /// Adds a formula to the theory.
    fn add(&mut self, formula: Formula);

    /// Returns the formulas of the theory, in the order they were added.
    fn formulas(&self) -> &[Formula];

    /// Checks whether the theory, extended by `formula` if it is provided, is satisfiable.
    ///
    /// The formula is only considered during this call; the theory is left unchanged.
    fn sat(&mut self, formula: Option<&Formula>) -> bool;

    /// Checks whether the theory entails a formula.
    fn entail(&mut self, formula: &Formula) -> bool {
        !self.sat(Some(&Formula::new_not(formula.clone())))
    }

    /// Renders the theory in the display-markup syntax.
    fn to_markup(&self) -> String {
        theory_to_markup(self.formulas())
    }
}

/// Writes a list of formulas as `{f1, f2}`.
pub(crate) fn fmt_formula_set(
    formulas: &[Formula],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    write!(f, "{{")?;
    for (i, formula) in formulas.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", formula)?;
    }
    write!(f, "}}")
}
