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

use super::Formula;
use std::fmt::Display;

/// A default rule `pre : jus / cons`.
///
/// Informally, a default rule states that if the prerequisite `pre` holds
/// and the justification `jus` is consistent with what is believed, then the consequent `cons` can be concluded.
///
/// # Examples
///
/// ```
/// use spdl_logic::{DefaultRule, Formula};
///
/// let bird = Formula::new_atom("bird");
/// let fly = Formula::new_atom("fly");
/// let rule = DefaultRule::new(bird, fly.clone(), fly);
/// assert_eq!("bird : fly / fly", format!("{}", rule));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DefaultRule {
    pre: Formula,
    jus: Formula,
    cons: Formula,
}

impl DefaultRule {
    /// Builds a new default rule given its prerequisite, its justification and its consequent.
    pub fn new(pre: Formula, jus: Formula, cons: Formula) -> Self {
        DefaultRule { pre, jus, cons }
    }

    /// Returns the prerequisite of the rule.
    pub fn pre(&self) -> &Formula {
        &self.pre
    }

    /// Returns the justification of the rule.
    pub fn jus(&self) -> &Formula {
        &self.jus
    }

    /// Returns the consequent of the rule.
    pub fn cons(&self) -> &Formula {
        &self.cons
    }

    /// Builds a new rule by applying a transformation on each of the three formulas.
    pub fn map_formulas<F>(&self, mut f: F) -> DefaultRule
    where
        F: FnMut(&Formula) -> Formula,
    {
        DefaultRule::new(f(&self.pre), f(&self.jus), f(&self.cons))
    }
}

impl Display for DefaultRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {} / {}", self.pre, self.jus, self.cons)
    }
}
