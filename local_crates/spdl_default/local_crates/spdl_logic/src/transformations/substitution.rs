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
use rustc_hash::FxHashMap;
use std::iter::FromIterator;

/// A mapping from atom names to formulas, used to replace atoms.
///
/// Atoms that are not mapped are kept as is.
///
/// # Examples
///
/// ```
/// use spdl_logic::{Formula, FormulaTransformer, Substitution};
///
/// let f = Formula::new_or(vec![Formula::new_atom("a"), Formula::new_atom("b")]);
/// let s = Substitution::default().with("a", Formula::new_not(Formula::new_atom("c")));
/// assert_eq!("(!c | b)", s.transform(&f).to_string());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substitution {
    replacements: FxHashMap<String, Formula>,
}

impl Substitution {
    /// Adds a replacement to this substitution, overriding a previous one for the same atom.
    pub fn with<T>(mut self, atom_name: T, replacement: Formula) -> Self
    where
        T: Into<String>,
    {
        self.add(atom_name, replacement);
        self
    }

    /// Adds a replacement to this substitution, overriding a previous one for the same atom.
    pub fn add<T>(&mut self, atom_name: T, replacement: Formula)
    where
        T: Into<String>,
    {
        self.replacements.insert(atom_name.into(), replacement);
    }

    /// Returns `true` iff no replacement was registered.
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }
}

impl FromIterator<(String, Formula)> for Substitution {
    fn from_iter<T: IntoIterator<Item = (String, Formula)>>(pairs: T) -> Self {
        Substitution {
            replacements: pairs.into_iter().collect(),
        }
    }
}

impl FormulaTransformer for Substitution {
    fn transform(&self, formula: &Formula) -> Formula {
        match formula {
            Formula::Atom(name) => self
                .replacements
                .get(name)
                .cloned()
                .unwrap_or_else(|| formula.clone()),
            _ => formula.map_sub_formulas(|f| self.transform(f)),
        }
    }
}

/// Replaces each occurrence of an atom by a formula.
pub fn subst(formula: &Formula, atom_name: &str, replacement: &Formula) -> Formula {
    Substitution::default()
        .with(atom_name, replacement.clone())
        .transform(formula)
}

/// Replaces the occurrences of several atoms at once.
///
/// Replacements are not applied recursively: atoms introduced by a replacement are kept as is.
pub fn subst_all(formula: &Formula, replacements: &Substitution) -> Formula {
    replacements.transform(formula)
}
