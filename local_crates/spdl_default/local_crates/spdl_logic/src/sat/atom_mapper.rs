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

use crate::{Literal, VarId};
use rustc_hash::FxHashMap;

/// A bidirectional mapping between atom names and SAT variables.
///
/// Variables are given in the order atoms are registered, starting at zero.
/// A registered atom keeps its variable until the mapping is truncated below it.
///
/// # Examples
///
/// ```
/// use spdl_logic::AtomMapper;
///
/// let mut mapper = AtomMapper::default();
/// let a = mapper.var_id_or_insert("a");
/// let b = mapper.var_id_or_insert("b");
/// assert_eq!(a, mapper.var_id_or_insert("a"));
/// assert_eq!(Some("b"), mapper.name(b));
/// mapper.truncate(1);
/// assert_eq!(None, mapper.var_id("b"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AtomMapper {
    name_to_var: FxHashMap<String, VarId>,
    var_to_name: Vec<String>,
}

impl AtomMapper {
    /// Returns the variable associated with an atom, registering the atom if needed.
    pub fn var_id_or_insert(&mut self, name: &str) -> VarId {
        if let Some(v) = self.name_to_var.get(name) {
            return *v;
        }
        let v = VarId::from(self.var_to_name.len());
        self.name_to_var.insert(name.to_string(), v);
        self.var_to_name.push(name.to_string());
        v
    }

    /// Returns the literal of an atom with the given polarity, registering the atom if needed.
    pub fn literal_or_insert(&mut self, name: &str, polarity: bool) -> Literal {
        Literal::new(self.var_id_or_insert(name), polarity)
    }

    /// Returns the variable associated with an atom, if it is registered.
    pub fn var_id(&self, name: &str) -> Option<VarId> {
        self.name_to_var.get(name).copied()
    }

    /// Returns the name of the atom associated with a variable.
    pub fn name(&self, var_id: VarId) -> Option<&str> {
        self.var_to_name
            .get(usize::from(var_id))
            .map(|s| s.as_str())
    }

    /// Returns the registered atom names, ordered by variable.
    pub fn names(&self) -> &[String] {
        &self.var_to_name
    }

    /// Returns the number of registered atoms.
    pub fn len(&self) -> usize {
        self.var_to_name.len()
    }

    /// Returns `true` iff no atom is registered.
    pub fn is_empty(&self) -> bool {
        self.var_to_name.is_empty()
    }

    /// Forgets the atoms whose variable index is greater than or equal to `len`.
    pub fn truncate(&mut self, len: usize) {
        for name in self.var_to_name.drain(len.min(self.var_to_name.len())..) {
            self.name_to_var.remove(&name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vars() {
        let mut m = AtomMapper::default();
        assert!(m.is_empty());
        let l = m.literal_or_insert("x", false);
        assert_eq!(0, usize::from(l.var_id()));
        assert!(!l.polarity());
        let l = m.literal_or_insert("y", true);
        assert_eq!(1, usize::from(l.var_id()));
        assert_eq!(1, usize::from(m.literal_or_insert("y", false).var_id()));
        assert_eq!(2, m.len());
        assert_eq!(&["x".to_string(), "y".to_string()], m.names());
    }

    #[test]
    fn test_truncate_keeps_older_atoms() {
        let mut m = AtomMapper::default();
        m.var_id_or_insert("x");
        m.var_id_or_insert("y");
        m.var_id_or_insert("z");
        let before = m.clone();
        m.truncate(5);
        assert_eq!(before, m);
        m.truncate(1);
        assert_eq!(Some(VarId::from(0)), m.var_id("x"));
        assert_eq!(None, m.var_id("y"));
        assert_eq!(None, m.name(VarId::from(1)));
        assert_eq!(VarId::from(1), m.var_id_or_insert("z"));
    }
}
