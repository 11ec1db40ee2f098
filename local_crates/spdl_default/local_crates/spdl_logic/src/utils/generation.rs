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

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(0);

/// A token identifying a state of a mutable object.
///
/// Each call to [`Generation::next`] returns a token never returned before,
/// so an object bumping its token on every mutation can be compared to a snapshot in constant time.
///
/// # Examples
///
/// ```
/// use spdl_logic::Generation;
///
/// let g = Generation::next();
/// assert_eq!(g, g.clone());
/// assert_ne!(g, Generation::next());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Generation(u64);

impl Generation {
    /// Returns a fresh token.
    pub fn next() -> Self {
        Generation(NEXT_GENERATION.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for Generation {
    fn default() -> Self {
        Generation::next()
    }
}
