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

/// An iterator over the `k`-subsets of `{0, ..., n-1}`, in lexicographic order.
///
/// Each subset is given as a sorted vector of indices.
///
/// # Examples
///
/// ```
/// use spdl_default::Combinations;
///
/// let subsets: Vec<Vec<usize>> = Combinations::new(3, 2).collect();
/// assert_eq!(vec![vec![0, 1], vec![0, 2], vec![1, 2]], subsets);
/// assert_eq!(vec![Vec::<usize>::new()], Combinations::new(3, 0).collect::<Vec<_>>());
/// assert_eq!(0, Combinations::new(2, 3).count());
/// ```
pub struct Combinations {
    n: usize,
    current: Option<Vec<usize>>,
}

impl Combinations {
    /// Builds an iterator over the subsets of size `k` of a set of size `n`.
    pub fn new(n: usize, k: usize) -> Self {
        Combinations {
            n,
            current: if k <= n { Some((0..k).collect()) } else { None },
        }
    }

    /// Builds an iterator over all the subsets of a set of size `n`, by increasing size.
    ///
    /// # Examples
    ///
    /// ```
    /// use spdl_default::Combinations;
    ///
    /// let subsets: Vec<Vec<usize>> = Combinations::by_increasing_size(2).collect();
    /// assert_eq!(vec![vec![], vec![0], vec![1], vec![0, 1]], subsets);
    /// ```
    pub fn by_increasing_size(n: usize) -> impl Iterator<Item = Vec<usize>> {
        (0..=n).flat_map(move |k| Combinations::new(n, k))
    }

    fn advance(&mut self) {
        let n = self.n;
        let current = match self.current.as_mut() {
            Some(c) => c,
            None => return,
        };
        let k = current.len();
        let pivot = (0..k).rev().find(|i| current[*i] != i + n - k);
        match pivot {
            Some(i) => {
                current[i] += 1;
                for j in i + 1..k {
                    current[j] = current[j - 1] + 1;
                }
            }
            None => self.current = None,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.current.clone();
        self.advance();
        result
    }
}
