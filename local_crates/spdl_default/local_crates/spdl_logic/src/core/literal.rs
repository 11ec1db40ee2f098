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

/// A variable identifier, as handled by SAT solvers.
///
/// Variable identifiers are dense and start at zero; the [`AtomMapper`](crate::AtomMapper) associates them with atom names.
///
/// # Examples
///
/// ```
/// use spdl_logic::VarId;
///
/// assert_eq!(0, usize::from(VarId::from(0)))
/// ```
#[derive(Clone, Copy, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct VarId(usize);

impl From<usize> for VarId {
    fn from(u: usize) -> Self {
        VarId(u)
    }
}

impl From<VarId> for usize {
    fn from(v: VarId) -> Self {
        v.0
    }
}

impl std::fmt::Display for VarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// A literal, composed by a [`VarId`] and a `bool` (its polarity).
///
/// Literals are ordered by variable first, then by polarity.
///
/// # Examples
///
/// ```
/// use spdl_logic::{VarId, Literal};
///
/// let v = VarId::from(0);
/// let l = Literal::new(v, true);
/// assert_eq!(Literal::new(v, false), l.negate());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal(VarId, bool);

impl Literal {
    /// Builds a new literal, given its [`VarId`] and its polarity.
    pub fn new(var_id: VarId, polarity: bool) -> Self {
        Literal(var_id, polarity)
    }

    /// Returns the negation of the literal, as a new `Literal`.
    pub fn negate(&self) -> Self {
        Literal(self.0, !self.1)
    }

    fn is_negation_of(&self, other: &Literal) -> bool {
        self.0 == other.0 && self.1 != other.1
    }

    /// Returns the [`VarId`] of this literal.
    pub fn var_id(&self) -> VarId {
        self.0
    }

    /// Returns the polarity of this literal.
    pub fn polarity(&self) -> bool {
        self.1
    }

    /// Returns the DIMACS representation of this literal (variable indices are shifted by one).
    ///
    /// # Examples
    ///
    /// ```
    /// use spdl_logic::Literal;
    ///
    /// assert_eq!(-3, Literal::from((2, false)).to_dimacs());
    /// assert_eq!(Literal::from((2, false)), Literal::from_dimacs(-3));
    /// ```
    pub fn to_dimacs(&self) -> i32 {
        let index = usize::from(self.0) as i32 + 1;
        if self.1 {
            index
        } else {
            -index
        }
    }

    /// Builds a literal from its DIMACS representation.
    ///
    /// The DIMACS literal must not be zero.
    pub fn from_dimacs(lit: i32) -> Self {
        Literal::new(VarId::from(lit.unsigned_abs() as usize - 1), lit > 0)
    }
}

impl From<(usize, bool)> for Literal {
    fn from(couple: (usize, bool)) -> Self {
        Literal::new(VarId::from(couple.0), couple.1)
    }
}

/// A disjunction of literals.
///
/// Clauses are kept sorted and free of duplicates.
/// A clause containing a literal and its negation is a tautology; such clauses cannot be built.
/// The empty clause is allowed and stands for the false formula.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause(Vec<Literal>);

impl Clause {
    /// Builds a clause from a set of literals.
    ///
    /// Returns `None` if the literals form a tautology.
    ///
    /// # Examples
    ///
    /// ```
    /// use spdl_logic::Clause;
    ///
    /// let c = Clause::new(vec![(1, true).into(), (0, false).into(), (1, true).into()]).unwrap();
    /// assert_eq!(&[(0, false).into(), (1, true).into()], c.as_literals());
    /// assert!(Clause::new(vec![(0, false).into(), (0, true).into()]).is_none());
    /// ```
    pub fn new(mut literals: Vec<Literal>) -> Option<Clause> {
        literals.sort_unstable();
        literals.dedup();
        if literals.windows(2).any(|w| w[0].is_negation_of(&w[1])) {
            return None;
        }
        Some(Clause(literals))
    }

    /// Returns the literals of this clause, in increasing order.
    pub fn as_literals(&self) -> &[Literal] {
        &self.0
    }

    /// Returns the number of literals in this clause.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` iff this clause is the empty (falsified) clause.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negate() {
        let lit = Literal::new(0.into(), false);
        let neg = lit.negate();
        assert!(neg.1);
    }

    #[test]
    fn test_eq() {
        let lit0 = Literal::new(0.into(), false);
        let lit1 = Literal::new(0.into(), false);
        let lit2 = Literal::new(0.into(), true);
        assert_eq!(lit0, lit1);
        assert_ne!(lit0, lit2);
    }

    #[test]
    fn test_sort_and_dedup() {
        let c = Clause::new(vec![
            Literal::new(1.into(), true),
            Literal::new(0.into(), false),
            Literal::new(1.into(), true),
            Literal::new(2.into(), false),
        ])
        .unwrap();
        assert_eq!(
            &[
                Literal::new(0.into(), false),
                Literal::new(1.into(), true),
                Literal::new(2.into(), false),
            ],
            c.as_literals()
        );
    }

    #[test]
    fn test_tautology() {
        assert!(Clause::new(vec![
            Literal::new(3.into(), true),
            Literal::new(1.into(), false),
            Literal::new(3.into(), false),
        ])
        .is_none());
    }

    #[test]
    fn test_empty_clause() {
        let c = Clause::new(vec![]).unwrap();
        assert!(c.is_empty());
    }

    #[test]
    fn test_dimacs() {
        for l in &[1, -1, 7, -42] {
            assert_eq!(*l, Literal::from_dimacs(*l).to_dimacs());
        }
        assert_eq!(Literal::new(0.into(), true), Literal::from_dimacs(1));
    }
}
