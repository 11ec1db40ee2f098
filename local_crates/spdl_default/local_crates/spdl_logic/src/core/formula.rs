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

use std::fmt::Display;

/// The connectors a [`Formula`] can be built with.
///
/// Connectors fall in two categories: the prefix connector ([`Connector::Not`]) and the infix ones.
/// Among the infix connectors, [`Connector::Imply`] and [`Connector::Implication`] form the implicative family;
/// they share their semantics but not their concrete syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Connector {
    /// The negation
    Not,
    /// The conjunction
    And,
    /// The disjunction
    Or,
    /// The implication written `->` (`\to` in markup)
    Imply,
    /// The implication written `=)` (`\supset` in markup)
    Implication,
    /// The equivalence
    Equiv,
}

impl Connector {
    /// Returns `true` iff this connector is written before its single operand.
    pub fn is_prefix(&self) -> bool {
        matches!(self, Connector::Not)
    }

    /// Returns `true` iff this connector is written between its operands.
    pub fn is_infix(&self) -> bool {
        !self.is_prefix()
    }

    /// Returns `true` for the two implication connectors.
    pub fn is_implicative(&self) -> bool {
        matches!(self, Connector::Imply | Connector::Implication)
    }

    /// Returns the symbol of this connector in the plain-text syntax.
    ///
    /// # Examples
    ///
    /// ```
    /// use spdl_logic::Connector;
    ///
    /// assert_eq!("=)", Connector::Implication.plain_symbol());
    /// ```
    pub fn plain_symbol(&self) -> &'static str {
        match self {
            Connector::Not => "!",
            Connector::And => "&",
            Connector::Or => "|",
            Connector::Imply => "->",
            Connector::Implication => "=)",
            Connector::Equiv => "<->",
        }
    }

    /// Returns the symbol of this connector in the display-markup syntax.
    ///
    /// # Examples
    ///
    /// ```
    /// use spdl_logic::Connector;
    ///
    /// assert_eq!(r"\supset", Connector::Implication.markup_symbol());
    /// ```
    pub fn markup_symbol(&self) -> &'static str {
        match self {
            Connector::Not => r"\lnot",
            Connector::And => r"\land",
            Connector::Or => r"\lor",
            Connector::Imply => r"\to",
            Connector::Implication => r"\supset",
            Connector::Equiv => r"\leftrightarrow",
        }
    }

    pub(crate) fn all() -> [Connector; 6] {
        [
            Connector::Not,
            Connector::And,
            Connector::Or,
            Connector::Imply,
            Connector::Implication,
            Connector::Equiv,
        ]
    }
}

/// A propositional formula.
///
/// Formulas are immutable trees.
/// Equality is structural: two formulas are equal iff they share the same variant and their children are equal, position by position.
/// In particular, `And(a, b)` and `And(b, a)` are different formulas, even if they are semantically equivalent.
///
/// # Examples
///
/// ```
/// use spdl_logic::Formula;
///
/// let f = Formula::new_imply(Formula::new_atom("bird"), Formula::new_atom("fly"));
/// assert_eq!("(bird -> fly)", format!("{}", f));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Formula {
    /// A propositional atom, identified by its name
    Atom(String),
    /// A negation
    Not(Box<Formula>),
    /// A n-ary conjunction
    And(Vec<Formula>),
    /// A n-ary disjunction
    Or(Vec<Formula>),
    /// An implication written `->`
    Imply(Box<Formula>, Box<Formula>),
    /// An implication written `=)`
    Implication(Box<Formula>, Box<Formula>),
    /// An equivalence
    Equiv(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// Builds an atom given its name.
    pub fn new_atom<T>(name: T) -> Self
    where
        T: Into<String>,
    {
        Formula::Atom(name.into())
    }

    /// Builds the negation of a formula.
    pub fn new_not(sub: Formula) -> Self {
        Formula::Not(Box::new(sub))
    }

    /// Builds a conjunction.
    pub fn new_and(subs: Vec<Formula>) -> Self {
        Formula::And(subs)
    }

    /// Builds a disjunction.
    pub fn new_or(subs: Vec<Formula>) -> Self {
        Formula::Or(subs)
    }

    /// Builds an implication of the `->` kind.
    pub fn new_imply(left: Formula, right: Formula) -> Self {
        Formula::Imply(Box::new(left), Box::new(right))
    }

    /// Builds an implication of the `=)` kind.
    pub fn new_implication(left: Formula, right: Formula) -> Self {
        Formula::Implication(Box::new(left), Box::new(right))
    }

    /// Builds an equivalence.
    pub fn new_equiv(left: Formula, right: Formula) -> Self {
        Formula::Equiv(Box::new(left), Box::new(right))
    }

    /// Builds a binary formula given its connector.
    ///
    /// Returns `None` if the connector is [`Connector::Not`].
    pub fn new_binary(connector: Connector, left: Formula, right: Formula) -> Option<Self> {
        match connector {
            Connector::Not => None,
            Connector::And => Some(Formula::And(vec![left, right])),
            Connector::Or => Some(Formula::Or(vec![left, right])),
            Connector::Imply => Some(Formula::new_imply(left, right)),
            Connector::Implication => Some(Formula::new_implication(left, right)),
            Connector::Equiv => Some(Formula::new_equiv(left, right)),
        }
    }

    /// Returns the connector at the root of this formula, or `None` for an atom.
    pub fn connector(&self) -> Option<Connector> {
        match self {
            Formula::Atom(_) => None,
            Formula::Not(_) => Some(Connector::Not),
            Formula::And(_) => Some(Connector::And),
            Formula::Or(_) => Some(Connector::Or),
            Formula::Imply(_, _) => Some(Connector::Imply),
            Formula::Implication(_, _) => Some(Connector::Implication),
            Formula::Equiv(_, _) => Some(Connector::Equiv),
        }
    }

    /// Returns the name of the atom if this formula is one.
    pub fn atom_name(&self) -> Option<&str> {
        match self {
            Formula::Atom(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Returns `true` iff this formula is an atom or the negation of an atom.
    pub fn is_literal(&self) -> bool {
        match self {
            Formula::Atom(_) => true,
            Formula::Not(sub) => matches!(sub.as_ref(), Formula::Atom(_)),
            _ => false,
        }
    }

    /// Returns the direct children of this formula, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use spdl_logic::Formula;
    ///
    /// let a = Formula::new_atom("a");
    /// let b = Formula::new_atom("b");
    /// let f = Formula::new_equiv(a.clone(), b.clone());
    /// assert_eq!(vec![&a, &b], f.sub_formulas());
    /// assert!(a.sub_formulas().is_empty());
    /// ```
    pub fn sub_formulas(&self) -> Vec<&Formula> {
        match self {
            Formula::Atom(_) => vec![],
            Formula::Not(sub) => vec![sub.as_ref()],
            Formula::And(subs) | Formula::Or(subs) => subs.iter().collect(),
            Formula::Imply(l, r) | Formula::Implication(l, r) | Formula::Equiv(l, r) => {
                vec![l.as_ref(), r.as_ref()]
            }
        }
    }

    /// Builds a new formula with the same root connector, each child being replaced by the result of `mapper`.
    ///
    /// Atoms are returned unchanged.
    pub fn map_sub_formulas<F>(&self, mut mapper: F) -> Formula
    where
        F: FnMut(&Formula) -> Formula,
    {
        match self {
            Formula::Atom(_) => self.clone(),
            Formula::Not(sub) => Formula::new_not(mapper(sub)),
            Formula::And(subs) => Formula::And(subs.iter().map(|s| mapper(s)).collect()),
            Formula::Or(subs) => Formula::Or(subs.iter().map(|s| mapper(s)).collect()),
            Formula::Imply(l, r) => Formula::new_imply(mapper(l), mapper(r)),
            Formula::Implication(l, r) => Formula::new_implication(mapper(l), mapper(r)),
            Formula::Equiv(l, r) => Formula::new_equiv(mapper(l), mapper(r)),
        }
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Atom(name) => write!(f, "{}", name),
            Formula::Not(sub) => write!(f, "{}{}", Connector::Not.plain_symbol(), sub),
            Formula::And(subs) | Formula::Or(subs) if subs.len() == 1 => write!(f, "{}", subs[0]),
            _ => {
                let children = self.sub_formulas();
                let symbol = self.connector().map(|c| c.plain_symbol()).unwrap_or_default();
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", symbol)?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(name: &str) -> Formula {
        Formula::new_atom(name)
    }

    #[test]
    fn test_structural_eq() {
        let and_ab = Formula::new_and(vec![atom("a"), atom("b")]);
        let and_ba = Formula::new_and(vec![atom("b"), atom("a")]);
        assert_eq!(and_ab, Formula::new_and(vec![atom("a"), atom("b")]));
        assert_ne!(and_ab, and_ba);
        assert_ne!(and_ab, Formula::new_or(vec![atom("a"), atom("b")]));
    }

    #[test]
    fn test_display_single_operand() {
        assert_eq!("a", Formula::new_and(vec![atom("a")]).to_string());
        assert_eq!(
            "(!a & (b | c))",
            Formula::new_and(vec![
                Formula::new_or(vec![Formula::new_not(atom("a"))]),
                Formula::new_or(vec![atom("b"), atom("c")]),
            ])
            .to_string()
        );
    }

    #[test]
    fn test_implications_are_distinct() {
        assert_ne!(
            Formula::new_imply(atom("a"), atom("b")),
            Formula::new_implication(atom("a"), atom("b"))
        );
    }

    #[test]
    fn test_display() {
        let f = Formula::new_not(Formula::new_or(vec![atom("B"), atom("C")]));
        assert_eq!("!(B | C)", format!("{}", f));
        let g = Formula::new_equiv(atom("B"), Formula::new_or(vec![atom("P_1"), atom("P_2")]));
        assert_eq!("(B <-> (P_1 | P_2))", format!("{}", g));
        let h = Formula::new_or(vec![
            atom("A"),
            Formula::new_and(vec![atom("B"), atom("C")]),
            atom("D"),
        ]);
        assert_eq!("(A | (B & C) | D)", format!("{}", h));
    }

    #[test]
    fn test_map_sub_formulas_keeps_connector() {
        let f = Formula::new_implication(atom("a"), atom("b"));
        let g = f.map_sub_formulas(|s| Formula::new_not(s.clone()));
        assert_eq!(
            Formula::new_implication(Formula::new_not(atom("a")), Formula::new_not(atom("b"))),
            g
        );
    }

    #[test]
    fn test_literal() {
        assert!(atom("a").is_literal());
        assert!(Formula::new_not(atom("a")).is_literal());
        assert!(!Formula::new_not(Formula::new_not(atom("a"))).is_literal());
    }

    #[test]
    fn test_new_binary() {
        assert_eq!(None, Formula::new_binary(Connector::Not, atom("a"), atom("b")));
        assert_eq!(
            Some(Formula::new_equiv(atom("a"), atom("b"))),
            Formula::new_binary(Connector::Equiv, atom("a"), atom("b"))
        );
    }
}
