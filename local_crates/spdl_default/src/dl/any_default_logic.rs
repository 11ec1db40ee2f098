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

use super::{
    ClassicalDefaultLogic, DefaultLogic, NativeParaconsistentDefaultLogic,
    RenamingParaconsistentDefaultLogic,
};
use crate::FormatError;
use spdl_logic::{ClassicalLogic, DefaultRule, Formula, PropositionalLogic};
use std::{fmt::Display, str::FromStr};

/// The kinds of default logics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicKind {
    /// Reiter's default logic over classical propositional logic (`cpdl`)
    Classical,
    /// Paraconsistent default logic over a paraconsistent ground logic (`spdl1`)
    Native,
    /// Paraconsistent default logic encoded into classical default logic (`spdl2`)
    Renaming,
}

impl LogicKind {
    /// Returns the name of the logic.
    pub fn name(&self) -> &'static str {
        match self {
            LogicKind::Classical => "cpdl",
            LogicKind::Native => "spdl1",
            LogicKind::Renaming => "spdl2",
        }
    }
}

impl Default for LogicKind {
    fn default() -> Self {
        LogicKind::Native
    }
}

impl FromStr for LogicKind {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpdl" => Ok(LogicKind::Classical),
            "spdl1" => Ok(LogicKind::Native),
            "spdl2" => Ok(LogicKind::Renaming),
            _ => Err(FormatError::UnknownLogic(s.to_string())),
        }
    }
}

impl Display for LogicKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A default theory of one of the logics given by [`LogicKind`].
///
/// Extensions are given as lists of formulas, since their ground logics differ.
///
/// # Examples
///
/// ```
/// use spdl_default::{AnyDefaultLogic, LogicKind};
/// use spdl_logic::{parse, Syntax};
///
/// let mut theory = AnyDefaultLogic::new(LogicKind::Classical);
/// theory.add_fact(parse("a", Syntax::PlainText).unwrap().into_formula().unwrap());
/// theory.add_rule(parse("a : b / b", Syntax::PlainText).unwrap().into_rule().unwrap());
/// assert_eq!("({a : b / b}, {a})", theory.to_string());
/// assert_eq!(1, theory.count_extensions());
/// ```
#[derive(Clone)]
pub enum AnyDefaultLogic {
    /// A theory of [`LogicKind::Classical`]
    Classical(ClassicalDefaultLogic<ClassicalLogic>),
    /// A theory of [`LogicKind::Native`]
    Native(NativeParaconsistentDefaultLogic),
    /// A theory of [`LogicKind::Renaming`]
    Renaming(RenamingParaconsistentDefaultLogic),
}

impl AnyDefaultLogic {
    /// Builds an empty theory of the given kind.
    pub fn new(kind: LogicKind) -> Self {
        match kind {
            LogicKind::Classical => AnyDefaultLogic::Classical(ClassicalDefaultLogic::default()),
            LogicKind::Native => AnyDefaultLogic::Native(Default::default()),
            LogicKind::Renaming => AnyDefaultLogic::Renaming(Default::default()),
        }
    }

    /// Builds a theory of the given kind from rules and facts.
    pub fn with_content(kind: LogicKind, rules: &[DefaultRule], facts: &[Formula]) -> Self {
        let mut logic = AnyDefaultLogic::new(kind);
        rules.iter().for_each(|r| logic.add_rule(r.clone()));
        facts.iter().for_each(|f| logic.add_fact(f.clone()));
        logic
    }

    /// Returns the kind of this theory.
    pub fn kind(&self) -> LogicKind {
        match self {
            AnyDefaultLogic::Classical(_) => LogicKind::Classical,
            AnyDefaultLogic::Native(_) => LogicKind::Native,
            AnyDefaultLogic::Renaming(_) => LogicKind::Renaming,
        }
    }

    /// Adds a default rule.
    pub fn add_rule(&mut self, rule: DefaultRule) {
        match self {
            AnyDefaultLogic::Classical(l) => l.add_rule(rule),
            AnyDefaultLogic::Native(l) => l.add_rule(rule),
            AnyDefaultLogic::Renaming(l) => l.add_rule(rule),
        }
    }

    /// Adds a fact.
    pub fn add_fact(&mut self, fact: Formula) {
        match self {
            AnyDefaultLogic::Classical(l) => l.add_fact(fact),
            AnyDefaultLogic::Native(l) => l.add_fact(fact),
            AnyDefaultLogic::Renaming(l) => l.add_fact(fact),
        }
    }

    /// Returns the default rules.
    pub fn rules(&self) -> &[DefaultRule] {
        match self {
            AnyDefaultLogic::Classical(l) => l.rules(),
            AnyDefaultLogic::Native(l) => l.rules(),
            AnyDefaultLogic::Renaming(l) => l.rules(),
        }
    }

    /// Returns the facts.
    pub fn facts(&self) -> &[Formula] {
        match self {
            AnyDefaultLogic::Classical(l) => l.facts(),
            AnyDefaultLogic::Native(l) => l.facts(),
            AnyDefaultLogic::Renaming(l) => l.facts(),
        }
    }

    /// Returns the extensions, each one as the list of its formulas.
    pub fn all_extensions(&self) -> Vec<Vec<Formula>> {
        fn formulas_of<G: PropositionalLogic>(extensions: Vec<G>) -> Vec<Vec<Formula>> {
            extensions.iter().map(|e| e.formulas().to_vec()).collect()
        }
        match self {
            AnyDefaultLogic::Classical(l) => formulas_of(l.all_extensions()),
            AnyDefaultLogic::Native(l) => formulas_of(l.all_extensions()),
            AnyDefaultLogic::Renaming(l) => formulas_of(l.all_extensions()),
        }
    }

    /// Returns the number of extensions.
    pub fn count_extensions(&self) -> usize {
        self.all_extensions().len()
    }

    /// Returns `true` iff the theory has an extension.
    pub fn has_extension(&self) -> bool {
        match self {
            AnyDefaultLogic::Classical(l) => l.has_extension(),
            AnyDefaultLogic::Native(l) => l.has_extension(),
            AnyDefaultLogic::Renaming(l) => l.has_extension(),
        }
    }

    /// Returns `true` iff an extension entails the formula.
    pub fn credulous_entail(&self, formula: &Formula) -> bool {
        match self {
            AnyDefaultLogic::Classical(l) => l.credulous_entail(formula),
            AnyDefaultLogic::Native(l) => l.credulous_entail(formula),
            AnyDefaultLogic::Renaming(l) => l.credulous_entail(formula),
        }
    }

    /// Returns `true` iff all the extensions entail the formula.
    pub fn skeptical_entail(&self, formula: &Formula) -> bool {
        match self {
            AnyDefaultLogic::Classical(l) => l.skeptical_entail(formula),
            AnyDefaultLogic::Native(l) => l.skeptical_entail(formula),
            AnyDefaultLogic::Renaming(l) => l.skeptical_entail(formula),
        }
    }

    /// Renders the theory in the display-markup syntax.
    pub fn to_markup(&self) -> String {
        match self {
            AnyDefaultLogic::Classical(l) => l.to_markup(),
            AnyDefaultLogic::Native(l) => l.to_markup(),
            AnyDefaultLogic::Renaming(l) => l.to_markup(),
        }
    }
}

impl Display for AnyDefaultLogic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnyDefaultLogic::Classical(l) => write!(f, "{}", l),
            AnyDefaultLogic::Native(l) => write!(f, "{}", l),
            AnyDefaultLogic::Renaming(l) => write!(f, "{}", l),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenamingEncoding;
    use spdl_logic::{parse, Syntax};

    fn formula(s: &str) -> Formula {
        parse(s, Syntax::PlainText).unwrap().into_formula().unwrap()
    }

    #[test]
    fn test_logic_names() {
        for kind in &[LogicKind::Classical, LogicKind::Native, LogicKind::Renaming] {
            assert_eq!(*kind, kind.name().parse::<LogicKind>().unwrap());
            assert_eq!(*kind, AnyDefaultLogic::new(*kind).kind());
        }
        assert_eq!(
            "unknown logic \"dl\"",
            "dl".parse::<LogicKind>().unwrap_err().to_string()
        );
        assert_eq!(LogicKind::Native, LogicKind::default());
    }

    #[test]
    fn test_contradictory_facts() {
        let facts = vec![formula("a"), formula("!a")];
        let classical = AnyDefaultLogic::with_content(LogicKind::Classical, &[], &facts);
        assert_eq!(1, classical.count_extensions());
        assert!(classical.credulous_entail(&formula("b")));
        for kind in &[LogicKind::Native, LogicKind::Renaming] {
            let logic = AnyDefaultLogic::with_content(*kind, &[], &facts);
            assert_eq!(1, logic.count_extensions());
            assert!(logic.has_extension());
            assert!(!logic.credulous_entail(&formula("b")));
        }
    }

    #[test]
    fn test_extension_formulas() {
        let facts = vec![formula("!a")];
        let classical = AnyDefaultLogic::with_content(LogicKind::Classical, &[], &facts);
        assert_eq!(vec![facts.clone()], classical.all_extensions());
        let renaming = AnyDefaultLogic::with_content(LogicKind::Renaming, &[], &facts);
        assert_eq!(
            vec![vec![
                Formula::new_atom("a^-"),
                RenamingEncoding.classical_assertion("a")
            ]],
            renaming.all_extensions()
        );
        assert_eq!(&facts[..], renaming.facts());
    }
}
