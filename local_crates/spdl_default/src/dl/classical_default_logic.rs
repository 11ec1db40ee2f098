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

use super::default_logic::{fmt_default_theory, DefaultLogic, ExtensionVisitor};
use crate::Combinations;
use log::debug;
use spdl_logic::{default_theory_to_markup, DefaultRule, Formula, PropositionalLogic};
use std::{fmt::Display, ops::ControlFlow};

/// A default theory interpreted in Reiter's default logic, over a ground propositional logic.
///
/// Extensions are computed by checking all the subsets of the default rules, by increasing size.
///
/// # Examples
///
/// ```
/// use spdl_default::{ClassicalDefaultLogic, DefaultLogic};
/// use spdl_logic::{parse, ClassicalLogic, Syntax};
///
/// let mut theory = ClassicalDefaultLogic::<ClassicalLogic>::default();
/// theory.add_fact(parse("T", Syntax::PlainText).unwrap().into_formula().unwrap());
/// theory.add_rule(parse("T : !p / q", Syntax::PlainText).unwrap().into_rule().unwrap());
/// theory.add_rule(parse("T : !q / p", Syntax::PlainText).unwrap().into_rule().unwrap());
/// assert_eq!(2, theory.all_extensions().len());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ClassicalDefaultLogic<G>
where
    G: PropositionalLogic,
{
    rules: Vec<DefaultRule>,
    ground: G,
}

impl<G> ClassicalDefaultLogic<G>
where
    G: PropositionalLogic,
{
    /// Builds a default theory without rules over the given ground theory.
    pub fn with_ground(ground: G) -> Self {
        ClassicalDefaultLogic {
            rules: Vec::new(),
            ground,
        }
    }

    /// Returns the ground theory, containing the facts.
    pub fn ground(&self) -> &G {
        &self.ground
    }

    /// Returns a mutable reference to the ground theory.
    pub fn ground_mut(&mut self) -> &mut G {
        &mut self.ground
    }

    /// Builds the belief set made of the facts and the consequents of the selected rules.
    pub fn build_extension(&self, rule_indices: &[usize]) -> G {
        let mut extension = self.ground.clone();
        for i in rule_indices {
            extension.add(self.rules[*i].cons().clone());
        }
        extension
    }

    /// Checks whether the selected rules are exactly the generating rules of an extension.
    ///
    /// The selected rules must be given by their indices, in increasing order.
    /// Rules are identified by their index, so two identical rules are considered as distinct.
    pub fn is_extension(&self, rule_indices: &[usize]) -> bool {
        let mut selected = vec![false; self.rules.len()];
        rule_indices.iter().for_each(|i| selected[*i] = true);
        let mut candidate = self.build_extension(rule_indices);
        let mut pending = (0..self.rules.len())
            .filter(|i| candidate.sat(Some(self.rules[*i].jus())))
            .collect::<Vec<usize>>();
        if !rule_indices.iter().all(|i| pending.contains(i)) {
            return false;
        }
        let mut closure = self.ground.clone();
        let mut applied = vec![false; self.rules.len()];
        loop {
            let mut not_applied = Vec::with_capacity(pending.len());
            for i in pending.iter().copied() {
                if closure.entail(self.rules[i].pre()) {
                    if !selected[i] {
                        return false;
                    }
                    closure.add(self.rules[i].cons().clone());
                    applied[i] = true;
                } else {
                    not_applied.push(i);
                }
            }
            if not_applied.is_empty() || not_applied.len() == pending.len() {
                break;
            }
            pending = not_applied;
        }
        rule_indices.iter().all(|i| applied[*i])
    }

    /// Renders the theory in the display-markup syntax.
    pub fn to_markup(&self) -> String {
        default_theory_to_markup(&self.rules, self.ground.formulas())
    }
}

impl<G> DefaultLogic for ClassicalDefaultLogic<G>
where
    G: PropositionalLogic,
{
    type Extension = G;

    fn add_rule(&mut self, rule: DefaultRule) {
        self.rules.push(rule);
    }

    fn add_fact(&mut self, fact: Formula) {
        self.ground.add(fact);
    }

    fn rules(&self) -> &[DefaultRule] {
        &self.rules
    }

    fn facts(&self) -> &[Formula] {
        self.ground.formulas()
    }

    fn search_extensions(&self, visitor: &mut ExtensionVisitor<'_, G>) {
        for rule_indices in Combinations::by_increasing_size(self.rules.len()) {
            if self.is_extension(&rule_indices) {
                debug!("found an extension generated by rules {:?}", rule_indices);
                if let ControlFlow::Break(()) = visitor(self.build_extension(&rule_indices)) {
                    return;
                }
            }
        }
    }
}

impl<G> Display for ClassicalDefaultLogic<G>
where
    G: PropositionalLogic,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_default_theory(&self.rules, self.ground.formulas(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spdl_logic::{parse, ClassicalLogic, Syntax};

    fn formula(s: &str) -> Formula {
        parse(s, Syntax::PlainText).unwrap().into_formula().unwrap()
    }

    fn rule(s: &str) -> DefaultRule {
        parse(s, Syntax::PlainText).unwrap().into_rule().unwrap()
    }

    fn theory(rules: &[&str], facts: &[&str]) -> ClassicalDefaultLogic<ClassicalLogic> {
        let mut t = ClassicalDefaultLogic::default();
        rules.iter().for_each(|r| t.add_rule(rule(r)));
        facts.iter().for_each(|f| t.add_fact(formula(f)));
        t
    }

    #[test]
    fn test_tweety() {
        let mut t = theory(
            &["bird : fly / fly"],
            &["tweety", "tweety -> bird", "penguin -> !fly"],
        );
        let extensions = t.all_extensions();
        assert_eq!(1, extensions.len());
        assert_eq!(
            "{tweety, (tweety -> bird), (penguin -> !fly), fly}",
            extensions[0].to_string()
        );
        assert!(t.skeptical_entail(&formula("fly")));
        t.add_fact(formula("tweety -> penguin"));
        assert!(!t.credulous_entail(&formula("fly")));
        assert!(t.skeptical_entail(&formula("!fly")));
        assert_eq!(1, t.all_extensions().len());
    }

    #[test]
    fn test_conflicting_defaults() {
        let t = theory(
            &["bird : fly / fly", "tweety : fly / !fly"],
            &["tweety", "tweety -> bird", "penguin -> !fly"],
        );
        assert!(!t.has_extension());
        assert!(t.all_extensions().is_empty());
        assert!(!t.credulous_entail(&formula("bird")));
        assert!(t.skeptical_entail(&formula("anything")));
    }

    #[test]
    fn test_two_extensions() {
        let t = theory(&["T : !p / q", "T : !q / p"], &["T"]);
        let extensions = t.all_extensions();
        assert_eq!(2, extensions.len());
        assert_eq!("{T, q}", extensions[0].to_string());
        assert_eq!("{T, p}", extensions[1].to_string());
        assert!(t.credulous_entail(&formula("p")));
        assert!(t.credulous_entail(&formula("q")));
        assert!(!t.skeptical_entail(&formula("p")));
        assert!(!t.skeptical_entail(&formula("q")));
        assert!(t.skeptical_entail(&formula("p | q")));
    }

    #[test]
    fn test_chained_rules() {
        let t = theory(&["b : c / c", "a : b / b"], &["a"]);
        assert!(t.is_extension(&[0, 1]));
        assert!(!t.is_extension(&[1]));
        assert!(!t.is_extension(&[0]));
        assert!(t.skeptical_entail(&formula("c")));
    }

    #[test]
    fn test_ungrounded_rules_are_rejected() {
        let t = theory(&["a : a / a"], &[]);
        assert!(!t.is_extension(&[0]));
        assert!(t.is_extension(&[]));
        assert_eq!(1, t.all_extensions().len());
    }

    #[test]
    fn test_duplicated_rules() {
        let t = theory(&["T : p / p", "T : p / p"], &["T"]);
        assert!(t.is_extension(&[0, 1]));
        assert!(!t.is_extension(&[0]));
        assert_eq!(1, t.all_extensions().len());
    }

    #[test]
    fn test_display() {
        let t = theory(&["a : b / c"], &["a", "!d"]);
        assert_eq!("({a : b / c}, {a, !d})", t.to_string());
        assert_eq!(
            r"(\{\frac{{a}:{b}}{c}\}, \{{a}, {\lnot{d}}\})",
            t.to_markup()
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let t = theory(&["T : p / p"], &["T"]);
        let mut copy = t.clone();
        copy.add_fact(formula("!p"));
        assert!(t.skeptical_entail(&formula("p")));
        assert!(!copy.credulous_entail(&formula("p")));
        assert_eq!(1, t.facts().len());
    }
}
