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
    default_logic::{
        credulous_entail_by_search, fmt_default_theory, skeptical_entail_by_search, DefaultLogic,
        ExtensionVisitor,
    },
    inconsistency_encoding::inconsistency_tester,
    ClassicalDefaultLogic, InconsistencyEncoding, NativeEncoding, RenamingEncoding,
};
use crate::Combinations;
use log::debug;
use spdl_logic::{collect_atoms, default_theory_to_markup, DefaultRule, Formula, PropositionalLogic};
use std::{fmt::Display, ops::ControlFlow};

/// A paraconsistent default theory whose inconsistent atoms are given to a paraconsistent ground logic.
pub type NativeParaconsistentDefaultLogic = ParaconsistentDefaultLogic<NativeEncoding>;

/// A paraconsistent default theory encoded into a classical default theory by renaming negated atoms.
pub type RenamingParaconsistentDefaultLogic = ParaconsistentDefaultLogic<RenamingEncoding>;

/// Statistics about a search of the extensions of a paraconsistent default theory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// The number of sets of inconsistent atoms for which a classical search was run
    pub candidates_examined: usize,
    /// The sets of inconsistent atoms that led to extensions, in the order they were found
    pub minimal_inconsistent_sets: Vec<Vec<String>>,
    /// `true` iff the search was stopped by the visitor
    pub stopped: bool,
}

/// A default theory in which atoms may be both true and false.
///
/// The extensions are the ones of the classical default theories obtained by considering
/// a minimal set of atoms as inconsistent.
/// Candidate sets of inconsistent atoms are tried by increasing size,
/// and supersets of sets that led to extensions are skipped.
/// Extensions must be satisfiable and must entail that each of their inconsistent atoms is both true and false.
///
/// # Examples
///
/// ```
/// use spdl_default::{DefaultLogic, NativeParaconsistentDefaultLogic};
/// use spdl_logic::{parse, Syntax};
///
/// let formula = |s| parse(s, Syntax::PlainText).unwrap().into_formula().unwrap();
/// let mut theory = NativeParaconsistentDefaultLogic::default();
/// theory.add_fact(formula("a"));
/// theory.add_fact(formula("!a"));
/// assert_eq!(1, theory.all_extensions().len());
/// assert!(theory.skeptical_entail(&formula("a & !a")));
/// assert!(!theory.credulous_entail(&formula("b")));
/// ```
#[derive(Clone, Default)]
pub struct ParaconsistentDefaultLogic<E>
where
    E: InconsistencyEncoding,
{
    rules: Vec<DefaultRule>,
    facts: Vec<Formula>,
    atoms: Vec<String>,
    classical: ClassicalDefaultLogic<E::Ground>,
    encoding: E,
}

impl<E> ParaconsistentDefaultLogic<E>
where
    E: InconsistencyEncoding,
{
    /// Returns the encoding used to handle inconsistent atoms.
    pub fn encoding(&self) -> &E {
        &self.encoding
    }

    /// Returns the atoms of the theory, in the order of their first occurrence.
    pub fn atoms(&self) -> &[String] {
        &self.atoms
    }

    /// Calls the visitor on the extensions of the theory until it asks to stop, and reports on the search.
    ///
    /// # Examples
    ///
    /// ```
    /// use spdl_default::RenamingParaconsistentDefaultLogic;
    /// use spdl_default::DefaultLogic;
    /// use spdl_logic::{parse, Syntax};
    /// use std::ops::ControlFlow;
    ///
    /// let formula = |s| parse(s, Syntax::PlainText).unwrap().into_formula().unwrap();
    /// let mut theory = RenamingParaconsistentDefaultLogic::default();
    /// theory.add_fact(formula("a & !a & b"));
    /// let report = theory.search_with_report(&mut |_| ControlFlow::Continue(()));
    /// assert_eq!(vec![vec!["a".to_string()]], report.minimal_inconsistent_sets);
    /// assert_eq!(3, report.candidates_examined);
    /// ```
    pub fn search_with_report(
        &self,
        visitor: &mut ExtensionVisitor<'_, E::Ground>,
    ) -> SearchReport {
        let mut report = SearchReport::default();
        let mut minimal_sets: Vec<Vec<usize>> = Vec::new();
        for candidate in Combinations::by_increasing_size(self.atoms.len()) {
            if minimal_sets
                .iter()
                .any(|m| m.iter().all(|i| candidate.contains(i)))
            {
                continue;
            }
            report.candidates_examined += 1;
            let inconsistents = candidate
                .iter()
                .map(|i| self.atoms[*i].clone())
                .collect::<Vec<String>>();
            debug!("looking for extensions with inconsistent atoms {:?}", inconsistents);
            let mut restricted = self.classical.clone();
            self.encoding
                .restrict(&mut restricted, &self.atoms, &inconsistents);
            let testers = inconsistents
                .iter()
                .map(|a| self.encoding.transform(&inconsistency_tester(a)))
                .collect::<Vec<Formula>>();
            let mut found = false;
            restricted.search_extensions(&mut |mut extension| {
                if !extension.sat(None) || !testers.iter().all(|t| extension.entail(t)) {
                    return ControlFlow::Continue(());
                }
                found = true;
                let flow = visitor(extension);
                if let ControlFlow::Break(()) = flow {
                    report.stopped = true;
                }
                flow
            });
            if found {
                report.minimal_inconsistent_sets.push(inconsistents);
                if candidate.is_empty() {
                    debug!("the theory has classical extensions");
                    return report;
                }
                minimal_sets.push(candidate);
            }
            if report.stopped {
                return report;
            }
        }
        report
    }

    /// Renders the theory in the display-markup syntax.
    pub fn to_markup(&self) -> String {
        default_theory_to_markup(&self.rules, &self.facts)
    }

    fn track_atoms(&mut self, formula: &Formula) {
        for atom in collect_atoms(formula) {
            if !self.atoms.contains(&atom) {
                self.atoms.push(atom);
            }
        }
    }

    fn query_snapshot(&self, formula: &Formula) -> (Self, Formula) {
        let mut snapshot = self.clone();
        self.encoding
            .prepare_query(&mut snapshot.classical, &self.atoms, formula);
        (snapshot, self.encoding.transform(formula))
    }
}

impl<E> DefaultLogic for ParaconsistentDefaultLogic<E>
where
    E: InconsistencyEncoding,
{
    type Extension = E::Ground;

    fn add_rule(&mut self, rule: DefaultRule) {
        self.track_atoms(rule.pre());
        self.track_atoms(rule.jus());
        self.track_atoms(rule.cons());
        let encoding = &self.encoding;
        let encoded = rule.map_formulas(|f| encoding.transform(f));
        self.classical.add_rule(encoded);
        self.rules.push(rule);
    }

    fn add_fact(&mut self, fact: Formula) {
        self.track_atoms(&fact);
        self.classical.add_fact(self.encoding.transform(&fact));
        self.facts.push(fact);
    }

    fn rules(&self) -> &[DefaultRule] {
        &self.rules
    }

    fn facts(&self) -> &[Formula] {
        &self.facts
    }

    fn search_extensions(&self, visitor: &mut ExtensionVisitor<'_, E::Ground>) {
        self.search_with_report(visitor);
    }

    /// Always returns `true`, since considering all the atoms as inconsistent makes any set of facts satisfiable.
    fn has_extension(&self) -> bool {
        true
    }

    fn credulous_entail(&self, formula: &Formula) -> bool {
        let (theory, query) = self.query_snapshot(formula);
        credulous_entail_by_search(&theory, &query)
    }

    fn skeptical_entail(&self, formula: &Formula) -> bool {
        let (theory, query) = self.query_snapshot(formula);
        skeptical_entail_by_search(&theory, &query)
    }
}

impl<E> Display for ParaconsistentDefaultLogic<E>
where
    E: InconsistencyEncoding,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_default_theory(&self.rules, &self.facts, f)
    }
}
