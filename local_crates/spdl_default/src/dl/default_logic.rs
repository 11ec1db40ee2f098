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

use spdl_logic::{DefaultRule, Formula, PropositionalLogic};
use std::ops::ControlFlow;

/// A visitor called on each extension found by a search.
///
/// The search stops as soon as the visitor returns [`ControlFlow::Break`].
pub type ExtensionVisitor<'v, E> = dyn FnMut(E) -> ControlFlow<()> + 'v;

/// A default theory, made of default rules and facts, whose extensions can be computed.
pub trait DefaultLogic {
    /// The propositional theories extensions are given as.
    type Extension: PropositionalLogic;

    /// Adds a default rule to the theory.
    fn add_rule(&mut self, rule: DefaultRule);

    /// Adds a fact to the theory.
    fn add_fact(&mut self, fact: Formula);

    /// Returns the default rules, in the order they were added.
    fn rules(&self) -> &[DefaultRule];

    /// Returns the facts, in the order they were added.
    fn facts(&self) -> &[Formula];

    /// Calls the visitor on the extensions of the theory until it asks to stop.
    fn search_extensions(&self, visitor: &mut ExtensionVisitor<'_, Self::Extension>);

    /// Returns all the extensions of the theory.
    fn all_extensions(&self) -> Vec<Self::Extension> {
        let mut extensions = Vec::new();
        self.search_extensions(&mut |e| {
            extensions.push(e);
            ControlFlow::Continue(())
        });
        extensions
    }

    /// Returns `true` iff the theory has at least one extension.
    fn has_extension(&self) -> bool {
        let mut found = false;
        self.search_extensions(&mut |_| {
            found = true;
            ControlFlow::Break(())
        });
        found
    }

    /// Returns `true` iff an extension of the theory entails the formula.
    fn credulous_entail(&self, formula: &Formula) -> bool {
        credulous_entail_by_search(self, formula)
    }

    /// Returns `true` iff all the extensions of the theory entail the formula.
    fn skeptical_entail(&self, formula: &Formula) -> bool {
        skeptical_entail_by_search(self, formula)
    }
}

pub(crate) fn credulous_entail_by_search<L>(logic: &L, formula: &Formula) -> bool
where
    L: DefaultLogic + ?Sized,
{
    let mut entailed = false;
    logic.search_extensions(&mut |mut e| {
        if e.entail(formula) {
            entailed = true;
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    entailed
}

pub(crate) fn skeptical_entail_by_search<L>(logic: &L, formula: &Formula) -> bool
where
    L: DefaultLogic + ?Sized,
{
    let mut entailed = true;
    logic.search_extensions(&mut |mut e| {
        if e.entail(formula) {
            ControlFlow::Continue(())
        } else {
            entailed = false;
            ControlFlow::Break(())
        }
    });
    entailed
}

/// Writes a default theory as `({d1, d2}, {w1, w2})`.
pub(crate) fn fmt_default_theory(
    rules: &[DefaultRule],
    facts: &[Formula],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    fn fmt_set<T: std::fmt::Display>(
        items: &[T],
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "}}")
    }
    write!(f, "(")?;
    fmt_set(rules, f)?;
    write!(f, ", ")?;
    fmt_set(facts, f)?;
    write!(f, ")")
}
