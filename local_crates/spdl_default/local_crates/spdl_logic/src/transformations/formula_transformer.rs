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

use crate::{DefaultRule, Formula};

/// A rewriting of formulas into other formulas.
///
/// Transformers are the unit of composition of the reasoners: a default theory may be given a transformer
/// that is applied to each of its facts and to each component of its rules.
///
/// # Examples
///
/// ```
/// use spdl_logic::{Formula, FormulaTransformer, NnfTransformer};
///
/// let f = Formula::new_not(Formula::new_not(Formula::new_atom("a")));
/// assert_eq!(Formula::new_atom("a"), NnfTransformer.transform(&f));
/// ```
pub trait FormulaTransformer {
    /// Builds the transformed version of a formula.
    fn transform(&self, formula: &Formula) -> Formula;

    /// Builds a new rule by transforming its prerequisite, its justification and its consequent.
    fn transform_rule(&self, rule: &DefaultRule) -> DefaultRule {
        rule.map_formulas(|f| self.transform(f))
    }
}

/// The transformer leaving formulas unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdentityTransformer;

impl FormulaTransformer for IdentityTransformer {
    fn transform(&self, formula: &Formula) -> Formula {
        formula.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, NnfTransformer, Syntax};

    fn rule(s: &str) -> DefaultRule {
        parse(s, Syntax::PlainText).unwrap().into_rule().unwrap()
    }

    #[test]
    fn test_transform_rule_maps_each_component() {
        let r = rule("!!a : !(b & c) / (d <-> !!e)");
        assert_eq!(
            rule("a : !b | !c / (d <-> e)"),
            NnfTransformer.transform_rule(&r)
        );
    }

    #[test]
    fn test_identity() {
        let r = rule("a -> b : c / !!d");
        assert_eq!(r, IdentityTransformer.transform_rule(&r));
    }
}
