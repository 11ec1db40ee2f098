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

/// Renders a formula in the display-markup syntax.
///
/// Each sub-formula is enclosed in braces, so the output can be parsed back in the display-markup syntax.
///
/// # Examples
///
/// ```
/// use spdl_logic::{parse, to_markup, Syntax};
///
/// let f = parse("B <-> (P_1 | P_2)", Syntax::PlainText).unwrap().into_formula().unwrap();
/// assert_eq!(r"{{B}\leftrightarrow{{P_1}\lor{P_2}}}", to_markup(&f));
/// ```
pub fn to_markup(formula: &Formula) -> String {
    match formula {
        Formula::Atom(name) => format!("{{{}}}", name),
        Formula::Not(sub) => format!(
            "{{{}{}}}",
            crate::Connector::Not.markup_symbol(),
            to_markup(sub)
        ),
        _ => {
            let symbol = formula
                .connector()
                .map(|c| c.markup_symbol())
                .unwrap_or_default();
            let children = formula
                .sub_formulas()
                .into_iter()
                .map(to_markup)
                .collect::<Vec<String>>();
            format!("{{{}}}", children.join(symbol))
        }
    }
}

/// Renders a default rule as a fraction, for display purpose only.
///
/// # Examples
///
/// ```
/// use spdl_logic::{rule_to_markup, DefaultRule, Formula};
///
/// let r = DefaultRule::new(Formula::new_atom("a"), Formula::new_atom("b"), Formula::new_atom("c"));
/// assert_eq!(r"\frac{{a}:{b}}{c}", rule_to_markup(&r));
/// ```
pub fn rule_to_markup(rule: &DefaultRule) -> String {
    format!(
        r"\frac{{{}:{}}}{}",
        to_markup(rule.pre()),
        to_markup(rule.jus()),
        to_markup(rule.cons())
    )
}

/// Renders a set of formulas as `\{f1, f2\}`.
pub fn theory_to_markup(formulas: &[Formula]) -> String {
    format!(
        r"\{{{}\}}",
        formulas
            .iter()
            .map(to_markup)
            .collect::<Vec<String>>()
            .join(", ")
    )
}

/// Renders a default theory as `(\{d1, d2\}, \{w1, w2\})`.
pub fn default_theory_to_markup(rules: &[DefaultRule], facts: &[Formula]) -> String {
    format!(
        r"(\{{{}\}}, {})",
        rules
            .iter()
            .map(rule_to_markup)
            .collect::<Vec<String>>()
            .join(", "),
        theory_to_markup(facts)
    )
}
