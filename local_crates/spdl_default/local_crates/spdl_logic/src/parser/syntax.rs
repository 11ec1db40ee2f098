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

use crate::{transformations::to_markup, Connector, DefaultRule, Formula};
use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use std::str::FromStr;

/// The concrete syntaxes formulas and rules can be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Syntax {
    /// The plain-text syntax: `!`, `&`, `|`, `->`, `=)`, `<->`
    PlainText,
    /// The display-markup syntax: `\lnot`, `\land`, `\lor`, `\to`, `\supset`, `\leftrightarrow`
    DisplayMarkup,
}

impl Syntax {
    /// Returns the canonical name of the syntax.
    pub fn name(&self) -> &'static str {
        match self {
            Syntax::PlainText => "plain-text",
            Syntax::DisplayMarkup => "display-markup",
        }
    }

    /// Renders a formula in this syntax.
    ///
    /// The result can be parsed back in the same syntax.
    ///
    /// # Examples
    ///
    /// ```
    /// use spdl_logic::{Formula, Syntax};
    ///
    /// let f = Formula::new_not(Formula::new_atom("a"));
    /// assert_eq!("!a", Syntax::PlainText.render_formula(&f));
    /// assert_eq!(r"{\lnot{a}}", Syntax::DisplayMarkup.render_formula(&f));
    /// ```
    pub fn render_formula(&self, formula: &Formula) -> String {
        match self {
            Syntax::PlainText => formula.to_string(),
            Syntax::DisplayMarkup => to_markup(formula),
        }
    }

    /// Renders a default rule as `pre : jus / cons`, each component being rendered in this syntax.
    pub fn render_rule(&self, rule: &DefaultRule) -> String {
        format!(
            "{} : {} / {}",
            self.render_formula(rule.pre()),
            self.render_formula(rule.jus()),
            self.render_formula(rule.cons())
        )
    }

    pub(crate) fn symbol_table(&self) -> &'static [(&'static str, Symbol)] {
        match self {
            Syntax::PlainText => &PLAIN_TEXT_TABLE,
            Syntax::DisplayMarkup => &DISPLAY_MARKUP_TABLE,
        }
    }
}

impl FromStr for Syntax {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "str" | "plain" | "plain-text" => Ok(Syntax::PlainText),
            "latex" | "markup" | "display-markup" => Ok(Syntax::DisplayMarkup),
            _ => Err(anyhow!(r#"unknown syntax "{}""#, s)),
        }
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Syntax::PlainText
    }
}

/// The non-atomic tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Symbol {
    Connector(Connector),
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Colon,
    Slash,
}

impl Symbol {
    /// The left binding power.
    pub(crate) fn lbp(&self) -> u8 {
        match self {
            Symbol::Connector(Connector::Not) => 0,
            Symbol::Connector(Connector::And) | Symbol::Connector(Connector::Or) => 30,
            Symbol::Connector(_) => 20,
            Symbol::Colon => 10,
            _ => 0,
        }
    }
}

fn build_table(
    connector_symbol: fn(&Connector) -> &'static str,
    others: &[(&'static str, Symbol)],
) -> Vec<(&'static str, Symbol)> {
    let mut table = Connector::all()
        .iter()
        .map(|c| (connector_symbol(c), Symbol::Connector(*c)))
        .collect::<Vec<(&'static str, Symbol)>>();
    table.extend_from_slice(others);
    table.extend_from_slice(&[(":", Symbol::Colon), ("/", Symbol::Slash)]);
    table
}

lazy_static! {
    static ref PLAIN_TEXT_TABLE: Vec<(&'static str, Symbol)> = build_table(
        Connector::plain_symbol,
        &[("(", Symbol::LeftParen), (")", Symbol::RightParen)]
    );
    static ref DISPLAY_MARKUP_TABLE: Vec<(&'static str, Symbol)> = build_table(
        Connector::markup_symbol,
        &[
            ("(", Symbol::LeftParen),
            (")", Symbol::RightParen),
            ("{", Symbol::LeftBrace),
            ("}", Symbol::RightBrace),
        ]
    );
}
