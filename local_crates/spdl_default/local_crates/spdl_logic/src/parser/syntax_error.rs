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

use thiserror::Error;

/// The maximal number of characters of the input kept in a [`SyntaxError`].
pub(crate) const EXCERPT_LEN: usize = 7;

/// The reasons a text may fail to be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    /// The input contains no token at all.
    #[error("Empty String")]
    EmptyString,
    /// The input ends while an operand is expected.
    #[error("Ends too early")]
    EndsTooEarly,
    /// A given symbol was required here (a closing parenthesis, the slash of a rule, the end of input).
    #[error("Expect symbol: {0}")]
    ExpectedSymbol(String),
    /// The input at this position matches neither a symbol nor an atom.
    #[error("Unknown symbol!")]
    UnknownSymbol,
    /// A known symbol was found where it cannot start an operand.
    #[error("Unexpected symbol: {0}")]
    UnexpectedSymbol(String),
    /// A default rule was given as the operand of a connector or of another rule.
    #[error("a default rule cannot be used as an operand")]
    RuleAsOperand,
}

/// An error raised while parsing a formula or a default rule.
///
/// The position is the byte offset of the offending token in the input,
/// and the excerpt contains the first characters of the input starting at this position.
///
/// # Examples
///
/// ```
/// use spdl_logic::{parse, Syntax, SyntaxErrorKind};
///
/// let err = parse("a & ", Syntax::PlainText).unwrap_err();
/// assert_eq!(&SyntaxErrorKind::EndsTooEarly, err.kind());
/// assert_eq!(4, err.position());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Syntax Error at {position} [...{excerpt}...]: {kind}")]
pub struct SyntaxError {
    kind: SyntaxErrorKind,
    position: usize,
    excerpt: String,
}

impl SyntaxError {
    pub(crate) fn new(kind: SyntaxErrorKind, text: &str, position: usize) -> Self {
        let excerpt = text
            .get(position..)
            .map(|s| s.chars().take(EXCERPT_LEN).collect())
            .unwrap_or_default();
        SyntaxError {
            kind,
            position,
            excerpt,
        }
    }

    /// Returns the reason of the failure.
    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }

    /// Returns the byte offset of the offending token.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the excerpt of the input starting at the offending token.
    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }
}
