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

use super::{
    syntax::Symbol,
    syntax_error::{SyntaxError, SyntaxErrorKind},
    Syntax,
};
use crate::{Connector, DefaultRule, Formula};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ATOM_PATTERN: Regex = Regex::new(r"^\\?[a-zA-Z]+(_[0-9])?").unwrap();
}

const NOT_BP: u8 = 50;
const AND_OR_BP: u8 = 30;
const IMPLY_BP: u8 = 20;
const COLON_BP: u8 = 10;

/// The result of a successful parse: either a formula or a default rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Parsed {
    /// A propositional formula
    Formula(Formula),
    /// A default rule `pre : jus / cons`
    Rule(DefaultRule),
}

impl Parsed {
    /// Returns the formula, or `None` if a rule was parsed.
    pub fn into_formula(self) -> Option<Formula> {
        match self {
            Parsed::Formula(f) => Some(f),
            Parsed::Rule(_) => None,
        }
    }

    /// Returns the rule, or `None` if a formula was parsed.
    pub fn into_rule(self) -> Option<DefaultRule> {
        match self {
            Parsed::Formula(_) => None,
            Parsed::Rule(r) => Some(r),
        }
    }
}

/// Parses a formula or a default rule written in the given syntax.
///
/// Binding powers, from the loosest to the tightest, are: the colon of default rules,
/// the implications and the equivalence (implications being right-associative),
/// the conjunction and the disjunction, and finally the negation.
/// Unparenthesized chains of the same conjunction or disjunction are parsed as a single n-ary node.
///
/// # Examples
///
/// ```
/// use spdl_logic::{parse, Formula, Parsed, Syntax};
///
/// let f = parse("a -> b & !c", Syntax::PlainText).unwrap();
/// let expected = Formula::new_imply(
///     Formula::new_atom("a"),
///     Formula::new_and(vec![
///         Formula::new_atom("b"),
///         Formula::new_not(Formula::new_atom("c")),
///     ]),
/// );
/// assert_eq!(Parsed::Formula(expected), f);
///
/// let r = parse(r"bird : fly / fly", Syntax::DisplayMarkup).unwrap();
/// assert!(r.into_rule().is_some());
/// ```
pub fn parse(text: &str, syntax: Syntax) -> Result<Parsed, SyntaxError> {
    FormulaParser::new(text, syntax).parse()
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Atom(String),
    Symbol(Symbol, &'static str),
    End,
}

impl Token {
    fn lbp(&self) -> u8 {
        match self {
            Token::Symbol(s, _) => s.lbp(),
            _ => 0,
        }
    }
}

struct FormulaParser<'a> {
    text: &'a str,
    table: &'static [(&'static str, Symbol)],
    current: Token,
    current_start: usize,
    position: usize,
}

impl<'a> FormulaParser<'a> {
    fn new(text: &'a str, syntax: Syntax) -> Self {
        FormulaParser {
            text,
            table: syntax.symbol_table(),
            current: Token::End,
            current_start: 0,
            position: 0,
        }
    }

    fn parse(mut self) -> Result<Parsed, SyntaxError> {
        self.bump()?;
        if self.current == Token::End {
            return Err(self.error(SyntaxErrorKind::EmptyString));
        }
        let expr = self.expression(0)?;
        self.expect(|t| *t == Token::End, "End")?;
        Ok(expr)
    }

    fn expression(&mut self, rbp: u8) -> Result<Parsed, SyntaxError> {
        if self.current == Token::End {
            return Err(self.error(SyntaxErrorKind::EndsTooEarly));
        }
        let (token, start) = self.bump()?;
        let mut left = self.prefix(token, start)?;
        let mut open_chain = None;
        while rbp < self.current.lbp() {
            let (token, start) = self.bump()?;
            left = self.infix(token, start, left, &mut open_chain)?;
        }
        Ok(left)
    }

    fn prefix(&mut self, token: Token, start: usize) -> Result<Parsed, SyntaxError> {
        match token {
            Token::Atom(name) => Ok(Parsed::Formula(Formula::Atom(name))),
            Token::Symbol(Symbol::Connector(Connector::Not), _) => {
                let sub = self.operand(NOT_BP, start)?;
                Ok(Parsed::Formula(Formula::new_not(sub)))
            }
            Token::Symbol(Symbol::LeftParen, _) => {
                let expr = self.expression(0)?;
                self.expect(|t| matches!(t, Token::Symbol(Symbol::RightParen, _)), ")")?;
                Ok(expr)
            }
            Token::Symbol(Symbol::LeftBrace, _) => {
                let expr = self.expression(0)?;
                self.expect(|t| matches!(t, Token::Symbol(Symbol::RightBrace, _)), "}")?;
                Ok(expr)
            }
            Token::Symbol(_, s) => Err(SyntaxError::new(
                SyntaxErrorKind::UnexpectedSymbol(s.to_string()),
                self.text,
                start,
            )),
            Token::End => Err(SyntaxError::new(
                SyntaxErrorKind::EndsTooEarly,
                self.text,
                start,
            )),
        }
    }

    fn infix(
        &mut self,
        token: Token,
        start: usize,
        left: Parsed,
        open_chain: &mut Option<Connector>,
    ) -> Result<Parsed, SyntaxError> {
        let left = match left {
            Parsed::Formula(f) => f,
            Parsed::Rule(_) => {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::RuleAsOperand,
                    self.text,
                    start,
                ))
            }
        };
        let connector = match token {
            Token::Symbol(Symbol::Colon, _) => {
                *open_chain = None;
                let jus = self.operand(COLON_BP, start)?;
                self.expect(|t| matches!(t, Token::Symbol(Symbol::Slash, _)), "/")?;
                let cons = self.operand(COLON_BP, start)?;
                return Ok(Parsed::Rule(DefaultRule::new(left, jus, cons)));
            }
            Token::Symbol(Symbol::Connector(c), _) if c.is_infix() => c,
            Token::Symbol(_, s) => {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UnexpectedSymbol(s.to_string()),
                    self.text,
                    start,
                ))
            }
            _ => {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UnknownSymbol,
                    self.text,
                    start,
                ))
            }
        };
        let formula = match connector {
            Connector::And | Connector::Or => {
                let right = self.operand(AND_OR_BP, start)?;
                let extended = match (left, *open_chain == Some(connector)) {
                    (Formula::And(mut subs), true) | (Formula::Or(mut subs), true) => {
                        subs.push(right);
                        if connector == Connector::And {
                            Formula::And(subs)
                        } else {
                            Formula::Or(subs)
                        }
                    }
                    (l, _) => match connector {
                        Connector::And => Formula::And(vec![l, right]),
                        _ => Formula::Or(vec![l, right]),
                    },
                };
                *open_chain = Some(connector);
                extended
            }
            Connector::Imply | Connector::Implication => {
                *open_chain = None;
                let right = self.operand(IMPLY_BP - 1, start)?;
                if connector == Connector::Imply {
                    Formula::new_imply(left, right)
                } else {
                    Formula::new_implication(left, right)
                }
            }
            _ => {
                *open_chain = None;
                let right = self.operand(IMPLY_BP, start)?;
                Formula::new_equiv(left, right)
            }
        };
        Ok(Parsed::Formula(formula))
    }

    /// Parses an expression that must be a formula.
    fn operand(&mut self, rbp: u8, operator_start: usize) -> Result<Formula, SyntaxError> {
        match self.expression(rbp)? {
            Parsed::Formula(f) => Ok(f),
            Parsed::Rule(_) => Err(SyntaxError::new(
                SyntaxErrorKind::RuleAsOperand,
                self.text,
                operator_start,
            )),
        }
    }

    fn expect<F>(&mut self, is_expected: F, name: &str) -> Result<(), SyntaxError>
    where
        F: Fn(&Token) -> bool,
    {
        if !is_expected(&self.current) {
            return Err(self.error(SyntaxErrorKind::ExpectedSymbol(name.to_string())));
        }
        if self.current != Token::End {
            self.bump()?;
        }
        Ok(())
    }

    fn error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError::new(kind, self.text, self.current_start)
    }

    /// Reads the next token and returns the previous one, with its position.
    fn bump(&mut self) -> Result<(Token, usize), SyntaxError> {
        let next = self.scan()?;
        let previous_start = self.current_start;
        self.current_start = next.1;
        Ok((std::mem::replace(&mut self.current, next.0), previous_start))
    }

    fn scan(&mut self) -> Result<(Token, usize), SyntaxError> {
        let text = self.text;
        let rest = &text[self.position..];
        let trimmed = rest.trim_start();
        self.position += rest.len() - trimmed.len();
        let start = self.position;
        if trimmed.is_empty() {
            return Ok((Token::End, start));
        }
        let symbol = self
            .table
            .iter()
            .filter(|(s, _)| trimmed.starts_with(s) && !splits_word(s, &trimmed[s.len()..]))
            .max_by_key(|(s, _)| s.len());
        if let Some((s, sym)) = symbol {
            self.position += s.len();
            return Ok((Token::Symbol(*sym, *s), start));
        }
        if let Some(m) = ATOM_PATTERN.find(trimmed) {
            self.position += m.end();
            return Ok((Token::Atom(m.as_str().to_string()), start));
        }
        Err(SyntaxError::new(
            SyntaxErrorKind::UnknownSymbol,
            self.text,
            start,
        ))
    }
}

/// Checks if accepting a symbol would cut a word in two parts.
fn splits_word(symbol: &str, following: &str) -> bool {
    let ends_alnum = symbol.chars().last().map_or(false, char::is_alphanumeric);
    let next_alnum = following.chars().next().map_or(false, char::is_alphanumeric);
    ends_alnum && next_alnum
}
