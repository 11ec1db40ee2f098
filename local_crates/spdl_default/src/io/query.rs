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

use super::DatasetLoader;
use crate::{AnyDefaultLogic, FormatError};
use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use spdl_logic::{Formula, Syntax};
use std::{fmt::Display, str::FromStr};

/// The questions that can be asked about a default theory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Question {
    /// How many extensions the theory has
    HasExtension,
    /// Which extensions the theory has
    AllExtensions,
    /// Whether an extension entails a formula
    CredulousEntail,
    /// Whether no extension entails a formula
    NotCredulousEntail,
    /// Whether all the extensions entail a formula
    SkepticalEntail,
    /// Whether an extension does not entail a formula
    NotSkepticalEntail,
}

impl Question {
    /// Returns all the questions.
    pub fn all() -> [Question; 6] {
        [
            Question::HasExtension,
            Question::AllExtensions,
            Question::CredulousEntail,
            Question::NotCredulousEntail,
            Question::SkepticalEntail,
            Question::NotSkepticalEntail,
        ]
    }

    /// Returns the name of the question.
    pub fn name(&self) -> &'static str {
        match self {
            Question::HasExtension => "has_extension",
            Question::AllExtensions => "all_extensions",
            Question::CredulousEntail => "credulous_entail",
            Question::NotCredulousEntail => "not_credulous_entail",
            Question::SkepticalEntail => "skeptical_entail",
            Question::NotSkepticalEntail => "not_skeptical_entail",
        }
    }

    /// Returns `true` iff the question is about a formula.
    pub fn requires_formula(&self) -> bool {
        !matches!(self, Question::HasExtension | Question::AllExtensions)
    }
}

impl FromStr for Question {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Question::all()
            .iter()
            .find(|q| q.name() == s)
            .copied()
            .ok_or_else(|| FormatError::UnknownQuestion(s.to_string()))
    }
}

impl Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The answer to a [`Question`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryAnswer {
    /// A number of extensions
    Count(usize),
    /// A list of extensions, each one given by its formulas
    Extensions(Vec<Vec<Formula>>),
    /// The truth value of an entailment question
    Bool(bool),
}

impl QueryAnswer {
    /// Translates the answer into a JSON value, rendering formulas in the given syntax.
    pub fn to_json(&self, syntax: Syntax) -> Value {
        match self {
            QueryAnswer::Count(n) => json!(n),
            QueryAnswer::Bool(b) => json!(b),
            QueryAnswer::Extensions(extensions) => Value::Array(
                extensions
                    .iter()
                    .map(|e| {
                        Value::Array(
                            e.iter()
                                .map(|f| Value::String(syntax.render_formula(f)))
                                .collect(),
                        )
                    })
                    .collect(),
            ),
        }
    }
}

/// An answer or an error message, as sent to a presentation layer.
///
/// # Examples
///
/// ```
/// use spdl_default::{QueryAnswer, QueryEnvelope};
/// use spdl_logic::Syntax;
///
/// let envelope = QueryEnvelope::from_result(Ok(QueryAnswer::Count(2)), Syntax::PlainText);
/// assert_eq!(r#"{"error":false,"value":2}"#, envelope.to_json_string().unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryEnvelope {
    /// Whether the query failed
    pub error: bool,
    /// The answer, or the error message if the query failed
    pub value: Value,
}

impl QueryEnvelope {
    /// Wraps the result of a query; errors are given by their full chain of causes.
    pub fn from_result(result: Result<QueryAnswer>, syntax: Syntax) -> Self {
        match result {
            Ok(answer) => QueryEnvelope {
                error: false,
                value: answer.to_json(syntax),
            },
            Err(e) => QueryEnvelope {
                error: true,
                value: Value::String(format!("{:#}", e)),
            },
        }
    }

    /// Serializes the envelope as a JSON object.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).context("while serializing a query answer")
    }
}

/// Answers questions about default theories, formulas being written in a given syntax.
///
/// # Examples
///
/// ```
/// use spdl_default::{AnyDefaultLogic, LogicKind, QueryAnswer, QueryAsker, Question};
/// use spdl_logic::Syntax;
///
/// let asker = QueryAsker::new(Syntax::PlainText);
/// let theory = AnyDefaultLogic::new(LogicKind::Classical);
/// assert_eq!(
///     QueryAnswer::Bool(true),
///     asker.ask(&theory, Question::NotCredulousEntail, Some("a")).unwrap()
/// );
/// assert!(asker.ask(&theory, Question::SkepticalEntail, None).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryAsker {
    loader: DatasetLoader,
}

impl QueryAsker {
    /// Builds a new asker for formulas written in the given syntax.
    pub fn new(syntax: Syntax) -> Self {
        QueryAsker {
            loader: DatasetLoader::new(syntax),
        }
    }

    /// Returns the syntax the formulas are written in.
    pub fn syntax(&self) -> Syntax {
        self.loader.syntax()
    }

    fn formula_of(&self, question: Question, formula: Option<&str>) -> Result<Formula> {
        let text = formula.ok_or_else(|| FormatError::MissingFormula(question.name().to_string()))?;
        self.loader.parse_formula(text)
    }

    /// Answers a question about a theory.
    ///
    /// Entailment questions require a formula, ignored by the other ones.
    pub fn ask(
        &self,
        theory: &AnyDefaultLogic,
        question: Question,
        formula: Option<&str>,
    ) -> Result<QueryAnswer> {
        debug!("asking {} for theory {}", question, theory);
        let answer = match question {
            Question::HasExtension => QueryAnswer::Count(theory.count_extensions()),
            Question::AllExtensions => QueryAnswer::Extensions(theory.all_extensions()),
            Question::CredulousEntail => {
                QueryAnswer::Bool(theory.credulous_entail(&self.formula_of(question, formula)?))
            }
            Question::NotCredulousEntail => {
                QueryAnswer::Bool(!theory.credulous_entail(&self.formula_of(question, formula)?))
            }
            Question::SkepticalEntail => {
                QueryAnswer::Bool(theory.skeptical_entail(&self.formula_of(question, formula)?))
            }
            Question::NotSkepticalEntail => {
                QueryAnswer::Bool(!theory.skeptical_entail(&self.formula_of(question, formula)?))
            }
        };
        Ok(answer)
    }

    /// Answers a question given by its name, wrapping the answer or the error into an envelope.
    pub fn ask_envelope(
        &self,
        theory: &AnyDefaultLogic,
        question: &str,
        formula: Option<&str>,
    ) -> QueryEnvelope {
        let result = question
            .parse::<Question>()
            .map_err(anyhow::Error::from)
            .and_then(|q| self.ask(theory, q, formula))
            .with_context(|| format!(r#"while answering "{}""#, question));
        QueryEnvelope::from_result(result, self.syntax())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogicKind;

    fn two_extensions(kind: LogicKind) -> AnyDefaultLogic {
        let loader = DatasetLoader::default();
        let mut theory = AnyDefaultLogic::new(kind);
        theory.add_rule(loader.parse_rule("T : !p / q").unwrap());
        theory.add_rule(loader.parse_rule("T : !q / p").unwrap());
        theory.add_fact(loader.parse_formula("T").unwrap());
        theory
    }

    #[test]
    fn test_question_names() {
        for q in Question::all().iter() {
            assert_eq!(*q, q.name().parse::<Question>().unwrap());
        }
        assert_eq!(
            FormatError::UnknownQuestion("ask".to_string()),
            "ask".parse::<Question>().unwrap_err()
        );
        assert!(!Question::AllExtensions.requires_formula());
        assert!(Question::NotSkepticalEntail.requires_formula());
    }

    #[test]
    fn test_classical_queries() {
        let theory = two_extensions(LogicKind::Classical);
        let asker = QueryAsker::default();
        assert_eq!(
            QueryAnswer::Count(2),
            asker.ask(&theory, Question::HasExtension, None).unwrap()
        );
        let expected = [
            (Question::CredulousEntail, "p", true),
            (Question::NotCredulousEntail, "p", false),
            (Question::SkepticalEntail, "p", false),
            (Question::NotSkepticalEntail, "p", true),
            (Question::SkepticalEntail, "p | q", true),
        ];
        for (question, formula, answer) in expected.iter() {
            assert_eq!(
                QueryAnswer::Bool(*answer),
                asker.ask(&theory, *question, Some(formula)).unwrap(),
                "{} {}",
                question,
                formula
            );
        }
    }

    #[test]
    fn test_all_extensions_json() {
        let theory = two_extensions(LogicKind::Classical);
        let asker = QueryAsker::new(Syntax::PlainText);
        let answer = asker.ask(&theory, Question::AllExtensions, None).unwrap();
        assert_eq!(
            json!([["T", "q"], ["T", "p"]]),
            answer.to_json(Syntax::PlainText)
        );
        assert_eq!(
            json!([["{T}", "{q}"], ["{T}", "{p}"]]),
            answer.to_json(Syntax::DisplayMarkup)
        );
    }

    #[test]
    fn test_paraconsistent_queries() {
        for kind in &[LogicKind::Native, LogicKind::Renaming] {
            let theory = two_extensions(*kind);
            let answer = QueryAsker::default()
                .ask(&theory, Question::CredulousEntail, Some("q"))
                .unwrap();
            assert_eq!(QueryAnswer::Bool(true), answer);
        }
    }

    #[test]
    fn test_envelopes() {
        let theory = two_extensions(LogicKind::Classical);
        let asker = QueryAsker::default();
        assert_eq!(
            QueryEnvelope {
                error: false,
                value: json!(true)
            },
            asker.ask_envelope(&theory, "credulous_entail", Some("q"))
        );
        assert_eq!(
            QueryEnvelope {
                error: true,
                value: json!(r#"while answering "entail": unknown question "entail""#)
            },
            asker.ask_envelope(&theory, "entail", Some("q"))
        );
        assert_eq!(
            QueryEnvelope {
                error: true,
                value: json!(
                    r#"while answering "credulous_entail": the question "credulous_entail" requires a formula"#
                )
            },
            asker.ask_envelope(&theory, "credulous_entail", None)
        );
        let syntax_error = asker.ask_envelope(&theory, "skeptical_entail", Some("p &"));
        assert!(syntax_error.error);
        assert!(syntax_error
            .value
            .as_str()
            .unwrap()
            .ends_with("Ends too early"));
    }
}
