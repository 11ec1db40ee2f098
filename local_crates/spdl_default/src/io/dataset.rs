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

//! Datasets of default theories, given as JSON documents.
use super::{RegressionReport, RegressionRunner};
use crate::{AnyDefaultLogic, FormatError, LogicKind};
use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use spdl_logic::{parse, DefaultRule, Formula, Parsed, Syntax};
use std::{fmt::Display, io::Read, str::FromStr};

/// The description of a default theory in a dataset, along with the expectations of a regression test.
///
/// Rules and facts are kept as text; they are parsed by a [`DatasetLoader`] in the syntax of the dataset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TheorySpec {
    /// The default rules
    #[serde(rename = "rule", default)]
    pub rules: Vec<String>,
    /// The facts
    #[serde(rename = "fact", default)]
    pub facts: Vec<String>,
    /// The expected number of extensions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_extension: Option<usize>,
    /// Formulas that must be credulously entailed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub credulous_entail: Vec<String>,
    /// Formulas that must be skeptically entailed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skeptical_entail: Vec<String>,
    /// Formulas that must not be credulously entailed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub not_credulous_entail: Vec<String>,
    /// Formulas that must not be skeptically entailed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub not_skeptical_entail: Vec<String>,
    /// Specs of theories made by adding rules and facts to this one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add: Vec<TheorySpec>,
}

#[derive(Deserialize)]
struct RawDataset {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    format: Option<String>,
    #[serde(default)]
    logic: Option<String>,
    #[serde(default)]
    dataset: Option<Vec<TheorySpec>>,
    #[serde(flatten)]
    inline: TheorySpec,
}

/// What must be done with the theories of a dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Load a single theory
    Load,
    /// Run the regression tests described by the theories
    Test,
}

impl Action {
    /// Returns the name of the action.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Load => "load",
            Action::Test => "test",
        }
    }
}

impl Default for Action {
    fn default() -> Self {
        Action::Load
    }
}

impl FromStr for Action {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "load" => Ok(Action::Load),
            "test" => Ok(Action::Test),
            _ => Err(FormatError::UnknownAction(s.to_string())),
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A validated dataset.
///
/// The theories are listed under the `dataset` key; a dataset without this key describes a single theory inline.
///
/// # Examples
///
/// ```
/// use spdl_default::{Action, Dataset, LogicKind};
/// use spdl_logic::Syntax;
///
/// let dataset: Dataset = r#"{"logic": "cpdl", "rule": ["a : b / b"], "fact": ["a"]}"#
///     .parse()
///     .unwrap();
/// assert_eq!(Action::Load, dataset.action());
/// assert_eq!(Syntax::PlainText, dataset.syntax());
/// assert_eq!(LogicKind::Classical, dataset.logic());
/// assert_eq!(1, dataset.theories().len());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dataset {
    action: Action,
    syntax: Syntax,
    logic: LogicKind,
    theories: Vec<TheorySpec>,
}

impl Dataset {
    /// Builds a dataset from its components.
    pub fn new(action: Action, syntax: Syntax, logic: LogicKind, theories: Vec<TheorySpec>) -> Self {
        Dataset {
            action,
            syntax,
            logic,
            theories,
        }
    }

    /// Reads a dataset from a JSON document.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawDataset = serde_json::from_reader(reader)
            .map_err(|e| FormatError::IllegalData(e.to_string()))
            .context("while parsing JSON content")?;
        Dataset::from_raw(raw)
    }

    fn from_raw(raw: RawDataset) -> Result<Self> {
        let action = match raw.action {
            Some(a) => a.parse()?,
            None => Action::default(),
        };
        let syntax = match raw.format {
            Some(s) => Syntax::from_str(&s).map_err(|_| FormatError::UnknownSyntax(s))?,
            None => Syntax::default(),
        };
        let logic = match raw.logic {
            Some(l) => l.parse()?,
            None => LogicKind::default(),
        };
        let theories = match raw.dataset {
            Some(theories) => theories,
            None => vec![raw.inline],
        };
        Ok(Dataset::new(action, syntax, logic, theories))
    }

    /// Returns the action required by the dataset.
    pub fn action(&self) -> Action {
        self.action
    }

    /// Returns the syntax the rules and formulas are written in.
    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    /// Returns the logic the theories must be interpreted in.
    pub fn logic(&self) -> LogicKind {
        self.logic
    }

    /// Overrides the logic the theories must be interpreted in.
    pub fn set_logic(&mut self, logic: LogicKind) {
        self.logic = logic
    }

    /// Returns the descriptions of the theories.
    pub fn theories(&self) -> &[TheorySpec] {
        &self.theories
    }
}

impl FromStr for Dataset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Dataset::from_reader(s.as_bytes())
    }
}

/// The rules and facts of a theory, once parsed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadedTheory {
    rules: Vec<DefaultRule>,
    facts: Vec<Formula>,
}

impl LoadedTheory {
    /// Returns the default rules.
    pub fn rules(&self) -> &[DefaultRule] {
        &self.rules
    }

    /// Returns the facts.
    pub fn facts(&self) -> &[Formula] {
        &self.facts
    }

    /// Builds a theory of the given logic made of these rules and facts.
    pub fn to_logic(&self, kind: LogicKind) -> AnyDefaultLogic {
        AnyDefaultLogic::with_content(kind, &self.rules, &self.facts)
    }

    /// Returns the rules and the facts.
    pub fn into_parts(self) -> (Vec<DefaultRule>, Vec<Formula>) {
        (self.rules, self.facts)
    }
}

/// What has been done while loading a dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The dataset described a theory to load
    Theory(LoadedTheory),
    /// The dataset described regression tests, which all succeeded
    Tested(RegressionReport),
}

/// Parses the rules and facts of datasets in a given syntax.
///
/// # Examples
///
/// ```
/// use spdl_default::DatasetLoader;
/// use spdl_logic::Syntax;
///
/// let loader = DatasetLoader::new(Syntax::PlainText);
/// assert_eq!("(a & b)", loader.parse_formula("a & b").unwrap().to_string());
/// assert!(loader.parse_formula("a : b / c").is_err());
/// assert!(loader.parse_rule("a & b").is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DatasetLoader {
    syntax: Syntax,
}

impl DatasetLoader {
    /// Builds a loader for the given syntax.
    pub fn new(syntax: Syntax) -> Self {
        DatasetLoader { syntax }
    }

    /// Returns the syntax used by this loader.
    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    fn parse_text(&self, text: &str) -> Result<Parsed> {
        parse(text, self.syntax).with_context(|| {
            format!(
                r#"while parsing "{}" in the {} syntax"#,
                text,
                self.syntax.name()
            )
        })
    }

    /// Parses a formula.
    ///
    /// A text describing a default rule is a [`FormatError`].
    pub fn parse_formula(&self, text: &str) -> Result<Formula> {
        match self.parse_text(text)? {
            Parsed::Formula(f) => Ok(f),
            Parsed::Rule(_) => Err(FormatError::ExpectedFormula(text.to_string()).into()),
        }
    }

    /// Parses a default rule.
    ///
    /// A text describing a formula is a [`FormatError`].
    pub fn parse_rule(&self, text: &str) -> Result<DefaultRule> {
        match self.parse_text(text)? {
            Parsed::Rule(r) => Ok(r),
            Parsed::Formula(_) => Err(FormatError::ExpectedRule(text.to_string()).into()),
        }
    }

    /// Parses the rules and facts of a theory spec, ignoring its expectations.
    pub fn load_theory(&self, spec: &TheorySpec) -> Result<LoadedTheory> {
        let rules = spec
            .rules
            .iter()
            .enumerate()
            .map(|(i, r)| {
                self.parse_rule(r)
                    .with_context(|| format!("while reading the rule at index {}", i))
            })
            .collect::<Result<Vec<DefaultRule>>>()?;
        let facts = spec
            .facts
            .iter()
            .enumerate()
            .map(|(i, f)| {
                self.parse_formula(f)
                    .with_context(|| format!("while reading the fact at index {}", i))
            })
            .collect::<Result<Vec<Formula>>>()?;
        Ok(LoadedTheory { rules, facts })
    }

    /// Loads the single theory of a dataset, whatever its action.
    pub fn load_single(dataset: &Dataset) -> Result<LoadedTheory> {
        if dataset.theories().len() != 1 {
            return Err(FormatError::NotASingleTheory(dataset.theories().len()).into());
        }
        let theory = DatasetLoader::new(dataset.syntax()).load_theory(&dataset.theories()[0])?;
        info!(
            "loaded a theory made of {} rule(s) and {} fact(s)",
            theory.rules().len(),
            theory.facts().len()
        );
        Ok(theory)
    }

    /// Performs the action required by a dataset.
    pub fn load(dataset: &Dataset) -> Result<LoadOutcome> {
        info!(
            "performing action {} on a dataset of {} theories (logic {}, {} syntax)",
            dataset.action(),
            dataset.theories().len(),
            dataset.logic(),
            dataset.syntax().name()
        );
        match dataset.action() {
            Action::Load => DatasetLoader::load_single(dataset).map(LoadOutcome::Theory),
            Action::Test => RegressionRunner::new(dataset.syntax(), dataset.logic())
                .run(dataset.theories())
                .map(LoadOutcome::Tested),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spdl_logic::{SyntaxError, SyntaxErrorKind};

    fn format_error(result: Result<Dataset>) -> FormatError {
        result
            .unwrap_err()
            .downcast_ref::<FormatError>()
            .unwrap()
            .clone()
    }

    #[test]
    fn test_defaults() {
        let dataset = Dataset::from_str("{}").unwrap();
        assert_eq!(Action::Load, dataset.action());
        assert_eq!(Syntax::PlainText, dataset.syntax());
        assert_eq!(LogicKind::Native, dataset.logic());
        assert_eq!(&[TheorySpec::default()], dataset.theories());
    }

    #[test]
    fn test_dataset_list() {
        let dataset = Dataset::from_str(
            r#"{
                "action": "test",
                "format": "latex",
                "logic": "spdl2",
                "dataset": [
                    {"rule": ["{a} : {b} / {b}"], "has_extension": 1},
                    {"fact": ["a"], "credulous_entail": ["a"], "add": [{"fact": ["b"]}]}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(Action::Test, dataset.action());
        assert_eq!(Syntax::DisplayMarkup, dataset.syntax());
        assert_eq!(LogicKind::Renaming, dataset.logic());
        assert_eq!(2, dataset.theories().len());
        assert_eq!(Some(1), dataset.theories()[0].has_extension);
        assert_eq!(vec!["b".to_string()], dataset.theories()[1].add[0].facts);
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(
            FormatError::UnknownAction("run".to_string()),
            format_error(Dataset::from_str(r#"{"action": "run"}"#))
        );
        assert_eq!(
            FormatError::UnknownSyntax("html".to_string()),
            format_error(Dataset::from_str(r#"{"format": "html"}"#))
        );
        assert_eq!(
            FormatError::UnknownLogic("dl".to_string()),
            format_error(Dataset::from_str(r#"{"logic": "dl"}"#))
        );
    }

    #[test]
    fn test_illegal_data() {
        for content in &[r#"{"rule": "a : b / b"}"#, "[]", r#"{"has_extension": -1}"#, "{"] {
            match format_error(Dataset::from_str(content)) {
                FormatError::IllegalData(_) => {}
                e => panic!("unexpected error {:?}", e),
            }
        }
    }

    #[test]
    fn test_load_single() {
        let dataset =
            Dataset::from_str(r#"{"rule": ["a : b / c", "T : !p / q"], "fact": ["a", "!d"]}"#)
                .unwrap();
        let theory = DatasetLoader::load_single(&dataset).unwrap();
        assert_eq!(2, theory.rules().len());
        assert_eq!("a : b / c", theory.rules()[0].to_string());
        assert_eq!("!d", theory.facts()[1].to_string());
        let logic = theory.to_logic(LogicKind::Classical);
        assert_eq!("({a : b / c, T : !p / q}, {a, !d})", logic.to_string());
        match DatasetLoader::load(&dataset).unwrap() {
            LoadOutcome::Theory(t) => assert_eq!(theory, t),
            o => panic!("unexpected outcome {:?}", o),
        }
    }

    #[test]
    fn test_load_requires_a_single_theory() {
        let dataset = Dataset::from_str(r#"{"dataset": [{}, {}]}"#).unwrap();
        let err = DatasetLoader::load_single(&dataset).unwrap_err();
        assert_eq!(
            Some(&FormatError::NotASingleTheory(2)),
            err.downcast_ref::<FormatError>()
        );
    }

    #[test]
    fn test_rule_and_formula_mismatch() {
        let loader = DatasetLoader::default();
        let err = loader
            .load_theory(&TheorySpec {
                facts: vec!["a : b / c".to_string()],
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(
            Some(&FormatError::ExpectedFormula("a : b / c".to_string())),
            err.downcast_ref::<FormatError>()
        );
        assert_eq!(
            "while reading the fact at index 0",
            format!("{}", err)
        );
        let err = loader
            .load_theory(&TheorySpec {
                rules: vec!["a".to_string()],
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(
            Some(&FormatError::ExpectedRule("a".to_string())),
            err.downcast_ref::<FormatError>()
        );
    }

    #[test]
    fn test_syntax_errors_are_kept() {
        let err = DatasetLoader::default().parse_formula("a &").unwrap_err();
        let syntax_error = err.downcast_ref::<SyntaxError>().unwrap();
        assert_eq!(&SyntaxErrorKind::EndsTooEarly, syntax_error.kind());
    }

    #[test]
    fn test_markup_dataset() {
        let dataset = Dataset::from_str(
            r#"{"format": "display-markup", "rule": ["{a} : {b} / {\\lnot{c}}"], "fact": ["{a} \\land {b}"]}"#,
        )
        .unwrap();
        let theory = DatasetLoader::load_single(&dataset).unwrap();
        assert_eq!("a : b / !c", theory.rules()[0].to_string());
        assert_eq!("(a & b)", theory.facts()[0].to_string());
    }
}
