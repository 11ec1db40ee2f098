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

use super::{DatasetLoader, QueryAnswer, QueryAsker, Question, TheorySpec};
use crate::{AnyDefaultLogic, LogicKind, TestFailure};
use anyhow::{Context, Result};
use log::info;
use spdl_logic::Syntax;

/// Counters describing a successful regression run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegressionReport {
    theories: usize,
    expectations: usize,
}

impl RegressionReport {
    /// Returns the number of tested theories, including the ones built by additions.
    pub fn theories(&self) -> usize {
        self.theories
    }

    /// Returns the number of expectations that were checked.
    pub fn expectations(&self) -> usize {
        self.expectations
    }
}

/// Runs the regression tests described by theory specs.
///
/// Each spec is turned into a theory of the chosen logic, on which its expectations are checked.
/// Specs listed under `add` are then checked against a copy of this theory extended by their own rules and facts.
/// The first expectation that does not hold stops the run with a [`TestFailure`].
///
/// # Examples
///
/// ```
/// use spdl_default::{Dataset, LogicKind, RegressionRunner};
/// use spdl_logic::Syntax;
///
/// let dataset: Dataset = r#"{
///     "fact": ["tweety", "tweety -> bird", "penguin -> !fly"],
///     "rule": ["bird : fly / fly"],
///     "has_extension": 1,
///     "skeptical_entail": ["fly"],
///     "add": [{"fact": ["tweety -> penguin"], "not_credulous_entail": ["fly"]}]
/// }"#.parse().unwrap();
/// let runner = RegressionRunner::new(Syntax::PlainText, LogicKind::Classical);
/// let report = runner.run(dataset.theories()).unwrap();
/// assert_eq!(2, report.theories());
/// assert_eq!(3, report.expectations());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegressionRunner {
    loader: DatasetLoader,
    asker: QueryAsker,
    logic: LogicKind,
}

impl RegressionRunner {
    /// Builds a runner for specs written in the given syntax, interpreted in the given logic.
    pub fn new(syntax: Syntax, logic: LogicKind) -> Self {
        RegressionRunner {
            loader: DatasetLoader::new(syntax),
            asker: QueryAsker::new(syntax),
            logic,
        }
    }

    /// Checks the expectations of all the specs.
    pub fn run(&self, specs: &[TheorySpec]) -> Result<RegressionReport> {
        let mut report = RegressionReport::default();
        for (i, spec) in specs.iter().enumerate() {
            self.run_spec(spec, AnyDefaultLogic::new(self.logic), &mut report)
                .with_context(|| format!("while testing the theory at index {}", i))?;
        }
        Ok(report)
    }

    fn run_spec(
        &self,
        spec: &TheorySpec,
        mut theory: AnyDefaultLogic,
        report: &mut RegressionReport,
    ) -> Result<()> {
        let (rules, facts) = self.loader.load_theory(spec)?.into_parts();
        rules.into_iter().for_each(|r| theory.add_rule(r));
        facts.into_iter().for_each(|f| theory.add_fact(f));
        info!("testing theory {}", theory);
        report.theories += 1;
        if let Some(expected) = spec.has_extension {
            let actual = theory.count_extensions();
            if actual != expected {
                return Err(TestFailure::new(
                    theory.to_string(),
                    format!("have {} extension(s), found {}", expected, actual),
                )
                .into());
            }
            report.expectations += 1;
        }
        let entailments = [
            (Question::CredulousEntail, &spec.credulous_entail),
            (Question::SkepticalEntail, &spec.skeptical_entail),
            (Question::NotCredulousEntail, &spec.not_credulous_entail),
            (Question::NotSkepticalEntail, &spec.not_skeptical_entail),
        ];
        for (question, formulas) in entailments.iter() {
            for formula in formulas.iter() {
                if let QueryAnswer::Bool(false) = self.asker.ask(&theory, *question, Some(formula))? {
                    return Err(TestFailure::new(
                        theory.to_string(),
                        format!("{} `{}'", question, formula),
                    )
                    .into());
                }
                report.expectations += 1;
            }
        }
        for (i, child) in spec.add.iter().enumerate() {
            self.run_spec(child, theory.clone(), report)
                .with_context(|| format!("while testing the addition at index {}", i))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dataset, FormatError};

    fn run(content: &str, logic: LogicKind) -> Result<RegressionReport> {
        let dataset: Dataset = content.parse().unwrap();
        RegressionRunner::new(dataset.syntax(), logic).run(dataset.theories())
    }

    #[test]
    fn test_all_logics_pass() {
        let content = r#"{"dataset": [
            {"fact": ["T"], "rule": ["T : !p / q", "T : !q / p"], "has_extension": 2,
             "credulous_entail": ["p", "q"], "not_skeptical_entail": ["p", "q"]},
            {"fact": ["a"], "rule": ["a : b / b"], "has_extension": 1, "skeptical_entail": ["b"]}
        ]}"#;
        for logic in &[LogicKind::Classical, LogicKind::Native, LogicKind::Renaming] {
            let report = run(content, *logic).unwrap();
            assert_eq!(2, report.theories());
            assert_eq!(7, report.expectations());
        }
    }

    #[test]
    fn test_count_failure() {
        let err = run(
            r#"{"fact": ["a", "!a"], "has_extension": 0}"#,
            LogicKind::Classical,
        )
        .unwrap_err();
        let failure = err.downcast_ref::<TestFailure>().unwrap();
        assert_eq!("({}, {a, !a})", failure.theory());
        assert_eq!("have 0 extension(s), found 1", failure.expectation());
        assert_eq!("while testing the theory at index 0", err.to_string());
    }

    #[test]
    fn test_entailment_failure_in_addition() {
        let err = run(
            r#"{"dataset": [{
                "fact": ["tweety", "tweety -> bird", "penguin -> !fly"],
                "rule": ["bird : fly / fly"],
                "add": [{"fact": ["tweety -> penguin"], "credulous_entail": ["fly"]}]
            }]}"#,
            LogicKind::Classical,
        )
        .unwrap_err();
        let failure = err.downcast_ref::<TestFailure>().unwrap();
        assert_eq!("credulous_entail `fly'", failure.expectation());
        assert!(failure.theory().ends_with("(tweety -> penguin)})"));
        assert_eq!(
            "while testing the theory at index 0: while testing the addition at index 0: test failed: theory ({bird : fly / fly}, {tweety, (tweety -> bird), (penguin -> !fly), (tweety -> penguin)}) should credulous_entail `fly'",
            format!("{:#}", err)
        );
    }

    #[test]
    fn test_additions_do_not_leak() {
        let report = run(
            r#"{"fact": ["a"], "skeptical_entail": ["a"],
                "add": [
                    {"fact": ["!a"], "credulous_entail": ["a"]},
                    {"fact": ["b"], "not_credulous_entail": ["!a"]}
                ]}"#,
            LogicKind::Native,
        )
        .unwrap();
        assert_eq!(3, report.theories());
    }

    #[test]
    fn test_format_errors_abort() {
        let err = run(r#"{"fact": ["a : b / c"]}"#, LogicKind::Classical).unwrap_err();
        assert!(err.downcast_ref::<FormatError>().is_some());
    }
}
