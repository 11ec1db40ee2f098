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

use thiserror::Error;

/// An error raised when a dataset or a query does not have the expected structure.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// The content does not have the expected shape or types
    #[error("illegal data: {0}")]
    IllegalData(String),
    /// The dataset requires an unknown action
    #[error("unknown action \"{0}\"")]
    UnknownAction(String),
    /// The dataset requires an unknown logic
    #[error("unknown logic \"{0}\"")]
    UnknownLogic(String),
    /// The dataset requires an unknown syntax
    #[error("unknown syntax \"{0}\"")]
    UnknownSyntax(String),
    /// An unknown question was asked
    #[error("unknown question \"{0}\"")]
    UnknownQuestion(String),
    /// A question requiring a formula was asked without one
    #[error("the question \"{0}\" requires a formula")]
    MissingFormula(String),
    /// A formula was given where a default rule was expected
    #[error("expected a default rule, found \"{0}\"")]
    ExpectedRule(String),
    /// A default rule was given where a formula was expected
    #[error("expected a formula, found \"{0}\"")]
    ExpectedFormula(String),
    /// A dataset to load does not contain exactly one theory
    #[error("expected exactly one theory to load, found {0}")]
    NotASingleTheory(usize),
}

/// An error raised when a theory does not behave as a regression test expects.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("test failed: theory {theory} should {expectation}")]
pub struct TestFailure {
    theory: String,
    expectation: String,
}

impl TestFailure {
    /// Builds a new failure given the theory and the expectation that did not hold.
    pub fn new<T, U>(theory: T, expectation: U) -> Self
    where
        T: Into<String>,
        U: Into<String>,
    {
        TestFailure {
            theory: theory.into(),
            expectation: expectation.into(),
        }
    }

    /// Returns the rendering of the theory under test.
    pub fn theory(&self) -> &str {
        &self.theory
    }

    /// Returns the expectation that did not hold.
    pub fn expectation(&self) -> &str {
        &self.expectation
    }
}
