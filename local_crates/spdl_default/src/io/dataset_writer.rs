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

use anyhow::{Context, Result};
use serde::Serialize;
use spdl_logic::{DefaultRule, Formula, Syntax};
use std::io::Write;

#[derive(Serialize)]
struct SavedTheory {
    format: &'static str,
    fact: Vec<String>,
    rule: Vec<String>,
}

/// Saves rules and facts as a JSON dataset, rendered in a given syntax.
///
/// The output can be read back by a [`Dataset`](crate::Dataset).
///
/// # Examples
///
/// ```
/// use spdl_default::DatasetWriter;
/// use spdl_logic::{Formula, Syntax};
///
/// let mut out = Vec::new();
/// let facts = vec![Formula::new_not(Formula::new_atom("a"))];
/// DatasetWriter::new(Syntax::PlainText).write(&mut out, &[], &facts).unwrap();
/// assert_eq!(
///     r#"{"format":"plain-text","fact":["!a"],"rule":[]}"#,
///     String::from_utf8(out).unwrap().trim_end()
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DatasetWriter {
    syntax: Syntax,
}

impl DatasetWriter {
    /// Builds a writer rendering formulas in the given syntax.
    pub fn new(syntax: Syntax) -> Self {
        DatasetWriter { syntax }
    }

    /// Writes the dataset made of the rules and the facts, followed by a new line.
    pub fn write(&self, writer: &mut dyn Write, rules: &[DefaultRule], facts: &[Formula]) -> Result<()> {
        let context = "while writing a dataset";
        let theory = SavedTheory {
            format: self.syntax.name(),
            fact: facts
                .iter()
                .map(|f| self.syntax.render_formula(f))
                .collect(),
            rule: rules.iter().map(|r| self.syntax.render_rule(r)).collect(),
        };
        serde_json::to_writer(&mut *writer, &theory).context(context)?;
        writeln!(writer).context(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dataset, DatasetLoader};

    fn translate(content: &str, syntax: Syntax) -> String {
        let dataset: Dataset = content.parse().unwrap();
        let (rules, facts) = DatasetLoader::load_single(&dataset).unwrap().into_parts();
        let mut out = Vec::new();
        DatasetWriter::new(syntax)
            .write(&mut out, &rules, &facts)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_to_markup() {
        let content = r#"{"rule": ["a : b / !c"], "fact": ["a & b"]}"#;
        let expected = r#"{"format":"display-markup","fact":["{{a}\\land{b}}"],"rule":["{a} : {b} / {\\lnot{c}}"]}"#;
        assert_eq!(
            format!("{}\n", expected),
            translate(content, Syntax::DisplayMarkup)
        );
    }

    #[test]
    fn test_written_dataset_loads_the_same_theory() {
        let content = r#"{"rule": ["a | d : b -> e / !c", "T : !p / q"], "fact": ["a & b", "x <-> !y"]}"#;
        let original =
            DatasetLoader::load_single(&content.parse::<Dataset>().unwrap()).unwrap();
        let markup = translate(content, Syntax::DisplayMarkup);
        let reloaded =
            DatasetLoader::load_single(&markup.parse::<Dataset>().unwrap()).unwrap();
        assert_eq!(original, reloaded);
    }
}
