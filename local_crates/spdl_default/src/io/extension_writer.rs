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

//! A module used to write the extensions of default theories.
use anyhow::{Context, Result};
use spdl_logic::{theory_to_markup, Formula, Syntax};
use std::io::Write;

/// A trait to be implemented by objects intended to write extensions and query answers.
pub trait ExtensionWriter {
    /// Writes an extension into the provided writer.
    ///
    /// # Arguments
    /// * `writer` - the writer in which the extension must be written
    /// * `extension` - the formulas of the extension
    fn write_extension(&self, writer: &mut dyn Write, extension: &[Formula]) -> Result<()>;

    /// Writes an acceptance status into the provided writer.
    ///
    /// # Arguments
    /// * `writer` - the writer in which the status must be written
    /// * `status` - the acceptance status
    fn write_acceptance_status(&self, writer: &mut dyn Write, status: bool) -> Result<()> {
        writeln!(writer, "{}", if status { "YES" } else { "NO" })
            .context("while writing an acceptance status")
    }

    /// Writes an extension count into the provided writer.
    ///
    /// # Arguments
    /// * `writer` - the writer in which the count must be written
    /// * `count` - the extension count
    fn write_extension_count(&self, writer: &mut dyn Write, count: usize) -> Result<()> {
        writeln!(writer, "{}", count).context("while writing an extension count")
    }

    /// Writes an extension set into the provided writer, one extension per line.
    ///
    /// # Arguments
    /// * `writer` - the writer in which the extensions must be written
    /// * `extensions` - the extensions
    fn write_extension_set(&self, writer: &mut dyn Write, extensions: &[Vec<Formula>]) -> Result<()> {
        let context: &str = "while writing an extension set";
        writeln!(writer, "[").context(context)?;
        for ext in extensions {
            self.write_extension(writer, ext).context(context)?;
        }
        writeln!(writer, "]").context(context)
    }
}

/// Writes extensions as `{f1, f2}`, formulas being written in the plain-text syntax.
#[derive(Default)]
pub struct PlainTextExtensionWriter;

impl PlainTextExtensionWriter {
    /// Builds a new writer for the plain-text syntax.
    pub fn new() -> Self {
        PlainTextExtensionWriter
    }
}

impl ExtensionWriter for PlainTextExtensionWriter {
    fn write_extension(&self, writer: &mut dyn Write, extension: &[Formula]) -> Result<()> {
        writeln!(
            writer,
            "{{{}}}",
            extension
                .iter()
                .map(|f| Syntax::PlainText.render_formula(f))
                .collect::<Vec<String>>()
                .join(", ")
        )
        .context("while writing an extension")
    }
}

/// Writes extensions as `\{f1, f2\}`, formulas being written in the display-markup syntax.
#[derive(Default)]
pub struct MarkupExtensionWriter;

impl MarkupExtensionWriter {
    /// Builds a new writer for the display-markup syntax.
    pub fn new() -> Self {
        MarkupExtensionWriter
    }
}

impl ExtensionWriter for MarkupExtensionWriter {
    fn write_extension(&self, writer: &mut dyn Write, extension: &[Formula]) -> Result<()> {
        writeln!(writer, "{}", theory_to_markup(extension)).context("while writing an extension")
    }
}

/// Returns the extension writer dedicated to a syntax.
pub fn extension_writer(syntax: Syntax) -> Box<dyn ExtensionWriter> {
    match syntax {
        Syntax::PlainText => Box::new(PlainTextExtensionWriter::new()),
        Syntax::DisplayMarkup => Box::new(MarkupExtensionWriter::new()),
    }
}
