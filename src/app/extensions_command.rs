// spdl
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

use anyhow::Result;
use spdl_app_helper::{info, App, AppSettings, ArgMatches, Command, SubCommand};
use spdl_default::{extension_writer, AnyDefaultLogic};
use spdl_logic::Syntax;
use std::io::Write;

pub(crate) struct ExtensionsCommand;

const CMD_NAME: &str = "extensions";

impl ExtensionsCommand {
    pub fn new() -> Self {
        ExtensionsCommand
    }
}

impl<'a> Command<'a> for ExtensionsCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Computes the extensions of the first theory of a dataset.")
            .setting(AppSettings::DisableVersion)
            .arg(super::arg_input())
            .arg(super::arg_output())
            .arg(super::arg_logic())
            .arg(super::arg_syntax(
                "sets the syntax of the formulas in the output (default: the one of the dataset)",
            ))
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let dataset = super::read_dataset(arg_matches)?;
        let logic = super::logic_override(arg_matches)?.unwrap_or_else(|| dataset.logic());
        let syntax = super::syntax_of(arg_matches)?.unwrap_or_else(|| dataset.syntax());
        let theory = super::first_theory(&dataset, logic)?;
        info!("computing the extensions of {} in logic {}", theory, logic);
        let n = write_extensions(&theory, syntax, super::create_output(arg_matches)?.as_mut())?;
        info!("found {} extension(s)", n);
        Ok(())
    }
}

fn write_extensions(theory: &AnyDefaultLogic, syntax: Syntax, writer: &mut dyn Write) -> Result<usize> {
    let extensions = theory.all_extensions();
    extension_writer(syntax).write_extension_set(writer, &extensions)?;
    Ok(extensions.len())
}
