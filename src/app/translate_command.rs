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

use anyhow::{anyhow, Result};
use spdl_app_helper::{info, App, AppSettings, ArgMatches, Command, SubCommand};
use spdl_default::{Dataset, DatasetLoader, DatasetWriter};
use spdl_logic::Syntax;
use std::io::Write;

pub(crate) struct TranslateCommand;

const CMD_NAME: &str = "translate";

impl TranslateCommand {
    pub fn new() -> Self {
        TranslateCommand
    }
}

impl<'a> Command<'a> for TranslateCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Translates the rules and facts of a dataset into another syntax.")
            .setting(AppSettings::DisableVersion)
            .arg(super::arg_input())
            .arg(super::arg_output())
            .arg(super::arg_syntax("sets the target syntax").required(true))
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let dataset = super::read_dataset(arg_matches)?;
        let syntax = super::syntax_of(arg_matches)?
            .ok_or_else(|| anyhow!("the target syntax is required"))?;
        info!(
            "translating from the {} syntax to the {} syntax",
            dataset.syntax().name(),
            syntax.name()
        );
        translate(&dataset, syntax, super::create_output(arg_matches)?.as_mut())
    }
}

fn translate(dataset: &Dataset, syntax: Syntax, writer: &mut dyn Write) -> Result<()> {
    let spec = dataset
        .theories()
        .first()
        .ok_or_else(|| anyhow!("the dataset contains no theory"))?;
    let (rules, facts) = DatasetLoader::new(dataset.syntax())
        .load_theory(spec)?
        .into_parts();
    DatasetWriter::new(syntax).write(writer, &rules, &facts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translated(content: &str, syntax: Syntax) -> String {
        let dataset: Dataset = content.parse().unwrap();
        let mut out = Vec::new();
        translate(&dataset, syntax, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_to_markup() {
        assert_eq!(
            "{\"format\":\"display-markup\",\"fact\":[\"{{a}\\\\to{b}}\"],\"rule\":[\"{a} : {b} / {b}\"]}\n",
            translated(
                r#"{"rule": ["a : b / b"], "fact": ["a -> b"]}"#,
                Syntax::DisplayMarkup
            )
        );
    }

    #[test]
    fn test_markup_to_plain() {
        assert_eq!(
            "{\"format\":\"plain-text\",\"fact\":[\"(a =) !b)\"],\"rule\":[]}\n",
            translated(
                r#"{"format": "latex", "fact": ["{a} \\supset {\\lnot{b}}"]}"#,
                Syntax::PlainText
            )
        );
    }

    #[test]
    fn test_no_theory() {
        let dataset: Dataset = r#"{"dataset": []}"#.parse().unwrap();
        assert!(translate(&dataset, Syntax::PlainText, &mut Vec::<u8>::new()).is_err());
    }
}
