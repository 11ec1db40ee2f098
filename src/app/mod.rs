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

mod check_command;
pub(crate) use check_command::CheckCommand;

mod extensions_command;
pub(crate) use extensions_command::ExtensionsCommand;

mod query_command;
pub(crate) use query_command::QueryCommand;

mod translate_command;
pub(crate) use translate_command::TranslateCommand;

use anyhow::{anyhow, Context, Result};
use fs::File;
use spdl_app_helper::{info, Arg, ArgMatches};
use spdl_default::{AnyDefaultLogic, Dataset, DatasetLoader, FormatError, LogicKind};
use spdl_logic::Syntax;
use std::path::PathBuf;
use std::{fs, io::BufReader, io::Write, str::FromStr};

const ARG_INPUT: &str = "INPUT";
const ARG_OUTPUT: &str = "OUTPUT";
const ARG_LOGIC: &str = "LOGIC";
const ARG_SYNTAX: &str = "SYNTAX";

pub(crate) fn arg_input<'a>() -> Arg<'a, 'a> {
    Arg::with_name(ARG_INPUT)
        .long("input")
        .short("i")
        .takes_value(true)
        .help("sets the JSON dataset file")
        .required(true)
}

pub(crate) fn required_value<'b>(arg_matches: &'b ArgMatches<'_>, name: &str) -> Result<&'b str> {
    arg_matches
        .value_of(name)
        .ok_or_else(|| anyhow!(r#"missing value for argument "{}""#, name))
}

pub(crate) fn read_dataset(arg_matches: &ArgMatches<'_>) -> Result<Dataset> {
    let file_path = required_value(arg_matches, ARG_INPUT)?;
    info!("reading input file {}", canonicalize(file_path));
    read_dataset_file(file_path)
}

pub(crate) fn read_dataset_file(file_path: &str) -> Result<Dataset> {
    let file =
        File::open(file_path).with_context(|| format!(r#"while opening file "{}""#, file_path))?;
    Dataset::from_reader(BufReader::new(file)).context("while reading the dataset")
}

pub(crate) fn first_theory(dataset: &Dataset, logic: LogicKind) -> Result<AnyDefaultLogic> {
    let spec = dataset
        .theories()
        .first()
        .ok_or(FormatError::NotASingleTheory(0))?;
    let theory = DatasetLoader::new(dataset.syntax()).load_theory(spec)?;
    Ok(theory.to_logic(logic))
}

pub(crate) fn arg_output<'a>() -> Arg<'a, 'a> {
    Arg::with_name(ARG_OUTPUT)
        .long("output")
        .short("o")
        .takes_value(true)
        .help("sets the output file (default: standard output)")
}

pub(crate) fn create_output(arg_matches: &ArgMatches<'_>) -> Result<Box<dyn Write>> {
    Ok(match arg_matches.value_of(ARG_OUTPUT) {
        Some(o) => {
            let r = Box::new(
                File::create(o).with_context(|| format!(r#"while creating file "{}""#, o))?,
            );
            info!("setting output file to {}", canonicalize(o));
            r
        }
        None => {
            info!("setting output to STDOUT");
            Box::new(std::io::stdout())
        }
    })
}

pub(crate) fn arg_logic<'a>() -> Arg<'a, 'a> {
    Arg::with_name(ARG_LOGIC)
        .long("logic")
        .short("l")
        .takes_value(true)
        .possible_values(&["cpdl", "spdl1", "spdl2"])
        .help("overrides the logic given in the dataset")
}

pub(crate) fn logic_override(arg_matches: &ArgMatches<'_>) -> Result<Option<LogicKind>> {
    match arg_matches.value_of(ARG_LOGIC) {
        Some(l) => Ok(Some(LogicKind::from_str(l)?)),
        None => Ok(None),
    }
}

pub(crate) fn arg_syntax<'a>(help: &'a str) -> Arg<'a, 'a> {
    Arg::with_name(ARG_SYNTAX)
        .long("syntax")
        .short("s")
        .takes_value(true)
        .possible_values(&[
            "str",
            "plain",
            "plain-text",
            "latex",
            "markup",
            "display-markup",
        ])
        .help(help)
}

pub(crate) fn syntax_of(arg_matches: &ArgMatches<'_>) -> Result<Option<Syntax>> {
    match arg_matches.value_of(ARG_SYNTAX) {
        Some(s) => Ok(Some(Syntax::from_str(s)?)),
        None => Ok(None),
    }
}

pub(crate) fn canonicalize(file_path: &str) -> String {
    match fs::canonicalize(&PathBuf::from(file_path)) {
        Ok(p) => format!("{}", p.display()),
        Err(_) => file_path.to_string(),
    }
}
