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

use anyhow::{Context, Result};
use spdl_app_helper::{info, warn, App, AppSettings, ArgMatches, Command, SubCommand};
use spdl_default::{Action, Dataset, LogicKind, RegressionRunner};
use std::{fs::File, io::BufReader, path::PathBuf};

const CMD_NAME: &str = "check";

#[derive(Default)]
pub(crate) struct CheckCommand();

impl<'a> Command<'a> for CheckCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Runs the regression tests described by a dataset.")
            .setting(AppSettings::DisableVersion)
            .arg(super::arg_input())
            .arg(super::arg_logic())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let str_path = super::required_value(arg_matches, "INPUT")?;
        let logic = super::logic_override(arg_matches)?;
        self.execute_internal(str_path, logic)
    }
}

impl CheckCommand {
    fn execute_internal(&self, str_path: &str, logic: Option<LogicKind>) -> Result<()> {
        info!("executing dataset checker");
        info!("input file is {}", str_path);
        let path = PathBuf::from(str_path);
        let file =
            File::open(&path).with_context(|| format!("while opening file {}", &path.display()))?;
        let mut dataset =
            Dataset::from_reader(BufReader::new(file)).context("while reading the dataset")?;
        if let Some(l) = logic {
            dataset.set_logic(l);
        }
        if dataset.action() != Action::Test {
            warn!(
                r#"dataset action is "{}"; its theories are checked anyway"#,
                dataset.action()
            );
        }
        let report = RegressionRunner::new(dataset.syntax(), dataset.logic())
            .run(dataset.theories())?;
        info!(
            "checked {} theory(ies) against {} expectation(s)",
            report.theories(),
            report.expectations()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Error;
    use logtest::Logger;
    use spdl_app_helper::Level;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn logtest() {
        let mut logger = Logger::start();
        logtest_execute_ok(&mut logger);
        logtest_execute_warning_load_action(&mut logger);
        logtest_execute_logic_override(&mut logger);
        logtest_execute_error_test_failure(&mut logger);
        logtest_execute_error_unknown_action(&mut logger);
        logtest_execute_error_illegal_rule(&mut logger);
        assert!(pop_record(&mut logger).is_none());
    }

    fn pop_record(logger: &mut Logger) -> Option<logtest::Record> {
        loop {
            match logger.pop() {
                Some(r) if r.level() == Level::Debug || r.level() == Level::Trace => continue,
                r => return r,
            }
        }
    }

    fn assert_log_message<T>(logger: &mut Logger, level: Level, message: T)
    where
        T: AsRef<str>,
    {
        let log_message = pop_record(logger).unwrap();
        assert_eq!(
            level,
            log_message.level(),
            "expected log level {}, got log level {} and message \"{}\"",
            level,
            log_message.level(),
            log_message.args()
        );
        assert_eq!(
            message.as_ref(),
            log_message.args(),
            "expected message \"{}\", got log level {} and message \"{}\"",
            message.as_ref(),
            log_message.level(),
            log_message.args()
        );
    }

    fn assert_err_message(expected_chain: Vec<&'static str>, actual: Error) {
        let error_chain: Vec<String> = actual.chain().map(|e| format!("{}", e)).collect();
        assert_eq!(expected_chain, error_chain);
    }

    fn dataset_file(content: &str) -> (NamedTempFile, String) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        let file_path = format!("{}", file.path().display());
        (file, file_path)
    }

    fn assert_header(logger: &mut Logger, file_path: &str) {
        assert_log_message(logger, Level::Info, "executing dataset checker");
        assert_log_message(logger, Level::Info, format!("input file is {}", file_path));
    }

    fn logtest_execute_ok(logger: &mut Logger) {
        let (_file, file_path) = dataset_file(
            r#"{"action": "test", "logic": "cpdl", "fact": ["a"], "rule": ["a : b / b"],
                "has_extension": 1, "skeptical_entail": ["b"]}"#,
        );
        CheckCommand::default()
            .execute_internal(&file_path, None)
            .unwrap();
        assert_header(logger, &file_path);
        assert_log_message(logger, Level::Info, "testing theory ({a : b / b}, {a})");
        assert_log_message(
            logger,
            Level::Info,
            "checked 1 theory(ies) against 2 expectation(s)",
        );
        assert!(pop_record(logger).is_none());
    }

    fn logtest_execute_warning_load_action(logger: &mut Logger) {
        let (_file, file_path) = dataset_file(r#"{"fact": ["a"]}"#);
        CheckCommand::default()
            .execute_internal(&file_path, None)
            .unwrap();
        assert_header(logger, &file_path);
        assert_log_message(
            logger,
            Level::Warn,
            r#"dataset action is "load"; its theories are checked anyway"#,
        );
        assert_log_message(logger, Level::Info, "testing theory ({}, {a})");
        assert_log_message(
            logger,
            Level::Info,
            "checked 1 theory(ies) against 0 expectation(s)",
        );
        assert!(pop_record(logger).is_none());
    }

    fn logtest_execute_logic_override(logger: &mut Logger) {
        let (_file, file_path) = dataset_file(
            r#"{"action": "test", "logic": "cpdl", "dataset": [
                {"fact": ["a", "!a"], "not_credulous_entail": ["b"],
                 "add": [{"fact": ["b"], "credulous_entail": ["b"]}]}
            ]}"#,
        );
        CheckCommand::default()
            .execute_internal(&file_path, Some(LogicKind::Native))
            .unwrap();
        assert_header(logger, &file_path);
        assert_log_message(logger, Level::Info, "testing theory ({}, {a, !a})");
        assert_log_message(logger, Level::Info, "testing theory ({}, {a, !a, b})");
        assert_log_message(
            logger,
            Level::Info,
            "checked 2 theory(ies) against 2 expectation(s)",
        );
        assert!(pop_record(logger).is_none());
    }

    fn logtest_execute_error(
        logger: &mut Logger,
        instance: &'static str,
        expected_error_chain: Vec<&'static str>,
        expected_tested_theories: Vec<&'static str>,
    ) {
        let (_file, file_path) = dataset_file(instance);
        let error = CheckCommand::default()
            .execute_internal(&file_path, None)
            .unwrap_err();
        assert_err_message(expected_error_chain, error);
        assert_header(logger, &file_path);
        for theory in expected_tested_theories {
            assert_log_message(logger, Level::Info, format!("testing theory {}", theory));
        }
        assert!(pop_record(logger).is_none());
    }

    fn logtest_execute_error_test_failure(logger: &mut Logger) {
        logtest_execute_error(
            logger,
            r#"{"action": "test", "logic": "cpdl", "fact": ["a", "!a"], "has_extension": 0}"#,
            vec![
                "while testing the theory at index 0",
                "test failed: theory ({}, {a, !a}) should have 0 extension(s), found 1",
            ],
            vec!["({}, {a, !a})"],
        );
    }

    fn logtest_execute_error_unknown_action(logger: &mut Logger) {
        logtest_execute_error(
            logger,
            r#"{"action": "check"}"#,
            vec!["while reading the dataset", r#"unknown action "check""#],
            vec![],
        );
    }

    fn logtest_execute_error_illegal_rule(logger: &mut Logger) {
        logtest_execute_error(
            logger,
            r#"{"action": "test", "rule": ["a"]}"#,
            vec![
                "while testing the theory at index 0",
                "while reading the rule at index 0",
                r#"expected a default rule, found "a""#,
            ],
            vec![],
        );
    }
}
