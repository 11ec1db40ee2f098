// spdl_app_helper
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

use crate::{
    logging::{init_logger, level_filter, LOGGING_LEVELS},
    Command,
};
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, Arg, ArgMatches};
use log::{error, info};
use std::ffi::OsString;

const ARG_LOGGING_LEVEL: &str = "LOGGING_LEVEL";

/// A builder for command line applications made of subcommands.
///
/// The application handles a global `--logging-level` argument and dispatches the execution to the selected [`Command`].
pub struct AppHelper<'a> {
    app_name: &'a str,
    version: &'a str,
    author: &'a str,
    about: &'a str,
    commands: Vec<Box<dyn Command<'a>>>,
}

impl<'a> AppHelper<'a> {
    /// Builds a new application without any subcommand.
    pub fn new(app_name: &'a str, version: &'a str, author: &'a str, about: &'a str) -> Self {
        AppHelper {
            app_name,
            version,
            author,
            about,
            commands: Vec::new(),
        }
    }

    /// Adds a subcommand.
    pub fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.commands.push(command);
    }

    fn clap_app(&self) -> App<'a, 'a> {
        let mut app = App::new(self.app_name)
            .version(self.version)
            .author(self.author)
            .about(self.about)
            .setting(AppSettings::SubcommandRequiredElseHelp)
            .setting(AppSettings::VersionlessSubcommands)
            .arg(
                Arg::with_name(ARG_LOGGING_LEVEL)
                    .long("logging-level")
                    .takes_value(true)
                    .possible_values(&LOGGING_LEVELS)
                    .default_value("info")
                    .global(true)
                    .help("sets the minimal level of the log messages"),
            );
        for command in self.commands.iter() {
            app = app.subcommand(command.clap_subcommand());
        }
        app
    }

    /// Parses the process arguments, installs the logger and executes the selected subcommand.
    ///
    /// On failure, the error chain is logged and the process exits with a non-zero status.
    pub fn launch_app(&self) {
        let arg_matches = self.clap_app().get_matches();
        if let Err(e) = self.setup_and_execute(&arg_matches) {
            e.chain().for_each(|cause| error!("{}", cause));
            std::process::exit(1);
        }
    }

    /// Parses the given arguments and executes the selected subcommand, without installing the logger.
    pub fn launch_app_with_args<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let arg_matches = self
            .clap_app()
            .get_matches_from_safe(args)
            .map_err(|e| anyhow!("{}", e.message))?;
        self.execute(&arg_matches)
    }

    fn setup_and_execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let level = level_filter(arg_matches.value_of(ARG_LOGGING_LEVEL).unwrap_or("info"))?;
        init_logger(level)?;
        info!("{} {}", self.app_name, self.version);
        self.execute(arg_matches)
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let (name, sub_matches) = arg_matches.subcommand();
        let command = self
            .commands
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| anyhow!(r#"no such subcommand "{}""#, name))?;
        match sub_matches {
            Some(m) => command.execute(m),
            None => Err(anyhow!(r#"missing arguments for subcommand "{}""#, name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::SubCommand;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct EchoCommand {
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl<'a> Command<'a> for EchoCommand {
        fn name(&self) -> &str {
            "echo"
        }

        fn clap_subcommand(&self) -> App<'a, 'a> {
            SubCommand::with_name("echo").arg(Arg::with_name("WORD").required(true))
        }

        fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
            let word = arg_matches.value_of("WORD").unwrap_or_default();
            if word == "fail" {
                return Err(anyhow!("failure"));
            }
            self.calls.borrow_mut().push(word.to_string());
            Ok(())
        }
    }

    fn helper(calls: Rc<RefCell<Vec<String>>>) -> AppHelper<'static> {
        let mut app = AppHelper::new("test", "0.1.0", "me", "a test application");
        app.add_command(Box::new(EchoCommand { calls }));
        app
    }

    #[test]
    fn test_dispatch() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let app = helper(Rc::clone(&calls));
        app.launch_app_with_args(vec!["test", "echo", "hello"]).unwrap();
        app.launch_app_with_args(vec!["test", "echo", "world", "--logging-level", "off"])
            .unwrap();
        assert_eq!(vec!["hello".to_string(), "world".to_string()], *calls.borrow());
    }

    #[test]
    fn test_errors() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let app = helper(Rc::clone(&calls));
        assert_eq!(
            "failure",
            app.launch_app_with_args(vec!["test", "echo", "fail"])
                .unwrap_err()
                .to_string()
        );
        assert!(app.launch_app_with_args(vec!["test", "echo"]).is_err());
        assert!(app
            .launch_app_with_args(vec!["test", "echo", "a", "--logging-level", "loud"])
            .is_err());
        assert!(calls.borrow().is_empty());
    }
}
