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

//! Helpers shared by the command line applications of the workspace.
mod app_helper;
pub use app_helper::AppHelper;

mod command;
pub use command::Command;

mod logging;
pub use logging::init_logger;
pub use logging::LOGGING_LEVELS;

pub use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
pub use log::{debug, error, info, trace, warn, Level, LevelFilter};
