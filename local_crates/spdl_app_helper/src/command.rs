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

use anyhow::Result;
use clap::{App, ArgMatches};

/// A subcommand of an application built by an [`AppHelper`](crate::AppHelper).
pub trait Command<'a> {
    /// Returns the name of the subcommand, as typed on the command line.
    fn name(&self) -> &str;

    /// Returns the `clap` definition of the subcommand.
    fn clap_subcommand(&self) -> App<'a, 'a>;

    /// Executes the subcommand given the matches of its own arguments.
    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()>;
}
