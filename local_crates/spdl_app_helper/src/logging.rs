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

use anyhow::{anyhow, Context, Result};
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::str::FromStr;

/// The names of the logging levels accepted on the command line, from the quietest to the most verbose.
pub const LOGGING_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

pub(crate) fn level_filter(name: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(name).map_err(|_| anyhow!(r#"unknown logging level "{}""#, name))
}

/// Installs the logger of the application.
///
/// Records are written to the standard error, prefixed by a timestamp and their colored level.
pub fn init_logger(level: LevelFilter) -> Result<()> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::Magenta);
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                colors.color(record.level()),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .context("while initializing the logger")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(LevelFilter::Off, level_filter("off").unwrap());
        assert_eq!(LevelFilter::Info, level_filter("info").unwrap());
        assert_eq!(LevelFilter::Trace, level_filter("trace").unwrap());
        assert!(level_filter("verbose").is_err());
        for name in LOGGING_LEVELS.iter() {
            assert!(level_filter(name).is_ok());
        }
    }
}
