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

mod dl;
mod errors;
mod io;
mod utils;

pub use dl::inconsistency_tester;
pub use dl::AnyDefaultLogic;
pub use dl::ClassicalDefaultLogic;
pub use dl::DefaultLogic;
pub use dl::ExtensionVisitor;
pub use dl::InconsistencyEncoding;
pub use dl::LogicKind;
pub use dl::NativeEncoding;
pub use dl::NativeParaconsistentDefaultLogic;
pub use dl::ParaconsistentDefaultLogic;
pub use dl::RenamingEncoding;
pub use dl::RenamingParaconsistentDefaultLogic;
pub use dl::SearchReport;

pub use errors::FormatError;
pub use errors::TestFailure;

pub use io::extension_writer;
pub use io::Action;
pub use io::Dataset;
pub use io::DatasetLoader;
pub use io::DatasetWriter;
pub use io::ExtensionWriter;
pub use io::LoadOutcome;
pub use io::LoadedTheory;
pub use io::MarkupExtensionWriter;
pub use io::PlainTextExtensionWriter;
pub use io::QueryAnswer;
pub use io::QueryAsker;
pub use io::QueryEnvelope;
pub use io::Question;
pub use io::RegressionReport;
pub use io::RegressionRunner;
pub use io::TheorySpec;

pub use utils::Combinations;
