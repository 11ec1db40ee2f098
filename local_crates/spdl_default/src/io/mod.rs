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

mod dataset;
pub use dataset::Action;
pub use dataset::Dataset;
pub use dataset::DatasetLoader;
pub use dataset::LoadOutcome;
pub use dataset::LoadedTheory;
pub use dataset::TheorySpec;

mod dataset_writer;
pub use dataset_writer::DatasetWriter;

mod extension_writer;
pub use extension_writer::extension_writer;
pub use extension_writer::ExtensionWriter;
pub use extension_writer::MarkupExtensionWriter;
pub use extension_writer::PlainTextExtensionWriter;

mod query;
pub use query::QueryAnswer;
pub use query::QueryAsker;
pub use query::QueryEnvelope;
pub use query::Question;

mod regression;
pub use regression::RegressionReport;
pub use regression::RegressionRunner;
