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

mod any_default_logic;
pub use any_default_logic::AnyDefaultLogic;
pub use any_default_logic::LogicKind;

mod classical_default_logic;
pub use classical_default_logic::ClassicalDefaultLogic;

mod default_logic;
pub use default_logic::DefaultLogic;
pub use default_logic::ExtensionVisitor;

mod inconsistency_encoding;
pub use inconsistency_encoding::inconsistency_tester;
pub use inconsistency_encoding::InconsistencyEncoding;
pub use inconsistency_encoding::NativeEncoding;
pub use inconsistency_encoding::RenamingEncoding;

mod paraconsistent_default_logic;
pub use paraconsistent_default_logic::NativeParaconsistentDefaultLogic;
pub use paraconsistent_default_logic::ParaconsistentDefaultLogic;
pub use paraconsistent_default_logic::RenamingParaconsistentDefaultLogic;
pub use paraconsistent_default_logic::SearchReport;
