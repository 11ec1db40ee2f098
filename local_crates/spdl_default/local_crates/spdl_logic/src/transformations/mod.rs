// spdl_logic
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

mod atom_collector;
pub use atom_collector::collect_atoms;

mod cnf;
pub use cnf::cnf_clauses;
pub use cnf::to_cnf;
pub use cnf::CnfTransformer;
pub use cnf::SignedClause;

mod flattening;
pub use flattening::to_plain;
pub use flattening::PlainTransformer;

mod formula_transformer;
pub use formula_transformer::FormulaTransformer;
pub use formula_transformer::IdentityTransformer;

mod markup;
pub use markup::default_theory_to_markup;
pub use markup::rule_to_markup;
pub use markup::theory_to_markup;
pub use markup::to_markup;

mod negation;
pub use negation::negated_atom_name;
pub use negation::to_full_pnnf;
pub use negation::to_nnf;
pub use negation::NnfTransformer;
pub use negation::ParaconsistentNnfTransformer;
pub use negation::NEGATED_ATOM_SUFFIX;

mod substitution;
pub use substitution::subst;
pub use substitution::subst_all;
pub use substitution::Substitution;
