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

mod core;
mod parser;
mod reasoners;
mod sat;
mod transformations;
mod utils;

pub use crate::core::Clause;
pub use crate::core::Connector;
pub use crate::core::DefaultRule;
pub use crate::core::Formula;
pub use crate::core::Literal;
pub use crate::core::VarId;

pub use parser::parse;
pub use parser::Parsed;
pub use parser::Syntax;
pub use parser::SyntaxError;
pub use parser::SyntaxErrorKind;

pub use reasoners::ClassicalLogic;
pub use reasoners::ParaconsistentLogic;
pub use reasoners::PropositionalLogic;

pub use sat::default_sat_solver;
pub use sat::AtomMapper;
pub use sat::CadicalSatSolver;
pub use sat::SatOutcome;
pub use sat::SatSolver;
pub use sat::SatSolverFactory;
pub use sat::MAYBE_TIMEOUT_MSG;

pub use transformations::cnf_clauses;
pub use transformations::collect_atoms;
pub use transformations::default_theory_to_markup;
pub use transformations::negated_atom_name;
pub use transformations::rule_to_markup;
pub use transformations::subst;
pub use transformations::subst_all;
pub use transformations::theory_to_markup;
pub use transformations::to_cnf;
pub use transformations::to_full_pnnf;
pub use transformations::to_markup;
pub use transformations::to_nnf;
pub use transformations::to_plain;
pub use transformations::CnfTransformer;
pub use transformations::FormulaTransformer;
pub use transformations::IdentityTransformer;
pub use transformations::NnfTransformer;
pub use transformations::ParaconsistentNnfTransformer;
pub use transformations::PlainTransformer;
pub use transformations::SignedClause;
pub use transformations::Substitution;
pub use transformations::NEGATED_ATOM_SUFFIX;

pub use utils::Generation;
