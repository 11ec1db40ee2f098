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

use crate::{CadicalSatSolver, Clause, Literal};

/// The message logged when a SAT solver invocation did not reach a conclusion.
pub const MAYBE_TIMEOUT_MSG: &str = "the SAT solver did not reply (maybe a timeout was reached ?)";

/// The answer of a SAT solver.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SatOutcome {
    /// A model was found; it contains a literal for each variable known by the solver
    Sat(Vec<Literal>),
    /// Unsatisfiability was proved
    Unsat,
    /// The solver did not reach a conclusion
    Unknown,
}

impl SatOutcome {
    /// Returns `true` iff a model was found.
    pub fn is_sat(&self) -> bool {
        matches!(self, SatOutcome::Sat(_))
    }
}

/// A `SatSolver` is used to look for models of sets of clauses.
///
/// # Examples
///
/// ```
/// use spdl_logic::{default_sat_solver, Clause, SatOutcome, SatSolver};
///
/// let mut solver = default_sat_solver();
/// solver.add_clause(&Clause::new(vec![(0, false).into(), (1, true).into()]).unwrap());
/// solver.add_clause(&Clause::new(vec![(0, true).into(), (1, false).into()]).unwrap());
/// match solver.check_consistency() {
///     SatOutcome::Sat(model) => println!("{:?} is a model", model),
///     SatOutcome::Unsat => println!("no model"),
///     SatOutcome::Unknown => println!("no answer"),
/// }
/// ```
pub trait SatSolver {
    /// Adds a [`Clause`] to the set of clauses considered by the solver.
    fn add_clause(&mut self, clause: &Clause);

    /// Returns the number of variables taken into consideration by the solver.
    ///
    /// # Examples
    ///
    /// ```
    /// use spdl_logic::{default_sat_solver, Clause, SatSolver};
    ///
    /// let mut solver = default_sat_solver();
    /// assert_eq!(0, solver.n_vars());
    /// solver.add_clause(&Clause::new(vec![(0, false).into(), (1, true).into()]).unwrap());
    /// assert_eq!(2, solver.n_vars());
    /// ```
    fn n_vars(&self) -> usize;

    /// Checks if the set of clauses has a model.
    fn check_consistency(&mut self) -> SatOutcome {
        self.check_consistency_with(&[])
    }

    /// Checks if the set of clauses, conditioned by a set of literals, has a model.
    ///
    /// The set of clauses itself is not altered by this function.
    ///
    /// # Examples
    ///
    /// ```
    /// use spdl_logic::{default_sat_solver, Clause, SatOutcome, SatSolver};
    ///
    /// let mut solver = default_sat_solver();
    /// solver.add_clause(&Clause::new(vec![(0, false).into(), (1, false).into()]).unwrap());
    /// solver.add_clause(&Clause::new(vec![(0, true).into(), (1, true).into()]).unwrap());
    /// assert!(solver.check_consistency_with(&[(0, true).into()]).is_sat());
    /// assert_eq!(
    ///     SatOutcome::Unsat,
    ///     solver.check_consistency_with(&[(0, true).into(), (1, true).into()])
    /// );
    /// ```
    fn check_consistency_with(&mut self, assumptions: &[Literal]) -> SatOutcome;
}

/// A function building new SAT solvers.
pub type SatSolverFactory = fn() -> Box<dyn SatSolver>;

/// Returns the default SAT solver.
///
/// The default SAT solver is currently the [`CadicalSatSolver`].
pub fn default_sat_solver() -> Box<dyn SatSolver> {
    Box::new(CadicalSatSolver::new())
}
