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

use crate::{Clause, Literal, SatOutcome, SatSolver};
use cadical::{Callbacks, Solver};

struct CadicalCallbacks;

impl Callbacks for CadicalCallbacks {}

/// The CaDiCaL SAT solver.
///
/// CaDiCaL is an efficient SAT solver written in C++.
/// It won first place in the SAT track of the SAT Race 2019 and second overall place.
pub struct CadicalSatSolver {
    solver: Solver<CadicalCallbacks>,
}

impl CadicalSatSolver {
    /// Builds a new instance of the CaDiCaL SAT solver.
    pub fn new() -> Self {
        Self {
            solver: Solver::new(),
        }
    }
}

impl Default for CadicalSatSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SatSolver for CadicalSatSolver {
    fn add_clause(&mut self, clause: &Clause) {
        self.solver
            .add_clause(clause.as_literals().iter().map(Literal::to_dimacs))
    }

    fn n_vars(&self) -> usize {
        self.solver.max_variable() as usize
    }

    fn check_consistency_with(&mut self, assumptions: &[Literal]) -> SatOutcome {
        match self
            .solver
            .solve_with(assumptions.iter().map(Literal::to_dimacs))
        {
            Some(true) => SatOutcome::Sat(build_model(&self.solver)),
            Some(false) => SatOutcome::Unsat,
            None => SatOutcome::Unknown, // kcov-ignore
        }
    }
}

fn build_model<T>(solver: &Solver<T>) -> Vec<Literal>
where
    T: Callbacks,
{
    (1..=solver.max_variable())
        .map(|i| match solver.value(i) {
            Some(true) => Literal::from_dimacs(i),
            Some(false) | None => Literal::from_dimacs(-i),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(literals: Vec<(usize, bool)>) -> Clause {
        Clause::new(literals.into_iter().map(Literal::from).collect()).unwrap()
    }

    #[test]
    fn test_cadical_sat() {
        let mut solver = CadicalSatSolver::new();
        solver.add_clause(&clause(vec![(0, false), (1, true)]));
        solver.add_clause(&clause(vec![(0, true), (2, true)]));
        match solver.check_consistency() {
            SatOutcome::Sat(model) => {
                assert_eq!(3, model.len());
                assert!(
                    model.contains(&Literal::new(1.into(), true))
                        || model.contains(&Literal::new(2.into(), true))
                );
            }
            _ => panic!(), // kcov-ignore
        }
    }

    #[test]
    fn test_sat_unit_prop() {
        let mut solver = CadicalSatSolver::new();
        solver.add_clause(&clause(vec![(0, false)]));
        solver.add_clause(&clause(vec![(0, true), (1, false)]));
        assert_eq!(
            SatOutcome::Sat(vec![(0, false).into(), (1, false).into()]),
            solver.check_consistency()
        );
    }

    #[test]
    fn test_cadical_unsat() {
        let mut solver = CadicalSatSolver::new();
        solver.add_clause(&clause(vec![(0, false), (1, true)]));
        solver.add_clause(&clause(vec![(0, true), (1, false)]));
        solver.add_clause(&clause(vec![(0, false), (1, false)]));
        solver.add_clause(&clause(vec![(0, true), (1, true)]));
        assert_eq!(SatOutcome::Unsat, solver.check_consistency());
    }

    #[test]
    fn test_empty_clause() {
        let mut solver = CadicalSatSolver::new();
        solver.add_clause(&Clause::new(vec![]).unwrap());
        assert_eq!(SatOutcome::Unsat, solver.check_consistency());
    }

    #[test]
    fn test_tautology_keeps_solver_sat() {
        let mut solver = CadicalSatSolver::new();
        let literals = vec![Literal::from_dimacs(1), Literal::from_dimacs(-1)];
        if let Some(c) = Clause::new(literals) {
            solver.add_clause(&c); // kcov-ignore
        }
        assert!(solver.check_consistency().is_sat());
    }

    #[test]
    fn test_no_clause() {
        let mut solver = CadicalSatSolver::new();
        assert_eq!(SatOutcome::Sat(vec![]), solver.check_consistency());
    }

    #[test]
    fn test_multiple_calls() {
        let mut solver = CadicalSatSolver::new();
        solver.add_clause(&clause(vec![(0, false), (1, false)]));
        solver.add_clause(&clause(vec![(0, true), (1, true)]));
        assert!(solver.check_consistency_with(&[(0, true).into()]).is_sat());
        assert_eq!(
            SatOutcome::Unsat,
            solver.check_consistency_with(&[(0, true).into(), (1, true).into()])
        );
    }
}
