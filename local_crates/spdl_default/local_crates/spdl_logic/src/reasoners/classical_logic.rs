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

use super::propositional_logic::fmt_formula_set;
use crate::{
    cnf_clauses, collect_atoms, default_sat_solver, AtomMapper, Clause, Formula,
    PropositionalLogic, SatOutcome, SatSolverFactory, MAYBE_TIMEOUT_MSG,
};
use log::warn;
use std::{
    fmt::Display,
    ops::{Deref, DerefMut},
};

/// A classical propositional theory.
///
/// Formulas are translated into clauses when they are added.
/// Each satisfiability check builds a new SAT solver from the current set of clauses.
///
/// # Examples
///
/// ```
/// use spdl_logic::{parse, ClassicalLogic, Formula, PropositionalLogic, Syntax};
///
/// let formula = |s| parse(s, Syntax::PlainText).unwrap().into_formula().unwrap();
/// let mut theory = ClassicalLogic::default();
/// theory.add(formula("A"));
/// theory.add(formula("A -> !B | (!A & C)"));
/// assert!(theory.sat(Some(&formula("D -> B"))));
/// assert!(theory.entail(&formula("!B | E")));
/// assert!(!theory.entail(&formula("C")));
/// ```
#[derive(Clone, Debug)]
pub struct ClassicalLogic {
    formulas: Vec<Formula>,
    atoms: AtomMapper,
    clauses: Vec<Clause>,
    solver_factory: SatSolverFactory,
}

impl ClassicalLogic {
    /// Builds an empty theory which checks satisfiability with solvers given by a factory.
    pub fn with_solver_factory(solver_factory: SatSolverFactory) -> Self {
        ClassicalLogic {
            formulas: Vec::new(),
            atoms: AtomMapper::default(),
            clauses: Vec::new(),
            solver_factory,
        }
    }

    /// Returns the factory used to build SAT solvers.
    pub fn solver_factory(&self) -> SatSolverFactory {
        self.solver_factory
    }

    /// Returns the mapping between the atoms of the theory and the SAT variables.
    pub fn atoms(&self) -> &AtomMapper {
        &self.atoms
    }

    /// Returns the clauses the formulas of the theory were translated into.
    ///
    /// Tautological clauses are discarded.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Looks for a model of the theory.
    ///
    /// The model is given as a list of atom names associated with their truth values.
    ///
    /// # Examples
    ///
    /// ```
    /// use spdl_logic::{parse, ClassicalLogic, PropositionalLogic, Syntax};
    ///
    /// let mut theory = ClassicalLogic::default();
    /// theory.add(parse("a & !b", Syntax::PlainText).unwrap().into_formula().unwrap());
    /// assert_eq!(
    ///     Some(vec![("a".to_string(), true), ("b".to_string(), false)]),
    ///     theory.model()
    /// );
    /// ```
    pub fn model(&self) -> Option<Vec<(String, bool)>> {
        match self.check() {
            SatOutcome::Sat(literals) => Some(
                literals
                    .into_iter()
                    .filter_map(|l| {
                        self.atoms
                            .name(l.var_id())
                            .map(|n| (n.to_string(), l.polarity()))
                    })
                    .collect(),
            ),
            _ => None,
        }
    }

    fn add_clauses_of(&mut self, formula: &Formula) {
        for signed_clause in cnf_clauses(formula) {
            let literals = signed_clause
                .into_iter()
                .map(|(name, polarity)| self.atoms.literal_or_insert(name, polarity))
                .collect();
            if let Some(clause) = Clause::new(literals) {
                self.clauses.push(clause);
            }
        }
    }

    fn check(&self) -> SatOutcome {
        let mut solver = (self.solver_factory)();
        self.clauses.iter().for_each(|c| solver.add_clause(c));
        solver.check_consistency()
    }
}

impl Default for ClassicalLogic {
    fn default() -> Self {
        ClassicalLogic::with_solver_factory(default_sat_solver)
    }
}

impl PropositionalLogic for ClassicalLogic {
    fn add(&mut self, formula: Formula) {
        for atom in collect_atoms(&formula) {
            self.atoms.var_id_or_insert(&atom);
        }
        self.add_clauses_of(&formula);
        self.formulas.push(formula);
    }

    fn formulas(&self) -> &[Formula] {
        &self.formulas
    }

    fn sat(&mut self, formula: Option<&Formula>) -> bool {
        let outcome = match formula {
            Some(f) => {
                let mut scope = TransientScope::open(self);
                scope.add_clauses_of(f);
                scope.check()
            }
            None => self.check(),
        };
        match outcome {
            SatOutcome::Sat(_) => true,
            SatOutcome::Unsat => false,
            SatOutcome::Unknown => {
                warn!("{}; considering the theory as unsatisfiable", MAYBE_TIMEOUT_MSG);
                false
            }
        }
    }
}

impl Display for ClassicalLogic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_formula_set(&self.formulas, f)
    }
}

/// A guard restoring the clauses and the atoms of a theory when dropped.
///
/// Atoms registered before the guard was opened keep their variables.
struct TransientScope<'a> {
    theory: &'a mut ClassicalLogic,
    n_clauses: usize,
    n_atoms: usize,
}

impl<'a> TransientScope<'a> {
    fn open(theory: &'a mut ClassicalLogic) -> Self {
        TransientScope {
            n_clauses: theory.clauses.len(),
            n_atoms: theory.atoms.len(),
            theory,
        }
    }
}

impl Deref for TransientScope<'_> {
    type Target = ClassicalLogic;

    fn deref(&self) -> &ClassicalLogic {
        self.theory
    }
}

impl DerefMut for TransientScope<'_> {
    fn deref_mut(&mut self) -> &mut ClassicalLogic {
        self.theory
    }
}

impl Drop for TransientScope<'_> {
    fn drop(&mut self) {
        self.theory.clauses.truncate(self.n_clauses);
        self.theory.atoms.truncate(self.n_atoms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, SatSolver, Syntax};

    fn formula(s: &str) -> Formula {
        parse(s, Syntax::PlainText).unwrap().into_formula().unwrap()
    }

    fn theory(formulas: &[&str]) -> ClassicalLogic {
        let mut t = ClassicalLogic::default();
        formulas.iter().for_each(|f| t.add(formula(f)));
        t
    }

    #[test]
    fn test_sat_and_entail() {
        let mut w = theory(&["A", "A -> !B |(!A&C)"]);
        assert!(w.sat(Some(&formula("D->B"))));
        assert!(w.sat(Some(&formula("D->A"))));
        assert!(w.entail(&formula("!B|E")));
        assert!(!w.entail(&formula("C")));
        assert!(!w.entail(&formula("E")));
    }

    #[test]
    fn test_implication_kinds_agree() {
        let mut w = theory(&["A", "A =) !B |(!A&C)"]);
        assert!(w.entail(&formula("!B|E")));
        assert!(!w.entail(&formula("C")));
    }

    #[test]
    fn test_inconsistent_theory_entails_everything() {
        let mut w = theory(&["a", "!a"]);
        assert!(!w.sat(None));
        assert!(w.entail(&formula("hahaha")));
    }

    #[test]
    fn test_empty_theory() {
        let mut w = ClassicalLogic::default();
        assert!(w.sat(None));
        assert!(!w.entail(&formula("a")));
        assert!(w.entail(&formula("a | !a")));
    }

    #[test]
    fn test_rollback() {
        let mut w = theory(&["a -> b", "c"]);
        let atoms = w.atoms().clone();
        let clauses = w.clauses().to_vec();
        for query in &["a & !b", "x | (y & a)", "!(z <-> c)", "p | !p"] {
            w.sat(Some(&formula(query)));
            w.entail(&formula(query));
            assert_eq!(&atoms, w.atoms());
            assert_eq!(clauses.as_slice(), w.clauses());
        }
    }

    #[test]
    fn test_cnf_is_equisatisfiable() {
        for f in &["(a <-> b) & (a -> !b) & (b | a)", "!(a -> (b & c)) | (d <-> !d)", "x =) (y | (z & !x))"] {
            let mut from_cnf = ClassicalLogic::default();
            from_cnf.add(crate::to_cnf(&formula(f)));
            assert_eq!(theory(&[f]).sat(None), from_cnf.sat(None));
        }
        assert!(!theory(&["(a <-> b) & (a -> !b) & (b | a)"]).sat(None));
    }

    #[test]
    fn test_tautologies_are_discarded() {
        let w = theory(&["p | !p", "(q & r) | !q"]);
        assert_eq!(1, w.clauses().len());
        assert_eq!(3, w.atoms().len());
        assert_eq!("{(p | !p), ((q & r) | !q)}", w.to_string());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut w = theory(&["a"]);
        let mut copy = w.clone();
        copy.add(formula("!a"));
        assert!(w.sat(None));
        assert!(!copy.sat(None));
        assert_eq!(1, w.formulas().len());
    }

    #[test]
    fn test_model() {
        let w = theory(&["a -> b", "a"]);
        let model = w.model().unwrap();
        assert!(model.contains(&("a".to_string(), true)));
        assert!(model.contains(&("b".to_string(), true)));
        assert_eq!(None, theory(&["a", "!a"]).model());
    }

    struct SilentSolver;

    impl SatSolver for SilentSolver {
        fn add_clause(&mut self, _clause: &Clause) {}

        fn n_vars(&self) -> usize {
            0
        }

        fn check_consistency_with(&mut self, _assumptions: &[crate::Literal]) -> SatOutcome {
            SatOutcome::Unknown
        }
    }

    fn silent_solver() -> Box<dyn SatSolver> {
        Box::new(SilentSolver)
    }

    #[test]
    fn test_unknown_is_unsat() {
        let mut w = ClassicalLogic::with_solver_factory(silent_solver);
        w.add(formula("a"));
        assert!(!w.sat(None));
        assert!(w.entail(&formula("b")));
    }
}
