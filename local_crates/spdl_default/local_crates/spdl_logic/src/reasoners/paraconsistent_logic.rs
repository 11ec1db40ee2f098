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
    default_sat_solver, ClassicalLogic, Formula, FormulaTransformer, Generation,
    ParaconsistentNnfTransformer, PropositionalLogic, SatSolverFactory,
};
use log::debug;
use std::{cell::RefCell, fmt::Display, rc::Rc};

/// A paraconsistent propositional theory.
///
/// Some atoms of the theory may be declared as inconsistent, meaning both them and their negations can hold.
/// Satisfiability checks are made on a classical theory in which the formulas are translated into
/// their paraconsistent negation normal forms (see [`ParaconsistentNnfTransformer`]).
///
/// The classical theory is compiled on demand and kept until the formulas or the inconsistent atoms change.
/// Clones of a theory share the compiled theory as long as none of them is modified.
///
/// # Examples
///
/// ```
/// use spdl_logic::{parse, ParaconsistentLogic, PropositionalLogic, Syntax};
///
/// let formula = |s| parse(s, Syntax::PlainText).unwrap().into_formula().unwrap();
/// let mut theory = ParaconsistentLogic::default();
/// theory.add(formula("a"));
/// theory.add(formula("!a"));
/// assert!(!theory.sat(None));
/// theory.set_inconsistents(vec!["a"]);
/// assert!(theory.sat(None));
/// assert!(!theory.entail(&formula("b")));
/// ```
#[derive(Clone, Debug)]
pub struct ParaconsistentLogic {
    formulas: Vec<Formula>,
    inconsistents: Vec<String>,
    pnnf: ParaconsistentNnfTransformer,
    generation: Generation,
    compiled: Option<Rc<RefCell<CompiledTheory>>>,
    solver_factory: SatSolverFactory,
}

#[derive(Debug)]
struct CompiledTheory {
    generation: Generation,
    theory: ClassicalLogic,
}

impl ParaconsistentLogic {
    /// Builds an empty theory which checks satisfiability with solvers given by a factory.
    pub fn with_solver_factory(solver_factory: SatSolverFactory) -> Self {
        ParaconsistentLogic {
            formulas: Vec::new(),
            inconsistents: Vec::new(),
            pnnf: ParaconsistentNnfTransformer::default(),
            generation: Generation::next(),
            compiled: None,
            solver_factory,
        }
    }

    /// Replaces the set of inconsistent atoms.
    pub fn set_inconsistents<I, S>(&mut self, inconsistents: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut new_inconsistents: Vec<String> =
            inconsistents.into_iter().map(|s| s.into()).collect();
        new_inconsistents.sort_unstable();
        new_inconsistents.dedup();
        if new_inconsistents != self.inconsistents {
            self.pnnf.set_inconsistents(new_inconsistents.iter().cloned());
            self.inconsistents = new_inconsistents;
            self.generation = Generation::next();
        }
    }

    /// Returns the inconsistent atoms, sorted by name.
    pub fn inconsistents(&self) -> &[String] {
        &self.inconsistents
    }

    /// Returns the classical theory made of the paraconsistent negation normal forms of the formulas.
    pub fn compiled_theory(&mut self) -> ClassicalLogic {
        self.compiled().borrow().theory.clone()
    }

    fn compiled(&mut self) -> Rc<RefCell<CompiledTheory>> {
        if let Some(c) = &self.compiled {
            if c.borrow().generation == self.generation {
                return Rc::clone(c);
            }
        }
        debug!(
            "compiling a paraconsistent theory of {} formula(s) with inconsistent atoms {:?}",
            self.formulas.len(),
            self.inconsistents
        );
        let mut theory = ClassicalLogic::with_solver_factory(self.solver_factory);
        for f in &self.formulas {
            theory.add(self.pnnf.transform(f));
        }
        let compiled = Rc::new(RefCell::new(CompiledTheory {
            generation: self.generation,
            theory,
        }));
        self.compiled = Some(Rc::clone(&compiled));
        compiled
    }
}

impl Default for ParaconsistentLogic {
    fn default() -> Self {
        ParaconsistentLogic::with_solver_factory(default_sat_solver)
    }
}

impl PropositionalLogic for ParaconsistentLogic {
    fn add(&mut self, formula: Formula) {
        self.formulas.push(formula);
        self.generation = Generation::next();
    }

    fn formulas(&self) -> &[Formula] {
        &self.formulas
    }

    fn sat(&mut self, formula: Option<&Formula>) -> bool {
        let query = formula.map(|f| self.pnnf.transform(f));
        let compiled = self.compiled();
        let mut compiled = compiled.borrow_mut();
        compiled.theory.sat(query.as_ref())
    }

    fn entail(&mut self, formula: &Formula) -> bool {
        let query = self.pnnf.transform(formula);
        let compiled = self.compiled();
        let mut compiled = compiled.borrow_mut();
        compiled.theory.entail(&query)
    }
}

impl Display for ParaconsistentLogic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_formula_set(&self.formulas, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, Syntax};

    fn formula(s: &str) -> Formula {
        parse(s, Syntax::PlainText).unwrap().into_formula().unwrap()
    }

    fn theory(formulas: &[&str]) -> ParaconsistentLogic {
        let mut t = ParaconsistentLogic::default();
        formulas.iter().for_each(|f| t.add(formula(f)));
        t
    }

    #[test]
    fn test_classical_behavior_without_inconsistent_atoms() {
        let mut w = theory(&["A", "A -> !B |(!A&C)"]);
        assert!(w.sat(Some(&formula("D->B"))));
        assert!(w.sat(Some(&formula("D->A"))));
        assert!(w.entail(&formula("!B|E")));
        assert!(!w.entail(&formula("C")));
        assert!(!w.entail(&formula("E")));
    }

    #[test]
    fn test_inconsistent_atom() {
        let mut w = theory(&["A", "A -> !B |(!A&C)"]);
        w.set_inconsistents(vec!["A"]);
        assert!(w.sat(Some(&formula("D->B"))));
        assert!(w.sat(Some(&formula("D->A"))));
        assert!(w.entail(&formula("A")));
        assert!(!w.entail(&formula("!B|E")));
        assert!(!w.entail(&formula("C")));
        assert!(!w.entail(&formula("E")));
    }

    #[test]
    fn test_inconsistent_atom_with_implication() {
        let mut w = theory(&["A", "A =) !B |(!A&C)"]);
        assert!(w.entail(&formula("!B|E")));
        assert!(!w.entail(&formula("C")));
        w.set_inconsistents(vec!["A"]);
        assert!(w.sat(Some(&formula("D->B"))));
        assert!(w.sat(Some(&formula("A"))));
        assert!(w.sat(Some(&formula("!B"))));
        assert!(!w.entail(&formula("!B|E")));
        assert!(!w.entail(&formula("C")));
        assert!(!w.entail(&formula("E")));
        w.add(formula("B"));
        assert!(w.entail(&formula("!A & C")));
        w.add(formula("!C"));
        assert!(w.entail(&formula("E")));
    }

    #[test]
    fn test_set_inconsistents_normalizes() {
        let mut w = theory(&["a"]);
        w.set_inconsistents(vec!["b", "a", "b"]);
        assert_eq!(&["a".to_string(), "b".to_string()], w.inconsistents());
    }

    #[test]
    fn test_compiled_theory_follows_changes() {
        let mut w = theory(&["!a"]);
        assert_eq!("{!a}", w.compiled_theory().to_string());
        w.set_inconsistents(vec!["a"]);
        assert_eq!("{a^-}", w.compiled_theory().to_string());
        w.add(formula("b"));
        assert_eq!("{a^-, b}", w.compiled_theory().to_string());
    }

    #[test]
    fn test_clones_share_compilation_until_modified() {
        let mut w = theory(&["a", "!a"]);
        w.set_inconsistents(vec!["a"]);
        assert!(w.sat(None));
        let mut copy = w.clone();
        assert!(Rc::ptr_eq(
            w.compiled.as_ref().unwrap(),
            copy.compiled.as_ref().unwrap()
        ));
        copy.add(formula("!b"));
        copy.add(formula("b"));
        assert!(!copy.sat(None));
        assert!(w.sat(None));
        assert_eq!(2, w.formulas().len());
        assert_eq!("{a, !a}", w.to_string());
    }
}
