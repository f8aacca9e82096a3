//! Analysis registry: runs the clause normaliser over a whole [`Program`]
//! and caches the per-clause results, keyed by [`ClauseId`].

use std::collections::HashMap;

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::normalize::{normalise, NormalisedClause};
use crate::program::{ClauseId, Program};
use crate::symbol::SymbolTable;

/// Runs and caches the normalisation analysis for one translation unit.
///
/// Analyses here are idempotent *per clause* but the registry as a whole is
/// run-once: re-running `run` on a registry that already has results is a
/// programming error and is asserted. [`AnalysisRegistry::try_run`] is
/// provided for call sites that would rather get a `CoreError` back.
pub struct AnalysisRegistry<'a> {
    symtab: &'a dyn SymbolTable,
    results: Option<HashMap<ClauseId, NormalisedClause>>,
}

impl<'a> AnalysisRegistry<'a> {
    pub fn new(symtab: &'a dyn SymbolTable) -> Self {
        AnalysisRegistry {
            symtab,
            results: None,
        }
    }

    /// Normalise every clause in `program`. Panics if this registry has
    /// already been run.
    pub fn run(&mut self, program: &Program) {
        assert!(
            self.results.is_none(),
            "AnalysisRegistry::run invoked twice on the same translation unit"
        );
        let mut map = HashMap::with_capacity(program.len());
        for (id, clause) in program.iter() {
            let normalised = normalise(clause, self.symtab);
            debug!(
                clause_id = id.0,
                elements = normalised.elements.len(),
                fully_normalised = normalised.fully_normalised,
                "clause normalised"
            );
            map.insert(id, normalised);
        }
        self.results = Some(map);
    }

    /// Like `run`, but returns a [`CoreError::AlreadyAnalysed`] instead of
    /// panicking when called twice.
    pub fn try_run(&mut self, program: &Program) -> CoreResult<()> {
        if self.results.is_some() {
            return Err(CoreError::AlreadyAnalysed);
        }
        self.run(program);
        Ok(())
    }

    pub fn get(&self, id: ClauseId) -> Option<&NormalisedClause> {
        self.results.as_ref().and_then(|m| m.get(&id))
    }

    pub fn has_run(&self) -> bool {
        self.results.is_some()
    }

    /// Serialise every clause's normal form as
    /// `Normalise(clauseText) = { element₁, element₂, … }`, one line per
    /// clause, in program order.
    pub fn print(&self, program: &Program) -> String {
        let mut out = String::new();
        for (id, clause) in program.iter() {
            if let Some(nc) = self.get(id) {
                out.push_str(&nc.print(&clause.print(self.symtab)));
                out.push('\n');
            }
        }
        out
    }
}
