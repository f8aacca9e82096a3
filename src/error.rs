//! Error taxonomy for this crate.
//!
//! Invariant violations, double-analysis, and symbol-table misuse are
//! compiler bugs: they abort via `panic!`/`assert!` at the call site (see
//! [`crate::argument::Argument::new_intrinsic_functor`],
//! [`crate::analysis::AnalysisRegistry::run`], [`crate::symbol::SymbolTable::resolve`]).
//! `CoreError` exists for the call sites that would rather surface those same
//! conditions as a `Result` than unwind, offering a panicking and a
//! `try_`-prefixed entry point side by side for a handful of operations.
//! Encountering a clause construct the normaliser doesn't understand is
//! never an error value at all: it is the sticky `fully_normalised` flag on
//! [`crate::normalize::NormalisedClause`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("analysis registry has already been run for this translation unit")]
    AlreadyAnalysed,

    #[error("symbol table misuse: unknown symbol id {0}")]
    UnknownSymbol(u32),

    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
