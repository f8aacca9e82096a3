//! # datalog-core
//!
//! Front-end AST and clause-normalisation core for a Datalog compiler: a
//! typed intermediate representation every pass rewrites in place (the
//! `AstNode` protocol — clone, structural equality, child enumeration,
//! rewrite, print), plus a canonical, variable-renaming-invariant flat form
//! of a clause that downstream equivalence and minimisation passes consume.
//!
//! ## Scope
//!
//! This crate is the hardest slice of the front end, on purpose: it
//! represents a heterogeneous, recursively nested argument/literal/clause
//! tree under one uniform traversal protocol, guarantees structural
//! equality/deep-clone/rewrite without accidental aliasing, and produces the
//! canonical clause fingerprint every later pass (type inference, magic-set
//! rewriting, stratification, code generation) builds on.
//!
//! Deliberately **out of scope**: the concrete-syntax parser, the symbol
//! table's concrete implementation (consumed here only through the
//! [`symbol::SymbolTable`] trait), the relational IR and its interpreter,
//! I/O directives, code generation, the CLI driver, and the Datalog test
//! corpus. Those are external collaborators this crate's types are built to
//! be embedded in, not things it builds itself.
//!
//! ## Pipeline position
//!
//! ```text
//! concrete syntax
//!     ↓ (external parser)
//! Program { Vec<Clause> }              <- this crate's data model
//!     ↓ AnalysisRegistry::run
//! NormalisedClause per clause          <- this crate's output
//!     ↓ (external: equivalence / minimisation / magic-set / codegen passes)
//! ```
//!
//! ## Usage
//!
//! ```
//! use datalog_core::{
//!     analysis::AnalysisRegistry,
//!     argument::{Argument, ArgumentKind},
//!     literal::{Atom, Clause, Literal, LiteralKind},
//!     program::Program,
//!     qualified_name::QualifiedName,
//!     srcloc::SrcLoc,
//!     symbol::InMemorySymbolTable,
//! };
//!
//! let symtab = InMemorySymbolTable::new();
//! let mut program = Program::new();
//!
//! let var = |name: &str| Argument::new(SrcLoc::unknown(), ArgumentKind::Variable(name.into()));
//! let head = Atom::new(SrcLoc::unknown(), QualifiedName::single("R"), vec![var("X")]);
//! let body_atom = Atom::new(SrcLoc::unknown(), QualifiedName::single("S"), vec![var("X")]);
//! program.add_clause(Clause::new(
//!     SrcLoc::unknown(),
//!     head,
//!     vec![Literal::new(SrcLoc::unknown(), LiteralKind::Atom(body_atom))],
//! ));
//!
//! let mut registry = AnalysisRegistry::new(&symtab);
//! registry.run(&program);
//! println!("{}", registry.print(&program));
//! ```
//!
//! ## Module organisation
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`symbol`] | `string ↔ id` interning contract |
//! | [`srcloc`] | source-location span attached to every node |
//! | [`node`] | uniform node contract + mapper/rewrite protocol |
//! | [`argument`] | closed family of expression nodes |
//! | [`literal`] | atoms, negations, constraints, clauses |
//! | [`qualified_name`] | dotted relation/type names |
//! | [`program`] | clause collection |
//! | [`normalize`] | canonical flat clause representation |
//! | [`analysis`] | runs + caches the normaliser over a translation unit |
//! | [`config`] | figment-layered diagnostic configuration |
//! | [`error`] | crate error taxonomy |

pub mod analysis;
pub mod argument;
pub mod config;
pub mod error;
pub mod literal;
pub mod node;
pub mod normalize;
pub mod program;
pub mod qualified_name;
pub mod srcloc;
pub mod symbol;

pub use analysis::AnalysisRegistry;
pub use argument::{AggregateOp, Argument, ArgumentKind, FunctorOp, Sort};
pub use config::{Config, NormaliserConfig, PrintConfig};
pub use error::{CoreError, CoreResult};
pub use literal::{Atom, Clause, CmpOp, Literal, LiteralKind};
pub use node::{ChildRef, IdentityMapper, NodeMapper, StructuralEq};
pub use normalize::{normalise, normalise_with_config, Element, NormalisedClause};
pub use program::{ClauseId, Program};
pub use qualified_name::QualifiedName;
pub use srcloc::SrcLoc;
pub use symbol::{InMemorySymbolTable, SymbolId, SymbolTable};

/// Install a global `tracing` subscriber reading `RUST_LOG` (or `info` by
/// default), the way the engine crate's own binaries initialise logging
/// before running a pipeline. Opt-in dev convenience: library consumers
/// embedding this crate in a larger front end are expected to install their
/// own subscriber instead, so `AnalysisRegistry::run` never calls this
/// implicitly.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> Argument {
        Argument::new(SrcLoc::unknown(), ArgumentKind::Variable(name.to_string()))
    }

    #[test]
    fn end_to_end_build_normalise_print() {
        let symtab = InMemorySymbolTable::new();
        let mut program = Program::new();

        let head = Atom::new(SrcLoc::unknown(), QualifiedName::single("R"), vec![var("X")]);
        let body_atom = Atom::new(SrcLoc::unknown(), QualifiedName::single("S"), vec![var("X")]);
        program.add_clause(Clause::new(
            SrcLoc::unknown(),
            head,
            vec![Literal::new(SrcLoc::unknown(), LiteralKind::Atom(body_atom))],
        ));

        let mut registry = AnalysisRegistry::new(&symtab);
        registry.run(&program);

        let nc = registry.get(ClauseId(0)).expect("clause present");
        assert!(nc.fully_normalised);
        assert_eq!(nc.elements.len(), 2);

        let printed = registry.print(&program);
        assert!(printed.starts_with("Normalise(R(X) :- S(X).) = {"));
    }

    #[test]
    fn re_exports_are_reachable_from_crate_root() {
        let _: SrcLoc = SrcLoc::unknown();
        let _: CoreResult<()> = Ok(());
        let _ = Config::default();
    }
}
