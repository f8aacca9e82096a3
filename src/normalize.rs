//! Clause normaliser: produces a canonical, flat, variable-renaming-invariant
//! representation of a clause for downstream equivalence/minimisation
//! passes.

use std::collections::HashSet;

use tracing::trace;

use crate::argument::{AggregateOp, Argument, ArgumentKind};
use crate::config::NormaliserConfig;
use crate::literal::{Clause, Literal, LiteralKind};
use crate::symbol::SymbolTable;

/// One flat element of a [`NormalisedClause`]: a tagged name plus its
/// ordered parameter tokens. Order within `params` is significant; order of
/// *elements* within a clause is not (they are compared as a multiset).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element {
    pub name: String,
    pub params: Vec<String>,
}

impl Element {
    fn new(name: impl Into<String>, params: Vec<String>) -> Self {
        Element {
            name: name.into(),
            params,
        }
    }
}

/// The canonical flat form of a `Clause`.
///
/// `fully_normalised` is sticky: once a literal or argument kind the
/// normaliser doesn't understand is encountered it stays `false` for the
/// rest of this clause, even if later elements normalise cleanly.
#[derive(Debug, Clone, Default)]
pub struct NormalisedClause {
    pub elements: Vec<Element>,
    pub constants: HashSet<String>,
    pub variables: HashSet<String>,
    pub fully_normalised: bool,
}

impl NormalisedClause {
    pub fn print(&self, clause_text: &str) -> String {
        let elements: Vec<String> = self
            .elements
            .iter()
            .map(|e| format!("{}:[{}]", e.name, e.params.join(",")))
            .collect();
        format!("Normalise({}) = {{{}}}", clause_text, elements.join(", "))
    }
}

const HEAD_SCOPE: &str = "@min:scope:0";

/// Per-clause normalisation state. The unnamed-variable counter and the
/// aggregator-scope counter are both fields here, not statics — per-clause,
/// not process-global, so independent calls never bleed counters into each
/// other (see DESIGN.md).
struct Builder {
    unnamed_counter: u64,
    aggr_scope_counter: u64,
    elements: Vec<Element>,
    constants: HashSet<String>,
    variables: HashSet<String>,
    fully_normalised: bool,
    trace_unhandled: bool,
}

impl Builder {
    fn new(trace_unhandled: bool) -> Self {
        Builder {
            unnamed_counter: 0,
            aggr_scope_counter: 0,
            elements: Vec::new(),
            constants: HashSet::new(),
            variables: HashSet::new(),
            fully_normalised: true,
            trace_unhandled,
        }
    }

    /// Recoverable, sticky once set. `context` names the literal/argument
    /// kind that triggered it, surfaced only when
    /// [`NormaliserConfig::trace_unhandled`] is on.
    fn mark_unhandled(&mut self, context: &str) {
        if self.trace_unhandled && self.fully_normalised {
            trace!(context, "clause normalisation hit an unhandled construct");
        }
        self.fully_normalised = false;
    }

    /// `norm(arg) -> token`: renders one argument to its canonical token.
    fn norm_argument(&mut self, arg: &Argument, symtab: &dyn SymbolTable) -> String {
        match &arg.kind {
            ArgumentKind::StringConstant(id) => {
                let token = format!("@min:cst:str\"{}\"", symtab.resolve(*id));
                self.constants.insert(token.clone());
                token
            }
            ArgumentKind::NumericConstant(n) => {
                let token = format!("@min:cst:num:{n}");
                self.constants.insert(token.clone());
                token
            }
            ArgumentKind::NilConstant => {
                let token = "@min:cst:nil".to_string();
                self.constants.insert(token.clone());
                token
            }
            ArgumentKind::Variable(name) => {
                self.variables.insert(name.clone());
                name.clone()
            }
            ArgumentKind::UnnamedVariable => {
                let token = format!("@min:unnamed:{}", self.unnamed_counter);
                self.unnamed_counter += 1;
                self.variables.insert(token.clone());
                token
            }
            ArgumentKind::Aggregator { op, target, body } => {
                self.aggr_scope_counter += 1;
                let scope_id = format!("@min:scope:{}", self.aggr_scope_counter);

                let target_token = target
                    .as_ref()
                    .map(|t| self.norm_argument(t, symtab));
                let mut params = vec![scope_id.clone()];
                params.extend(target_token);
                self.elements
                    .push(Element::new(format!("@min:aggrtype:{}", op.as_str()), params));

                for literal in body {
                    self.push_body_element(literal, &scope_id, symtab);
                }

                self.variables.insert(scope_id.clone());
                scope_id
            }
            // Counter, SubroutineArg, and the structural kinds (functors,
            // records, casts) have no canonical token of their own — only
            // the six arms above do. Recoverable, sticky once hit.
            ArgumentKind::Counter => {
                self.mark_unhandled("Counter");
                "@min:unhandled:arg".to_string()
            }
            ArgumentKind::SubroutineArg(_) => {
                self.mark_unhandled("SubroutineArg");
                "@min:unhandled:arg".to_string()
            }
            ArgumentKind::IntrinsicFunctor { .. } => {
                self.mark_unhandled("IntrinsicFunctor");
                "@min:unhandled:arg".to_string()
            }
            ArgumentKind::UserFunctor { .. } => {
                self.mark_unhandled("UserFunctor");
                "@min:unhandled:arg".to_string()
            }
            ArgumentKind::RecordInit { .. } => {
                self.mark_unhandled("RecordInit");
                "@min:unhandled:arg".to_string()
            }
            ArgumentKind::TypeCast { .. } => {
                self.mark_unhandled("TypeCast");
                "@min:unhandled:arg".to_string()
            }
        }
    }

    /// Emit the element for one body literal under `scope_id`.
    fn push_body_element(&mut self, literal: &Literal, scope_id: &str, symtab: &dyn SymbolTable) {
        match &literal.kind {
            LiteralKind::Atom(atom) => {
                let mut params = vec![scope_id.to_string()];
                params.extend(atom.args.iter().map(|a| self.norm_argument(a, symtab)));
                self.elements
                    .push(Element::new(format!("@min:atom{}", atom.name), params));
            }
            LiteralKind::Negation(atom) => {
                let mut params = vec![scope_id.to_string()];
                params.extend(atom.args.iter().map(|a| self.norm_argument(a, symtab)));
                self.elements
                    .push(Element::new(format!("@min:neg{}", atom.name), params));
            }
            LiteralKind::BinaryConstraint { op, lhs, rhs } => {
                let lhs_token = self.norm_argument(lhs, symtab);
                let rhs_token = self.norm_argument(rhs, symtab);
                self.elements.push(Element::new(
                    format!("@min:operator{}", op.symbol()),
                    vec![scope_id.to_string(), lhs_token, rhs_token],
                ));
            }
        }
    }

    fn finish(self) -> NormalisedClause {
        NormalisedClause {
            elements: self.elements,
            constants: self.constants,
            variables: self.variables,
            fully_normalised: self.fully_normalised,
        }
    }
}

/// Normalise `clause` into its canonical flat form, with the default
/// [`NormaliserConfig`] (no unhandled-construct tracing).
///
/// The unnamed-variable counter and aggregator-scope counter both start
/// fresh for every call, so normalising the same clause twice — or
/// normalising two unrelated clauses — produces the same counter sequence
/// independently.
pub fn normalise(clause: &Clause, symtab: &dyn SymbolTable) -> NormalisedClause {
    normalise_with_config(clause, symtab, &NormaliserConfig::default())
}

/// As [`normalise`], but honouring `config.trace_unhandled` — when set, every
/// construct the normaliser has no canonical token for emits a
/// `tracing::trace!` naming the offending argument kind.
pub fn normalise_with_config(
    clause: &Clause,
    symtab: &dyn SymbolTable,
    config: &NormaliserConfig,
) -> NormalisedClause {
    let mut builder = Builder::new(config.trace_unhandled);

    let head_params: Vec<String> = clause
        .head
        .args
        .iter()
        .map(|a| builder.norm_argument(a, symtab))
        .collect();
    builder.elements.push(Element::new("@min:head", head_params));

    for literal in &clause.body {
        builder.push_body_element(literal, HEAD_SCOPE, symtab);
    }

    builder.finish()
}
