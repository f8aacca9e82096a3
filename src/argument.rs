//! Argument variants: the closed family of expression nodes that can appear
//! as a term inside an atom, functor, record, cast or aggregate.

use crate::literal::Literal;
use crate::node::{replace_with, ChildRef, NodeMapper, StructuralEq};
use crate::qualified_name::QualifiedName;
use crate::srcloc::SrcLoc;
use crate::symbol::{SymbolId, SymbolTable};

/// The sort (return/argument type) of an intrinsic functor operand or
/// result. Datalog's core value universe at this layer is just numbers and
/// interned strings; richer typing is a later pass's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort {
    Number,
    Symbol,
}

/// Built-in (intrinsic) functor operators, partitioned by arity.
///
/// Arity, return sort and per-argument accepted sort are all fixed by the
/// operator itself — [`Argument::new_intrinsic_functor`] enforces the arity
/// at construction and panics on mismatch, since a mismatch can only mean a
/// bug in whatever built the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctorOp {
    // unary
    Neg,
    BNot,
    LNot,
    // binary
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    BAnd,
    BOr,
    BXor,
    LAnd,
    LOr,
    Max,
    Min,
    Cat,
    // ternary
    Substr,
}

impl FunctorOp {
    pub fn arity(self) -> usize {
        match self {
            FunctorOp::Neg | FunctorOp::BNot | FunctorOp::LNot => 1,
            FunctorOp::Add
            | FunctorOp::Sub
            | FunctorOp::Mul
            | FunctorOp::Div
            | FunctorOp::Mod
            | FunctorOp::BAnd
            | FunctorOp::BOr
            | FunctorOp::BXor
            | FunctorOp::LAnd
            | FunctorOp::LOr
            | FunctorOp::Max
            | FunctorOp::Min
            | FunctorOp::Cat => 2,
            FunctorOp::Substr => 3,
        }
    }

    pub fn return_sort(self) -> Sort {
        match self {
            FunctorOp::Cat | FunctorOp::Substr => Sort::Symbol,
            _ => Sort::Number,
        }
    }

    /// Accepted sort for each positional argument, in order.
    pub fn arg_sorts(self) -> Vec<Sort> {
        match self {
            FunctorOp::Cat => vec![Sort::Symbol, Sort::Symbol],
            FunctorOp::Substr => vec![Sort::Symbol, Sort::Number, Sort::Number],
            _ => vec![Sort::Number; self.arity()],
        }
    }

    /// Infix printable symbol, if this op is conventionally printed
    /// `(lhs op rhs)` rather than `op(args,…)`. Only binary ops may have one.
    pub fn infix_symbol(self) -> Option<&'static str> {
        match self {
            FunctorOp::Add => Some("+"),
            FunctorOp::Sub => Some("-"),
            FunctorOp::Mul => Some("*"),
            FunctorOp::Div => Some("/"),
            FunctorOp::Mod => Some("%"),
            FunctorOp::BAnd => Some("band"),
            FunctorOp::BOr => Some("bor"),
            FunctorOp::BXor => Some("bxor"),
            FunctorOp::LAnd => Some("land"),
            FunctorOp::LOr => Some("lor"),
            _ => None,
        }
    }

    /// The prefix name used when this op has no infix form, or for
    /// `toString`-style diagnostics.
    pub fn prefix_name(self) -> &'static str {
        match self {
            FunctorOp::Neg => "-",
            FunctorOp::BNot => "bnot",
            FunctorOp::LNot => "lnot",
            FunctorOp::Add => "+",
            FunctorOp::Sub => "-",
            FunctorOp::Mul => "*",
            FunctorOp::Div => "/",
            FunctorOp::Mod => "%",
            FunctorOp::BAnd => "band",
            FunctorOp::BOr => "bor",
            FunctorOp::BXor => "bxor",
            FunctorOp::LAnd => "land",
            FunctorOp::LOr => "lor",
            FunctorOp::Max => "max",
            FunctorOp::Min => "min",
            FunctorOp::Cat => "cat",
            FunctorOp::Substr => "substr",
        }
    }
}

/// Aggregate operators: `min`, `max`, `count`, `sum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateOp {
    Min,
    Max,
    Count,
    Sum,
}

impl AggregateOp {
    pub fn as_str(self) -> &'static str {
        match self {
            AggregateOp::Min => "min",
            AggregateOp::Max => "max",
            AggregateOp::Count => "count",
            AggregateOp::Sum => "sum",
        }
    }
}

/// An expression node.
#[derive(Debug, Clone)]
pub struct Argument {
    pub loc: SrcLoc,
    pub kind: ArgumentKind,
}

/// The closed set of argument variants.
#[derive(Debug, Clone)]
pub enum ArgumentKind {
    Variable(String),
    UnnamedVariable,
    /// Projection counter, printed as `$`.
    Counter,
    StringConstant(SymbolId),
    NumericConstant(i64),
    /// Records' null.
    NilConstant,
    IntrinsicFunctor {
        op: FunctorOp,
        args: Vec<Argument>,
    },
    UserFunctor {
        name: String,
        args: Vec<Argument>,
    },
    RecordInit {
        args: Vec<Argument>,
    },
    TypeCast {
        value: Box<Argument>,
        target_type_name: QualifiedName,
    },
    /// `target` is absent for `count`. `body` introduces a variable scope
    /// disjoint from the enclosing clause.
    Aggregator {
        op: AggregateOp,
        target: Option<Box<Argument>>,
        body: Vec<Literal>,
    },
    SubroutineArg(usize),
}

impl Default for ArgumentKind {
    fn default() -> Self {
        // Transient placeholder only — see `node::replace_with`.
        ArgumentKind::NilConstant
    }
}

impl Default for Argument {
    fn default() -> Self {
        Argument {
            loc: SrcLoc::unknown(),
            kind: ArgumentKind::default(),
        }
    }
}

impl Argument {
    pub fn new(loc: SrcLoc, kind: ArgumentKind) -> Self {
        Argument { loc, kind }
    }

    /// Construct an intrinsic functor application, checking the op's fixed
    /// arity. A mismatch can only be a bug in the caller, so this aborts
    /// rather than returning a `Result`.
    pub fn new_intrinsic_functor(loc: SrcLoc, op: FunctorOp, args: Vec<Argument>) -> Self {
        assert_eq!(
            args.len(),
            op.arity(),
            "arity mismatch constructing intrinsic functor {:?}: expected {}, got {}",
            op,
            op.arity(),
            args.len()
        );
        Argument::new(loc, ArgumentKind::IntrinsicFunctor { op, args })
    }

    /// Structural equality, ignoring `loc`.
    pub fn equal(&self, other: &Argument) -> bool {
        self.kind.structural_eq(&other.kind)
    }

    /// Direct child subtrees, in declaration order.
    pub fn children(&self) -> Vec<ChildRef<'_>> {
        match &self.kind {
            ArgumentKind::Variable(_)
            | ArgumentKind::UnnamedVariable
            | ArgumentKind::Counter
            | ArgumentKind::StringConstant(_)
            | ArgumentKind::NumericConstant(_)
            | ArgumentKind::NilConstant
            | ArgumentKind::SubroutineArg(_) => Vec::new(),
            ArgumentKind::IntrinsicFunctor { args, .. }
            | ArgumentKind::UserFunctor { args, .. }
            | ArgumentKind::RecordInit { args } => {
                args.iter().map(ChildRef::Argument).collect()
            }
            ArgumentKind::TypeCast { value, .. } => vec![ChildRef::Argument(value)],
            ArgumentKind::Aggregator { target, body, .. } => {
                let mut out = Vec::with_capacity(body.len() + 1);
                if let Some(target) = target {
                    out.push(ChildRef::Argument(target));
                }
                out.extend(body.iter().map(ChildRef::Literal));
                out
            }
        }
    }

    /// Apply `mapper` to each direct child slot, replacing it in place.
    /// Leaf variants are a no-op; grandchildren are never visited here —
    /// that recursion is the mapper's own responsibility.
    pub fn rewrite(&mut self, mapper: &mut dyn NodeMapper) {
        match &mut self.kind {
            ArgumentKind::Variable(_)
            | ArgumentKind::UnnamedVariable
            | ArgumentKind::Counter
            | ArgumentKind::StringConstant(_)
            | ArgumentKind::NumericConstant(_)
            | ArgumentKind::NilConstant
            | ArgumentKind::SubroutineArg(_) => {}
            ArgumentKind::IntrinsicFunctor { args, .. }
            | ArgumentKind::UserFunctor { args, .. }
            | ArgumentKind::RecordInit { args } => {
                let old = std::mem::take(args);
                *args = old
                    .into_iter()
                    .map(|a| mapper.map_argument(a))
                    .collect();
            }
            ArgumentKind::TypeCast { value, .. } => {
                replace_with(value, |v| Box::new(mapper.map_argument(*v)));
            }
            ArgumentKind::Aggregator { target, body, .. } => {
                if let Some(t) = target.take() {
                    *target = Some(Box::new(mapper.map_argument(*t)));
                }
                let old = std::mem::take(body);
                *body = old.into_iter().map(|l| mapper.map_literal(l)).collect();
            }
        }
    }

    /// Parse-compatible surface-syntax rendering.
    pub fn print(&self, symtab: &dyn SymbolTable) -> String {
        match &self.kind {
            ArgumentKind::Variable(name) => name.clone(),
            ArgumentKind::UnnamedVariable => "_".to_string(),
            ArgumentKind::Counter => "$".to_string(),
            ArgumentKind::StringConstant(id) => format!("\"{}\"", symtab.resolve(*id)),
            ArgumentKind::NumericConstant(n) => n.to_string(),
            ArgumentKind::NilConstant => "-".to_string(),
            ArgumentKind::IntrinsicFunctor { op, args } => {
                if args.len() == 2 {
                    if let Some(sym) = op.infix_symbol() {
                        return format!(
                            "({} {} {})",
                            args[0].print(symtab),
                            sym,
                            args[1].print(symtab)
                        );
                    }
                }
                let rendered: Vec<String> = args.iter().map(|a| a.print(symtab)).collect();
                format!("{}({})", op.prefix_name(), rendered.join(","))
            }
            ArgumentKind::UserFunctor { name, args } => {
                let rendered: Vec<String> = args.iter().map(|a| a.print(symtab)).collect();
                format!("@{}({})", name, rendered.join(","))
            }
            ArgumentKind::RecordInit { args } => {
                let rendered: Vec<String> = args.iter().map(|a| a.print(symtab)).collect();
                format!("[{}]", rendered.join(","))
            }
            ArgumentKind::TypeCast {
                value,
                target_type_name,
            } => format!("{} as {}", value.print(symtab), target_type_name),
            ArgumentKind::Aggregator { op, target, body } => {
                let target_str = target
                    .as_ref()
                    .map(|t| t.print(symtab))
                    .unwrap_or_default();
                let body_str: Vec<String> = body.iter().map(|l| l.print(symtab)).collect();
                format!("{} {{ {} : {} }}", op.as_str(), target_str, body_str.join(","))
            }
            ArgumentKind::SubroutineArg(idx) => format!("arg{idx}"),
        }
    }
}

impl StructuralEq for ArgumentKind {
    fn structural_eq(&self, other: &Self) -> bool {
        use ArgumentKind::*;
        match (self, other) {
            (Variable(a), Variable(b)) => a == b,
            (UnnamedVariable, UnnamedVariable) => true,
            (Counter, Counter) => true,
            (StringConstant(a), StringConstant(b)) => a == b,
            (NumericConstant(a), NumericConstant(b)) => a == b,
            (NilConstant, NilConstant) => true,
            (IntrinsicFunctor { op: oa, args: aa }, IntrinsicFunctor { op: ob, args: ab }) => {
                oa == ob && args_eq(aa, ab)
            }
            (UserFunctor { name: na, args: aa }, UserFunctor { name: nb, args: ab }) => {
                na == nb && args_eq(aa, ab)
            }
            (RecordInit { args: aa }, RecordInit { args: ab }) => args_eq(aa, ab),
            (
                TypeCast {
                    value: va,
                    target_type_name: ta,
                },
                TypeCast {
                    value: vb,
                    target_type_name: tb,
                },
            ) => va.equal(vb) && ta == tb,
            (
                Aggregator {
                    op: oa,
                    target: ta,
                    body: ba,
                },
                Aggregator {
                    op: ob,
                    target: tb,
                    body: bb,
                },
            ) => {
                oa == ob
                    && match (ta, tb) {
                        (Some(a), Some(b)) => a.equal(b),
                        (None, None) => true,
                        _ => false,
                    }
                    && literals_eq(ba, bb)
            }
            (SubroutineArg(a), SubroutineArg(b)) => a == b,
            _ => false,
        }
    }
}

pub(crate) fn args_eq(a: &[Argument], b: &[Argument]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equal(y))
}

pub(crate) fn literals_eq(a: &[Literal], b: &[Literal]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equal(y))
}
