//! Literal and clause nodes: atoms, negations, binary constraints, and the
//! clause that groups a head atom with a body.

use crate::argument::{args_eq, Argument};
use crate::config::PrintConfig;
use crate::node::{replace_with, ChildRef, NodeMapper, StructuralEq};
use crate::qualified_name::QualifiedName;
use crate::srcloc::SrcLoc;
use crate::symbol::SymbolTable;

/// Comparison operators for `BinaryConstraint`. Each has a printable symbol
/// and a dual (swap-lhs/rhs) operator — the dual is representable here even
/// though the core itself never needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CmpOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CmpOp::Eq => "=",
            CmpOp::Ne => "!=",
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
        }
    }

    /// The operator obtained by swapping its left and right operands.
    pub fn dual(self) -> CmpOp {
        match self {
            CmpOp::Eq => CmpOp::Eq,
            CmpOp::Ne => CmpOp::Ne,
            CmpOp::Lt => CmpOp::Gt,
            CmpOp::Le => CmpOp::Ge,
            CmpOp::Gt => CmpOp::Lt,
            CmpOp::Ge => CmpOp::Le,
        }
    }
}

/// `relation(arg₁, …, argₙ)`. Used both as a body literal (wrapped in
/// [`LiteralKind::Atom`]/[`LiteralKind::Negation`]) and as a clause head,
/// where it stands alone (a clause head can never be negated).
#[derive(Debug, Clone, Default)]
pub struct Atom {
    pub loc: SrcLoc,
    pub name: QualifiedName,
    pub args: Vec<Argument>,
}

impl Atom {
    pub fn new(loc: SrcLoc, name: QualifiedName, args: Vec<Argument>) -> Self {
        Atom { loc, name, args }
    }

    pub fn equal(&self, other: &Atom) -> bool {
        self.name == other.name && args_eq(&self.args, &other.args)
    }

    pub fn children(&self) -> Vec<ChildRef<'_>> {
        self.args.iter().map(ChildRef::Argument).collect()
    }

    pub fn rewrite(&mut self, mapper: &mut dyn NodeMapper) {
        let old = std::mem::take(&mut self.args);
        self.args = old.into_iter().map(|a| mapper.map_argument(a)).collect();
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }

    pub fn print(&self, symtab: &dyn SymbolTable) -> String {
        let rendered: Vec<String> = self.args.iter().map(|a| a.print(symtab)).collect();
        format!("{}({})", self.name, rendered.join(","))
    }
}

/// A body literal: a positive atom, a negated atom, or a binary constraint.
#[derive(Debug, Clone)]
pub struct Literal {
    pub loc: SrcLoc,
    pub kind: LiteralKind,
}

#[derive(Debug, Clone)]
pub enum LiteralKind {
    Atom(Atom),
    Negation(Atom),
    BinaryConstraint { op: CmpOp, lhs: Argument, rhs: Argument },
}

impl Literal {
    pub fn new(loc: SrcLoc, kind: LiteralKind) -> Self {
        Literal { loc, kind }
    }

    pub fn equal(&self, other: &Literal) -> bool {
        self.kind.structural_eq(&other.kind)
    }

    pub fn children(&self) -> Vec<ChildRef<'_>> {
        match &self.kind {
            LiteralKind::Atom(atom) | LiteralKind::Negation(atom) => vec![ChildRef::Atom(atom)],
            LiteralKind::BinaryConstraint { lhs, rhs, .. } => {
                vec![ChildRef::Argument(lhs), ChildRef::Argument(rhs)]
            }
        }
    }

    pub fn rewrite(&mut self, mapper: &mut dyn NodeMapper) {
        match &mut self.kind {
            LiteralKind::Atom(atom) | LiteralKind::Negation(atom) => {
                replace_with(atom, |a| mapper.map_atom(a));
            }
            LiteralKind::BinaryConstraint { lhs, rhs, .. } => {
                replace_with(lhs, |a| mapper.map_argument(a));
                replace_with(rhs, |a| mapper.map_argument(a));
            }
        }
    }

    pub fn print(&self, symtab: &dyn SymbolTable) -> String {
        match &self.kind {
            LiteralKind::Atom(atom) => atom.print(symtab),
            LiteralKind::Negation(atom) => format!("!{}", atom.print(symtab)),
            LiteralKind::BinaryConstraint { op, lhs, rhs } => {
                format!("{} {} {}", lhs.print(symtab), op.symbol(), rhs.print(symtab))
            }
        }
    }
}

impl StructuralEq for LiteralKind {
    fn structural_eq(&self, other: &Self) -> bool {
        use LiteralKind::*;
        match (self, other) {
            (Atom(a), Atom(b)) => a.equal(b),
            (Negation(a), Negation(b)) => a.equal(b),
            (
                BinaryConstraint { op: oa, lhs: la, rhs: ra },
                BinaryConstraint { op: ob, lhs: lb, rhs: rb },
            ) => oa == ob && la.equal(lb) && ra.equal(rb),
            _ => false,
        }
    }
}

/// `head :- body.` Body order is preserved as authored but is semantically
/// irrelevant to execution — the clause normaliser compares clauses as
/// multisets of elements, not ordered sequences.
#[derive(Debug, Clone)]
pub struct Clause {
    pub loc: SrcLoc,
    pub head: Atom,
    pub body: Vec<Literal>,
}

impl Clause {
    pub fn new(loc: SrcLoc, head: Atom, body: Vec<Literal>) -> Self {
        Clause { loc, head, body }
    }

    pub fn equal(&self, other: &Clause) -> bool {
        self.head.equal(&other.head) && crate::argument::literals_eq(&self.body, &other.body)
    }

    pub fn children(&self) -> Vec<ChildRef<'_>> {
        let mut out = Vec::with_capacity(self.body.len() + 1);
        out.push(ChildRef::Atom(&self.head));
        out.extend(self.body.iter().map(ChildRef::Literal));
        out
    }

    pub fn rewrite(&mut self, mapper: &mut dyn NodeMapper) {
        replace_with(&mut self.head, |a| mapper.map_atom(a));
        let old = std::mem::take(&mut self.body);
        self.body = old.into_iter().map(|l| mapper.map_literal(l)).collect();
    }

    pub fn print(&self, symtab: &dyn SymbolTable) -> String {
        if self.body.is_empty() {
            return format!("{}.", self.head.print(symtab));
        }
        let body: Vec<String> = self.body.iter().map(|l| l.print(symtab)).collect();
        format!("{} :- {}.", self.head.print(symtab), body.join(", "))
    }

    /// As [`Clause::print`], but honouring [`PrintConfig::elide_srcloc`]: when
    /// `false`, appends the clause's own `SrcLoc` as a trailing comment for
    /// debugging a pass's rewrites. `SrcLoc` still never participates in
    /// `equal` — this only affects diagnostic rendering.
    pub fn print_with_config(&self, symtab: &dyn SymbolTable, config: &PrintConfig) -> String {
        let rendered = self.print(symtab);
        if config.elide_srcloc {
            rendered
        } else {
            format!("{rendered} % {}", self.loc)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::ArgumentKind;
    use crate::symbol::InMemorySymbolTable;

    fn var(name: &str) -> Argument {
        Argument::new(SrcLoc::unknown(), ArgumentKind::Variable(name.to_string()))
    }

    fn atom(rel: &str, args: Vec<Argument>) -> Atom {
        Atom::new(SrcLoc::unknown(), QualifiedName::single(rel), args)
    }

    #[test]
    fn cmp_op_dual_round_trips() {
        for op in [CmpOp::Eq, CmpOp::Ne, CmpOp::Lt, CmpOp::Le, CmpOp::Gt, CmpOp::Ge] {
            assert_eq!(op.dual().dual() as u8, op as u8);
        }
    }

    #[test]
    fn negation_equal_ignores_loc() {
        let a = Literal::new(SrcLoc::unknown(), LiteralKind::Negation(atom("S", vec![var("X")])));
        let b = Literal::new(
            SrcLoc::new(1, 2, 3, 4, 5),
            LiteralKind::Negation(atom("S", vec![var("X")])),
        );
        assert!(a.equal(&b));
    }

    #[test]
    fn clause_print_matches_surface_syntax() {
        let symtab = InMemorySymbolTable::new();
        let clause = Clause::new(
            SrcLoc::unknown(),
            atom("R", vec![var("X")]),
            vec![Literal::new(SrcLoc::unknown(), LiteralKind::Atom(atom("S", vec![var("X")])))],
        );
        assert_eq!(clause.print(&symtab), "R(X) :- S(X).");
    }

    #[test]
    fn print_with_config_elides_srcloc_by_default() {
        use crate::config::PrintConfig;

        let symtab = InMemorySymbolTable::new();
        let clause = Clause::new(
            SrcLoc::new(0, 3, 1, 3, 10),
            atom("R", vec![var("X")]),
            vec![Literal::new(SrcLoc::unknown(), LiteralKind::Atom(atom("S", vec![var("X")])))],
        );

        assert_eq!(clause.print_with_config(&symtab, &PrintConfig::default()), clause.print(&symtab));

        let verbose = PrintConfig { elide_srcloc: false };
        let rendered = clause.print_with_config(&symtab, &verbose);
        assert!(rendered.starts_with("R(X) :- S(X)."));
        assert!(rendered.contains('%'));
    }

    #[test]
    fn clone_then_rewrite_leaves_original_untouched() {
        let clause = Clause::new(
            SrcLoc::unknown(),
            atom("R", vec![var("X")]),
            vec![Literal::new(SrcLoc::unknown(), LiteralKind::Atom(atom("S", vec![var("X")])))],
        );
        let mut clone = clause.clone();
        struct RenameXToZ;
        impl NodeMapper for RenameXToZ {
            fn map_argument(&mut self, arg: Argument) -> Argument {
                match &arg.kind {
                    ArgumentKind::Variable(n) if n == "X" => {
                        Argument::new(arg.loc, ArgumentKind::Variable("Z".into()))
                    }
                    _ => arg,
                }
            }

            fn map_atom(&mut self, mut atom: Atom) -> Atom {
                atom.rewrite(self);
                atom
            }

            fn map_literal(&mut self, mut lit: Literal) -> Literal {
                lit.rewrite(self);
                lit
            }
        }
        clone.rewrite(&mut RenameXToZ);
        assert!(!clone.equal(&clause));
        assert!(matches!(&clause.head.args[0].kind, ArgumentKind::Variable(n) if n == "X"));
    }
}
