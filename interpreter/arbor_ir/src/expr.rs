//! Expression node variants and operators.
//!
//! The node set is a closed sum type: the evaluator dispatches with a
//! single exhaustive match, so adding a variant is a compile error until
//! every consumer handles it. All children are arena ids, not boxes.

use std::fmt;

use crate::{DeclRange, ExprId, ExprRange, Label, Name};

/// Comparison operators. Always yield a boolean.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CompareOp {
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    GtEq,
    /// `<=`
    LtEq,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
}

impl CompareOp {
    /// Symbolic form, used in formatted trees and error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::GtEq => ">=",
            CompareOp::LtEq => "<=",
            CompareOp::Eq => "==",
            CompareOp::NotEq => "!=",
        }
    }
}

/// Integer arithmetic operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOp {
    /// Symbolic form, used in formatted trees and error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

/// Primitive type of a declared variable.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrimType {
    Int,
    Bool,
}

impl fmt::Display for PrimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimType::Int => write!(f, "int"),
            PrimType::Bool => write!(f, "bool"),
        }
    }
}

/// Variable declared by a `Block`.
///
/// Initialized to its type's zero value (0 / false) when the block's
/// scope is entered.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct VarDecl {
    pub name: Name,
    pub ty: PrimType,
}

/// Expression variants.
///
/// All children are indices into the owning `ExprArena`. Nodes are
/// immutable once allocated; all mutation during evaluation is confined
/// to the environment.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer constant: 42
    Int(i64),

    /// Boolean constant: true, false
    Bool(bool),

    /// Variable reference
    Ident(Name),

    /// Comparison: left op right
    Compare {
        op: CompareOp,
        left: ExprId,
        right: ExprId,
    },

    /// Integer arithmetic: left op right
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Assignment: target = value. Yields the stored value.
    Assign { target: Name, value: ExprId },

    /// Compound assignment: target *= value. Yields the new value.
    MulAssign { target: Name, value: ExprId },

    /// Post-decrement: target--. Yields the value prior to the decrement.
    PostDecrement(Name),

    /// Conditional: if cond then t else e. Exactly one branch evaluates.
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },

    /// Labeled loop: repeats body until a `Break` carrying `label` fires.
    Loop { label: Label, body: ExprId },

    /// Non-local exit: delivers value to the enclosing loop owning `label`.
    Break { label: Label, value: ExprId },

    /// Block: fresh scope, declared variables at zero values, statements
    /// in order. Yields the last statement's value (unit when empty).
    Block { decls: DeclRange, stmts: ExprRange },
}
