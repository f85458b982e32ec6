//! Arbor IR - Expression-tree representation for the Arbor evaluator.
//!
//! Trees are built programmatically through `ExprArena`'s constructor
//! methods, never parsed from text. The arena stores every node in a
//! flat `Vec` and hands out compact `u32` ids.
//!
//! # Architecture
//!
//! - `Name` / `StringInterner`: interned identifiers for variables
//! - `ExprId` / `ExprRange`: indices into the arena (no `Box<Expr>`)
//! - `Label`: identity token pairing a `Loop` with its `Break`s
//! - `ExprKind`: the closed set of node variants
//! - `display`: accessor-based tree formatting for introspection

mod arena;
pub mod display;
mod expr;
mod expr_id;
mod interner;
mod name;

pub use arena::ExprArena;
pub use expr::{BinaryOp, CompareOp, ExprKind, PrimType, VarDecl};
pub use expr_id::{DeclRange, ExprId, ExprRange, Label};
pub use interner::StringInterner;
pub use name::Name;
