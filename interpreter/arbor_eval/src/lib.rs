#![deny(clippy::arithmetic_side_effects)]
//! Arbor Eval - Tree-walking evaluator for Arbor expression trees.
//!
//! Walks an `arbor_ir` tree against a mutable variable environment,
//! returning a single typed value or a structured error.
//!
//! # Architecture
//!
//! - `Environment`: variable scoping with a scope stack
//! - `evaluate_compare` / `evaluate_binary`: direct enum-based operator
//!   dispatch with checked integer arithmetic
//! - `Interpreter`: one exhaustive match over `ExprKind`
//! - Break is an internal control-flow signal carried on `EvalError`,
//!   consumed by the loop owning its label; a signal that escapes the
//!   root becomes a `DanglingBreak` error
//!
//! The evaluator is stateless per call: each top-level evaluation owns a
//! fresh environment, and evaluation order is strictly left-to-right.

mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod value;

pub use environment::{AssignError, Environment, LocalScope, Scope};
pub use errors::{
    dangling_break, division_by_zero, integer_overflow, type_mismatch, unbound_variable,
    ControlFlow, EvalError, EvalErrorKind, EvalResult,
};
pub use interpreter::{evaluate, Interpreter};
pub use operators::{evaluate_binary, evaluate_compare};
pub use value::Value;
