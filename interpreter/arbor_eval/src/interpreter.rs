//! Tree-walking interpreter.
//!
//! One exhaustive match over `ExprKind` drives the whole walk. Operand
//! evaluation is strictly left-to-right, so side effects (assignment,
//! post-decrement) land in a deterministic order.
//!
//! Break propagation: `Break` raises a signal on the `Err` channel; it
//! unwinds through conditionals and blocks via `?` until the loop that
//! owns the label converts it into that loop's result. A signal for a
//! different label keeps unwinding — outer labels must be able to cut
//! through inner loops. A signal that escapes the root is reported as
//! `DanglingBreak`.

use tracing::{debug, trace};

use arbor_ir::{
    BinaryOp, DeclRange, ExprArena, ExprId, ExprKind, ExprRange, Label, Name, StringInterner,
};

use crate::errors::{dangling_break, integer_overflow, type_mismatch, unbound_variable};
use crate::operators::{evaluate_binary, evaluate_compare};
use crate::{ControlFlow, Environment, EvalError, EvalResult, Value};

/// Result of one loop body evaluation.
enum LoopAction {
    /// The loop's own label fired: the loop yields this value.
    Break(Value),
    /// Genuine error, or a signal for some other loop.
    Propagate(EvalError),
}

/// Route a body error to the loop owning `label`.
fn to_loop_action(label: Label, error: EvalError) -> LoopAction {
    match error.control_flow {
        Some(ControlFlow::Break(l, value)) if l == label => LoopAction::Break(value),
        _ => LoopAction::Propagate(error),
    }
}

/// Tree-walking interpreter for one expression tree.
///
/// Stateless across calls apart from the environment it owns; build a
/// new one (or use [`evaluate`]) for each top-level evaluation.
pub struct Interpreter<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    env: Environment,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with an empty environment.
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner) -> Self {
        Interpreter {
            arena,
            interner,
            env: Environment::new(),
        }
    }

    /// Define an initial binding in the base scope.
    pub fn define(&mut self, name: Name, value: Value) {
        self.env.define(name, value);
    }

    /// Read a variable's current value (for inspecting final state).
    pub fn get(&self, name: Name) -> Option<Value> {
        self.env.lookup(name)
    }

    /// Evaluate the tree rooted at `root`.
    ///
    /// A break signal escaping the root means no enclosing loop owned
    /// its label; it surfaces as `DanglingBreak`.
    pub fn run(&mut self, root: ExprId) -> EvalResult {
        debug!(exprs = self.arena.expr_count(), "evaluating tree");
        self.eval(root).map_err(|err| match err.control_flow {
            Some(ControlFlow::Break(label, _)) => dangling_break(label),
            None => err,
        })
    }

    fn eval(&mut self, id: ExprId) -> EvalResult {
        match self.arena.get_expr(id) {
            ExprKind::Int(v) => Ok(Value::Int(v)),
            ExprKind::Bool(v) => Ok(Value::Bool(v)),

            ExprKind::Ident(name) => self.lookup(name),

            ExprKind::Compare { op, left, right } => {
                // Left fully evaluated before right
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                evaluate_compare(op, lhs, rhs)
            }

            ExprKind::Binary { op, left, right } => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                evaluate_binary(op, lhs, rhs)
            }

            ExprKind::Assign { target, value } => {
                let value = self.eval(value)?;
                self.assign(target, value)?;
                Ok(value)
            }

            ExprKind::MulAssign { target, value } => {
                let rhs = self.eval(value)?;
                let current = self.lookup(target)?;
                let product = evaluate_binary(BinaryOp::Mul, current, rhs)?;
                self.assign(target, product)?;
                Ok(product)
            }

            ExprKind::PostDecrement(target) => {
                let current = self.lookup(target)?;
                let Value::Int(n) = current else {
                    return Err(type_mismatch("int", current.type_name()));
                };
                let next = n
                    .checked_sub(1)
                    .ok_or_else(|| integer_overflow("decrement"))?;
                self.assign(target, Value::Int(next))?;
                // The pre-decrement value is the expression's value
                Ok(Value::Int(n))
            }

            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => match self.eval(cond)? {
                Value::Bool(true) => self.eval(then_branch),
                Value::Bool(false) => self.eval(else_branch),
                other => Err(type_mismatch("bool", other.type_name())),
            },

            ExprKind::Loop { label, body } => self.eval_loop(label, body),

            ExprKind::Break { label, value } => {
                let value = self.eval(value)?;
                Err(EvalError::break_signal(label, value))
            }

            ExprKind::Block { decls, stmts } => self.eval_block(decls, stmts),
        }
    }

    /// Evaluate a loop expression.
    ///
    /// No implicit termination: only a break for this loop's label ends
    /// the loop. A body with no reachable break never terminates; that
    /// is the caller's tree, not this evaluator's, to fix.
    fn eval_loop(&mut self, label: Label, body: ExprId) -> EvalResult {
        loop {
            match self.eval(body) {
                Ok(_) => {}
                Err(err) => match to_loop_action(label, err) {
                    LoopAction::Break(value) => {
                        trace!(%label, %value, "loop break");
                        return Ok(value);
                    }
                    LoopAction::Propagate(err) => return Err(err),
                },
            }
        }
    }

    /// Evaluate a block: fresh scope, declared variables at zero
    /// values, statements in order, last statement's value out.
    fn eval_block(&mut self, decls: DeclRange, stmts: ExprRange) -> EvalResult {
        let arena = self.arena;
        self.env.push_scope();
        for decl in arena.get_decls(decls) {
            self.env.define(decl.name, Value::zero(decl.ty));
        }
        let mut result = Value::Unit;
        for &stmt in arena.get_expr_list(stmts) {
            match self.eval(stmt) {
                Ok(value) => result = value,
                Err(err) => {
                    // A signal or error skips the remaining statements
                    self.env.pop_scope();
                    return Err(err);
                }
            }
        }
        self.env.pop_scope();
        Ok(result)
    }

    fn lookup(&self, name: Name) -> EvalResult {
        self.env
            .lookup(name)
            .ok_or_else(|| unbound_variable(self.interner.lookup(name)))
    }

    fn assign(&mut self, name: Name, value: Value) -> Result<(), EvalError> {
        self.env
            .assign(name, value)
            .map_err(|_| unbound_variable(self.interner.lookup(name)))
    }
}

/// Evaluate the tree rooted at `root` against fresh initial bindings.
///
/// This is the public entry point: it builds a fresh environment from
/// `initial_bindings`, walks the tree, and returns the resulting value
/// or the first error.
pub fn evaluate(
    arena: &ExprArena,
    interner: &StringInterner,
    root: ExprId,
    initial_bindings: impl IntoIterator<Item = (Name, Value)>,
) -> EvalResult {
    let mut interp = Interpreter::new(arena, interner);
    for (name, value) in initial_bindings {
        interp.define(name, value);
    }
    interp.run(root)
}
