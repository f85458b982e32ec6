//! Demonstration tree builders.
//!
//! Two canonical trees: the counting-down factorial loop and a small
//! comparison used to show node-by-node decomposition.

use arbor_eval::{EvalError, Interpreter, Value};
use arbor_ir::display::expr_to_string;
use arbor_ir::{CompareOp, ExprArena, ExprId, ExprKind, Name, PrimType, StringInterner, VarDecl};

/// The factorial tree and everything needed to run it.
///
/// ```text
/// { int result;
///   (result = 1);
///   loop:L0 if (value > 1) then (result *= value--) else break:L0 result }
/// ```
///
/// `value` is the free variable; it is bound when the tree is run.
pub struct FactorialProgram {
    arena: ExprArena,
    interner: StringInterner,
    root: ExprId,
    value: Name,
}

/// Result of one factorial run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FactorialOutcome {
    /// The value the loop broke with.
    pub result: Value,
    /// Where the counter landed after the loop.
    pub final_value: Option<Value>,
}

impl FactorialProgram {
    /// Build the factorial tree.
    pub fn build() -> Self {
        let mut interner = StringInterner::new();
        let mut arena = ExprArena::new();

        let value = interner.intern("value");
        let result = interner.intern("result");
        let label = arena.fresh_label();

        let one = arena.int(1);
        let init = arena.assign(result, one);

        let v = arena.ident(value);
        let limit = arena.int(1);
        let cond = arena.compare(CompareOp::Gt, v, limit);

        let dec = arena.post_decrement(value);
        let multiply = arena.mul_assign(result, dec);

        let r = arena.ident(result);
        let exit = arena.break_(label, r);

        let body = arena.if_else(cond, multiply, exit);
        let looped = arena.loop_(label, body);

        let root = arena.block(
            [VarDecl {
                name: result,
                ty: PrimType::Int,
            }],
            [init, looped],
        );

        FactorialProgram {
            arena,
            interner,
            root,
            value,
        }
    }

    /// Render the whole tree as text.
    pub fn render(&self) -> String {
        expr_to_string(&self.arena, &self.interner, self.root)
    }

    /// Run the tree with the counter bound to `n`.
    pub fn run(&self, n: i64) -> Result<FactorialOutcome, EvalError> {
        let mut interp = Interpreter::new(&self.arena, &self.interner);
        interp.define(self.value, Value::Int(n));
        let result = interp.run(self.root)?;
        Ok(FactorialOutcome {
            result,
            final_value: interp.get(self.value),
        })
    }
}

/// A comparison node pulled apart for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decomposition {
    /// The whole expression, rendered.
    pub expression: String,
    /// Left operand, rendered.
    pub left: String,
    /// Operator symbol.
    pub operator: &'static str,
    /// Right operand, rendered.
    pub right: String,
}

/// Pull a comparison node apart into its rendered pieces.
///
/// Returns `None` when the node is not a comparison.
pub fn decompose(arena: &ExprArena, interner: &StringInterner, id: ExprId) -> Option<Decomposition> {
    match arena.get_expr(id) {
        ExprKind::Compare { op, left, right } => Some(Decomposition {
            expression: expr_to_string(arena, interner, id),
            left: expr_to_string(arena, interner, left),
            operator: op.as_symbol(),
            right: expr_to_string(arena, interner, right),
        }),
        _ => None,
    }
}

/// Build the `(num < 5)` comparison and decompose it.
pub fn decompose_demo() -> Option<Decomposition> {
    let mut interner = StringInterner::new();
    let mut arena = ExprArena::new();

    let num = interner.intern("num");
    let n = arena.ident(num);
    let five = arena.int(5);
    let root = arena.compare(CompareOp::Lt, n, five);

    decompose(&arena, &interner, root)
}
