//! Property-based tests for the evaluator.
//!
//! These tests use proptest to build factorial-shaped trees over random
//! inputs and verify:
//! 1. Correctness: the loop computes the same product as a straight fold
//! 2. Determinism: re-evaluating the same tree yields identical results
//! 3. Side-effect accounting: the counter variable always lands on 1

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::disallowed_types,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use arbor_eval::{evaluate, Interpreter, Value};
use arbor_ir::{CompareOp, ExprArena, ExprId, Name, PrimType, StringInterner, VarDecl};
use proptest::prelude::*;

/// Build the counting-down product tree:
///
/// ```text
/// { int result;
///   (result = 1);
///   loop:L if (value > 1) then (result *= value--) else break:L result }
/// ```
fn factorial_tree(arena: &mut ExprArena, interner: &mut StringInterner) -> (ExprId, Name) {
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
    (root, value)
}

/// Reference product: n * (n-1) * ... * 2, or 1 when n <= 1.
fn reference_factorial(n: i64) -> i64 {
    (2..=n).product::<i64>().max(1)
}

proptest! {
    #[test]
    fn factorial_matches_reference(n in 0i64..=20) {
        let mut interner = StringInterner::new();
        let mut arena = ExprArena::new();
        let (root, value) = factorial_tree(&mut arena, &mut interner);

        let result = evaluate(&arena, &interner, root, [(value, Value::Int(n))]);
        prop_assert_eq!(result, Ok(Value::Int(reference_factorial(n))));
    }

    #[test]
    fn evaluation_is_deterministic(n in 0i64..=20) {
        let mut interner = StringInterner::new();
        let mut arena = ExprArena::new();
        let (root, value) = factorial_tree(&mut arena, &mut interner);

        let first = evaluate(&arena, &interner, root, [(value, Value::Int(n))]);
        let second = evaluate(&arena, &interner, root, [(value, Value::Int(n))]);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn counter_always_lands_on_one(n in 1i64..=20) {
        let mut interner = StringInterner::new();
        let mut arena = ExprArena::new();
        let (root, value) = factorial_tree(&mut arena, &mut interner);

        let mut interp = Interpreter::new(&arena, &interner);
        interp.define(value, Value::Int(n));
        prop_assert!(interp.run(root).is_ok());
        // Every run decrements until the guard fails at 1
        prop_assert_eq!(interp.get(value), Some(Value::Int(1)));
    }

    #[test]
    fn comparison_agrees_with_native_ordering(a in any::<i64>(), b in any::<i64>()) {
        let interner = StringInterner::new();
        let mut arena = ExprArena::new();

        let left = arena.int(a);
        let right = arena.int(b);
        let root = arena.compare(CompareOp::Lt, left, right);

        let result = evaluate(&arena, &interner, root, []);
        prop_assert_eq!(result, Ok(Value::Bool(a < b)));
    }
}
