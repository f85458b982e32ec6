//! Operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the type set is fixed, so pattern
//! matching gives exhaustiveness checking that trait objects would not.
//! All integer arithmetic is checked; overflow and division by zero are
//! structured errors, never wraps or panics.

use arbor_ir::{BinaryOp, CompareOp};

use crate::errors::{division_by_zero, integer_overflow, type_mismatch};
use crate::{EvalResult, Value};

/// Checked arithmetic operation with overflow handling.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result
        .map(Value::Int)
        .ok_or_else(|| integer_overflow(op_name))
}

/// Evaluate a comparison using direct pattern matching.
///
/// Both operands must already be evaluated, left before right; side
/// effect ordering is the caller's responsibility.
pub fn evaluate_compare(op: CompareOp, left: Value, right: Value) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Bool(match op {
            CompareOp::Gt => a > b,
            CompareOp::Lt => a < b,
            CompareOp::GtEq => a >= b,
            CompareOp::LtEq => a <= b,
            CompareOp::Eq => a == b,
            CompareOp::NotEq => a != b,
        })),
        (Value::Bool(a), Value::Bool(b)) => match op {
            CompareOp::Eq => Ok(Value::Bool(a == b)),
            CompareOp::NotEq => Ok(Value::Bool(a != b)),
            // Booleans have no ordering
            CompareOp::Gt | CompareOp::Lt | CompareOp::GtEq | CompareOp::LtEq => {
                Err(type_mismatch("int", "bool"))
            }
        },
        (left, right) => Err(type_mismatch(left.type_name(), right.type_name())),
    }
}

/// Evaluate an arithmetic operation using direct pattern matching.
pub fn evaluate_binary(op: BinaryOp, left: Value, right: Value) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => match op {
            BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
            BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
            BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
            BinaryOp::Div => {
                if b == 0 {
                    Err(division_by_zero())
                } else {
                    checked_arith(a.checked_div(b), "division")
                }
            }
        },
        (left, right) => {
            // Arithmetic is integer-only; report whichever side is off
            let got = if matches!(left, Value::Int(_)) {
                right.type_name()
            } else {
                left.type_name()
            };
            Err(type_mismatch("int", got))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EvalErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_int_comparisons() {
        assert_eq!(
            evaluate_compare(CompareOp::Gt, Value::Int(5), Value::Int(1)),
            Ok(Value::Bool(true))
        );
        assert_eq!(
            evaluate_compare(CompareOp::Lt, Value::Int(5), Value::Int(1)),
            Ok(Value::Bool(false))
        );
        assert_eq!(
            evaluate_compare(CompareOp::Eq, Value::Int(3), Value::Int(3)),
            Ok(Value::Bool(true))
        );
    }

    #[test]
    fn test_bool_equality_only() {
        assert_eq!(
            evaluate_compare(CompareOp::NotEq, Value::Bool(true), Value::Bool(false)),
            Ok(Value::Bool(true))
        );
        let err = evaluate_compare(CompareOp::Gt, Value::Bool(true), Value::Bool(false));
        assert!(matches!(
            err.map_err(|e| e.kind),
            Err(EvalErrorKind::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_mixed_types_mismatch() {
        let err = evaluate_compare(CompareOp::Eq, Value::Int(1), Value::Bool(true));
        assert_eq!(
            err.map_err(|e| e.kind),
            Err(EvalErrorKind::TypeMismatch {
                expected: "int".to_string(),
                got: "bool".to_string()
            })
        );
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(
            evaluate_binary(BinaryOp::Mul, Value::Int(6), Value::Int(7)),
            Ok(Value::Int(42))
        );
        let overflow = evaluate_binary(BinaryOp::Mul, Value::Int(i64::MAX), Value::Int(2));
        assert_eq!(
            overflow.map_err(|e| e.kind),
            Err(EvalErrorKind::IntegerOverflow {
                operation: "multiplication".to_string()
            })
        );
    }

    #[test]
    fn test_division_by_zero() {
        let err = evaluate_binary(BinaryOp::Div, Value::Int(1), Value::Int(0));
        assert_eq!(err.map_err(|e| e.kind), Err(EvalErrorKind::DivisionByZero));
    }

    #[test]
    fn test_arithmetic_rejects_bools() {
        let err = evaluate_binary(BinaryOp::Add, Value::Bool(true), Value::Int(1));
        assert_eq!(
            err.map_err(|e| e.kind),
            Err(EvalErrorKind::TypeMismatch {
                expected: "int".to_string(),
                got: "bool".to_string()
            })
        );
    }
}
