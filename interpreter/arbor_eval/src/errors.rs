//! Structured evaluation errors and control-flow signals.
//!
//! Every error kind carries structured data, so callers match on the
//! kind instead of parsing message strings. Factory functions populate
//! both `kind` and `message`; the `Display` impl on the kind produces
//! the same text the factories store.
//!
//! Break is not an error: it rides the `Err` channel as an explicit
//! signal (`control_flow`) checked by every composite evaluator, and is
//! consumed by the loop owning its label. Only a signal that escapes
//! the root evaluation surfaces to the caller, as `DanglingBreak`.

use std::fmt;

use arbor_ir::Label;

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Control flow signal propagated up the call stack to the loop that
/// owns the label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlFlow {
    /// Break from the loop owning `Label`, delivering a value.
    Break(Label, Value),
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// A variable reference or assignment target with no binding in any
    /// enclosing scope.
    UnboundVariable { name: String },
    /// Operand type disagreement.
    TypeMismatch { expected: String, got: String },
    /// A break signal whose label no enclosing loop owns.
    DanglingBreak { label: Label },
    /// Checked integer arithmetic overflowed.
    IntegerOverflow { operation: String },
    /// Division by zero.
    DivisionByZero,
    /// Internal control-flow carrier (never surfaced to callers).
    Signal,
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundVariable { name } => write!(f, "unbound variable: {name}"),
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::DanglingBreak { label } => {
                write!(f, "break:{label} has no enclosing loop owning {label}")
            }
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::Signal => write!(f, "control flow signal"),
        }
    }
}

/// Evaluation error.
///
/// A node either fully evaluates to a `Value` or the whole evaluation
/// aborts with one of these; nothing is retried internally.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message (equals `kind.to_string()` for
    /// factory-created errors).
    pub message: String,
    /// If this is a break signal in flight, the signal.
    pub control_flow: Option<ControlFlow>,
}

impl EvalError {
    /// Create an error from a structured kind.
    ///
    /// Used internally by factory functions.
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            control_flow: None,
        }
    }

    /// Create a break signal for `label` carrying `value`.
    pub fn break_signal(label: Label, value: Value) -> Self {
        Self {
            kind: EvalErrorKind::Signal,
            message: format!("break:{label}"),
            control_flow: Some(ControlFlow::Break(label, value)),
        }
    }

    /// Check if this error is a control flow signal.
    #[inline]
    pub fn is_control_flow(&self) -> bool {
        self.control_flow.is_some()
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EvalError {}

// Factory functions

/// Unbound variable reference or assignment target.
#[cold]
pub fn unbound_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundVariable {
        name: name.to_string(),
    })
}

/// Operand type mismatch.
#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

/// Break signal that escaped the root evaluation.
#[cold]
pub fn dangling_break(label: Label) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DanglingBreak { label })
}

/// Integer overflow in a checked operation.
#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

/// Division by zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Kind → message round-trip

    #[test]
    fn unbound_variable_has_correct_kind() {
        let err = unbound_variable("missing");
        assert_eq!(
            err.kind,
            EvalErrorKind::UnboundVariable {
                name: "missing".to_string()
            }
        );
        assert_eq!(err.message, "unbound variable: missing");
    }

    #[test]
    fn type_mismatch_has_correct_kind() {
        let err = type_mismatch("bool", "int");
        assert_eq!(
            err.kind,
            EvalErrorKind::TypeMismatch {
                expected: "bool".to_string(),
                got: "int".to_string()
            }
        );
        assert_eq!(err.message, "type mismatch: expected bool, got int");
    }

    #[test]
    fn dangling_break_has_correct_kind() {
        let label = Label::from_raw(3);
        let err = dangling_break(label);
        assert_eq!(err.kind, EvalErrorKind::DanglingBreak { label });
        assert_eq!(err.message, "break:L3 has no enclosing loop owning L3");
    }

    #[test]
    fn integer_overflow_has_correct_kind() {
        let err = integer_overflow("multiplication");
        assert_eq!(
            err.kind,
            EvalErrorKind::IntegerOverflow {
                operation: "multiplication".to_string()
            }
        );
        assert_eq!(err.message, "integer overflow in multiplication");
    }

    #[test]
    fn kind_display_matches_message() {
        let errors = vec![
            unbound_variable("x"),
            type_mismatch("int", "bool"),
            dangling_break(Label::from_raw(0)),
            integer_overflow("decrement"),
            division_by_zero(),
        ];
        for err in &errors {
            assert_eq!(
                err.message,
                err.kind.to_string(),
                "message/kind mismatch for {:?}",
                err.kind
            );
        }
    }

    // Control flow signals

    #[test]
    fn break_signal_is_control_flow() {
        let err = EvalError::break_signal(Label::from_raw(1), Value::Int(42));
        assert!(err.is_control_flow());
        assert_eq!(
            err.control_flow,
            Some(ControlFlow::Break(Label::from_raw(1), Value::Int(42)))
        );
    }

    #[test]
    fn factory_errors_are_not_control_flow() {
        assert!(!division_by_zero().is_control_flow());
        assert!(!unbound_variable("x").is_control_flow());
    }
}
