//! Runtime values.

use std::fmt;

use arbor_ir::PrimType;

/// Runtime value produced by evaluation.
///
/// All variants are scalar, so `Value` is `Copy`; nothing in a tree ever
/// holds a heap allocation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// Boolean value.
    Bool(bool),
    /// Unit value (empty block).
    Unit,
}

impl Value {
    /// Type name for error messages.
    pub const fn type_name(self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
            Value::Unit => "unit",
        }
    }

    /// Zero value of a declared type: 0 for `int`, false for `bool`.
    pub const fn zero(ty: PrimType) -> Self {
        match ty {
            PrimType::Int => Value::Int(0),
            PrimType::Bool => Value::Bool(false),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Unit => write!(f, "()"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zero_values() {
        assert_eq!(Value::zero(PrimType::Int), Value::Int(0));
        assert_eq!(Value::zero(PrimType::Bool), Value::Bool(false));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(120).to_string(), "120");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Unit.to_string(), "()");
    }
}
