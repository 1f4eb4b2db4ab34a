use super::Opcode;
use serde::{Deserialize, Serialize};

/// ## Operation stack entry
///
/// A calculation is kept in Reverse Polish order. Operators follow their
/// operands, so `3 × (4 + 5)` is held as
/// `[Operand(3), Operand(4), Operand(5), "+", "×"]`.
///
/// The `Display` text of an op is its display name. Display names are the
/// keys of the symbol table and the tokens of a saved program.
///
/// See <https://en.wikipedia.org/wiki/Reverse_Polish_notation>

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub enum Op {
    /// A literal number.
    Operand(f64),
    /// Named function of the top value.
    UnaryOperation(String, Opcode),
    /// Named function of the two top values.
    BinaryOperation(String, Opcode),
    /// Resolved against the variable table when evaluated.
    Variable(String),
    /// Named literal with a fixed value.
    Constant(String, f64),
}

impl std::fmt::Debug for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Op::*;
        match self {
            Operand(v) => write!(f, "OPERAND({})", v),
            UnaryOperation(s, code) => write!(f, "{}({})", code, s),
            BinaryOperation(s, code) => write!(f, "{}({})", code, s),
            Variable(s) => write!(f, "VARIABLE({})", s),
            Constant(s, v) => write!(f, "CONSTANT({}={})", s, v),
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Op::*;
        match self {
            Operand(v) => write!(f, "{}", v),
            UnaryOperation(s, _) => write!(f, "{}", s),
            BinaryOperation(s, _) => write!(f, "{}", s),
            Variable(s) => write!(f, "{}", s),
            Constant(s, _) => write!(f, "{}", s),
        }
    }
}
