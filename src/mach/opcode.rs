use serde::{Deserialize, Serialize};

/// ## Built-in function identifiers
///
/// An `Opcode` names a pure function in the [`Operation`](super::Operation)
/// table. Ops carry the opcode instead of the function itself so they stay
/// comparable and serializable.

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    // *** Unary
    Sin,
    Cos,
    Sqrt,
    Neg,

    // *** Binary
    Mul,
    Add,
    Sub,
    Div,
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Sin => write!(f, "SIN"),
            Cos => write!(f, "COS"),
            Sqrt => write!(f, "SQRT"),
            Neg => write!(f, "NEG"),
            Mul => write!(f, "MUL"),
            Add => write!(f, "ADD"),
            Sub => write!(f, "SUB"),
            Div => write!(f, "DIV"),
        }
    }
}
