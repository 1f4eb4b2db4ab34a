use super::Opcode;

pub type UnaryFn = fn(f64) -> f64;
pub type BinaryFn = fn(f64, f64) -> f64;

/// ## Function table
///
/// Binary functions take `(lhs, rhs)` where `lhs` is the operand pushed
/// first and `rhs` is the one that was on top of the stack.

pub struct Operation {}

impl Operation {
    pub fn unary(opcode: Opcode) -> Option<UnaryFn> {
        use Opcode::*;
        match opcode {
            Sin => Some(Operation::sine),
            Cos => Some(Operation::cosine),
            Sqrt => Some(Operation::square_root),
            Neg => Some(Operation::negate),
            Mul | Add | Sub | Div => None,
        }
    }

    pub fn binary(opcode: Opcode) -> Option<BinaryFn> {
        use Opcode::*;
        match opcode {
            Mul => Some(Operation::multiply),
            Add => Some(Operation::sum),
            Sub => Some(Operation::subtract),
            Div => Some(Operation::divide),
            Sin | Cos | Sqrt | Neg => None,
        }
    }

    pub fn sine(val: f64) -> f64 {
        val.sin()
    }

    pub fn cosine(val: f64) -> f64 {
        val.cos()
    }

    pub fn square_root(val: f64) -> f64 {
        val.sqrt()
    }

    pub fn negate(val: f64) -> f64 {
        val * -1.0
    }

    pub fn multiply(lhs: f64, rhs: f64) -> f64 {
        lhs * rhs
    }

    pub fn sum(lhs: f64, rhs: f64) -> f64 {
        lhs + rhs
    }

    pub fn subtract(lhs: f64, rhs: f64) -> f64 {
        lhs - rhs
    }

    /// IEEE division; a zero `rhs` gives an infinity or NaN.
    pub fn divide(lhs: f64, rhs: f64) -> f64 {
        lhs / rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_order() {
        assert_eq!(Operation::subtract(5.0, 3.0), 2.0);
        assert_eq!(Operation::divide(10.0, 2.0), 5.0);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Operation::divide(1.0, 0.0), f64::INFINITY);
        assert_eq!(Operation::divide(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(Operation::divide(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_each_opcode_in_one_table() {
        use Opcode::*;
        for opcode in &[Sin, Cos, Sqrt, Neg] {
            assert!(Operation::unary(*opcode).is_some());
            assert!(Operation::binary(*opcode).is_none());
        }
        for opcode in &[Mul, Add, Sub, Div] {
            assert!(Operation::unary(*opcode).is_none());
            assert!(Operation::binary(*opcode).is_some());
        }
    }
}
