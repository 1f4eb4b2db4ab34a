use super::{BinaryFn, Op, Operation, UnaryFn, Var};

/// ## Postfix evaluator
///
/// Reads the postfix ops right to left. Every step works on `ops[..end]`
/// and hands back the end of whatever it did not consume, so an operator
/// takes its right operand first and its left operand from what remains.
/// A result of `None` means the ops cannot be completed.

pub fn evaluate(ops: &[Op], vars: &Var) -> Option<f64> {
    let (result, _) = Evaluator { ops, vars }.evaluate(ops.len());
    result
}

struct Evaluator<'a> {
    ops: &'a [Op],
    vars: &'a Var,
}

/// Operators still waiting for an operand. `rest` is the end index just
/// below the operator, returned when an operand is missing.
enum Frame {
    Unary(UnaryFn, usize),
    BinaryRhs(BinaryFn, usize),
    BinaryLhs(BinaryFn, usize, f64),
}

impl<'a> Evaluator<'a> {
    /// Same walk as a recursive descent, with pending operators kept on
    /// `frames` so depth is bounded by memory instead of the thread stack.
    fn evaluate(&self, end: usize) -> (Option<f64>, usize) {
        let mut frames: Vec<Frame> = Vec::new();
        let mut cursor = end;
        loop {
            let mut result = self.descend(cursor, &mut frames);
            loop {
                match frames.pop() {
                    None => return result,
                    Some(Frame::Unary(func, rest)) => {
                        result = match result {
                            (Some(operand), remaining) => (Some(func(operand)), remaining),
                            (None, _) => (None, rest),
                        };
                    }
                    Some(Frame::BinaryRhs(func, rest)) => match result {
                        (Some(rhs), remaining) => {
                            frames.push(Frame::BinaryLhs(func, rest, rhs));
                            cursor = remaining;
                            break;
                        }
                        (None, _) => result = (None, rest),
                    },
                    Some(Frame::BinaryLhs(func, rest, rhs)) => {
                        result = match result {
                            (Some(lhs), remaining) => (Some(func(lhs, rhs)), remaining),
                            (None, _) => (None, rest),
                        };
                    }
                }
            }
        }
    }

    /// Pushes operators until a leaf (or the bottom) is reached.
    fn descend(&self, mut end: usize, frames: &mut Vec<Frame>) -> (Option<f64>, usize) {
        loop {
            if end == 0 {
                return (None, end);
            }
            let rest = end - 1;
            match &self.ops[rest] {
                Op::Operand(v) => return (Some(*v), rest),
                Op::UnaryOperation(_, code) => match Operation::unary(*code) {
                    Some(func) => frames.push(Frame::Unary(func, rest)),
                    None => return (None, rest),
                },
                Op::BinaryOperation(_, code) => match Operation::binary(*code) {
                    Some(func) => frames.push(Frame::BinaryRhs(func, rest)),
                    None => return (None, rest),
                },
                Op::Variable(symbol) => return (self.vars.fetch(symbol), rest),
                Op::Constant(_, v) => return (Some(*v), rest),
            }
            end = rest;
        }
    }
}
