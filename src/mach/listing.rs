use super::Op;
use crate::lang::prettify;

const MISSING: &str = "?";

/// Infix text for every expression on the stack, oldest first, joined
/// by commas. `[3, 4, +, 2, ×]` lists as `(3 + 4) × 2`.
pub fn describe(ops: &[Op]) -> String {
    prettify_expressions(identify_expressions(ops)).join(",")
}

/// Scans front to back, the opposite direction from evaluation.
fn identify_expressions(ops: &[Op]) -> Vec<String> {
    let mut expressions: Vec<String> = Vec::new();
    for op in ops {
        let expression = match op {
            Op::Operand(v) => prettify(*v),
            Op::UnaryOperation(symbol, _) => {
                let operand = expressions.pop().unwrap_or_else(|| MISSING.to_string());
                format!("{}({})", symbol, operand)
            }
            Op::BinaryOperation(symbol, _) => {
                let operand2 = expressions.pop().unwrap_or_else(|| MISSING.to_string());
                let operand1 = expressions.pop().unwrap_or_else(|| MISSING.to_string());
                format!("({} {} {})", operand1, symbol, operand2)
            }
            Op::Variable(symbol) | Op::Constant(symbol, _) => symbol.clone(),
        };
        expressions.push(expression);
    }
    expressions
}

/// Drops one outer pair of parentheses from each expression. Only the
/// first and last characters are tested, so `(a) + (b)` loses them too.
fn prettify_expressions(mut expressions: Vec<String>) -> Vec<String> {
    for expression in expressions.iter_mut() {
        if expression.starts_with('(') && expression.ends_with(')') {
            *expression = expression[1..expression.len() - 1].to_string();
        }
    }
    expressions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mach::Opcode;

    fn num(v: f64) -> Op {
        Op::Operand(v)
    }

    fn add() -> Op {
        Op::BinaryOperation("+".into(), Opcode::Add)
    }

    #[test]
    fn test_empty() {
        assert_eq!(describe(&[]), "");
    }

    #[test]
    fn test_outer_parens_stripped() {
        assert_eq!(describe(&[num(3.0), num(4.0), add()]), "3 + 4");
    }

    #[test]
    fn test_independent_expressions() {
        let ops = vec![num(3.0), num(4.0), add(), num(2.5), Op::Variable("x".into())];
        assert_eq!(describe(&ops), "3 + 4,2.5,x");
    }

    #[test]
    fn test_missing_left_operand() {
        assert_eq!(describe(&[num(4.0), add()]), "? + 4");
    }

    #[test]
    fn test_starved_operators() {
        assert_eq!(describe(&[add()]), "? + ?");
        let sin = Op::UnaryOperation("sin".into(), Opcode::Sin);
        assert_eq!(describe(&[sin]), "sin(?)");
    }

    #[test]
    fn test_loose_strip() {
        let ops = vec![
            num(1.0),
            num(2.0),
            add(),
            num(3.0),
            num(4.0),
            add(),
            Op::BinaryOperation("×".into(), Opcode::Mul),
        ];
        assert_eq!(describe(&ops), "(1 + 2) × (3 + 4)");
        let wrapped = vec![Op::Variable("(a)+(b)".into())];
        assert_eq!(describe(&wrapped), "a)+(b");
    }

    #[test]
    fn test_unary_not_stripped() {
        let ops = vec![num(9.0), Op::UnaryOperation("√".into(), Opcode::Sqrt)];
        assert_eq!(describe(&ops), "√(9)");
    }
}
