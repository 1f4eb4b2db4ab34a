use super::{eval, listing, Op, Program, Stack, Symbols, Var};
use crate::lang::NumberFormat;
use log::{debug, trace};

/// ## Expression engine
///
/// Owns the operation stack, the symbol table and the variable table.
/// Every push evaluates the whole stack again and returns the result.
///
/// ```
/// use calc::mach::Engine;
/// let mut engine = Engine::new();
/// engine.push_operand(5.0);
/// engine.push_operand(3.0);
/// assert_eq!(engine.perform_operation("−"), Some(2.0));
/// assert_eq!(engine.description(), "5 − 3");
/// ```

#[derive(Debug, Clone, Default)]
pub struct Engine {
    stack: Stack,
    symbols: Symbols,
    vars: Var,
    format: NumberFormat,
}

impl Engine {
    pub fn new() -> Engine {
        Engine::default()
    }

    pub fn with_format(format: NumberFormat) -> Engine {
        Engine {
            format,
            ..Engine::default()
        }
    }

    pub fn push_operand(&mut self, operand: f64) -> Option<f64> {
        trace!("push operand {}", operand);
        self.stack.push(Op::Operand(operand));
        self.evaluate()
    }

    /// The variable does not need a value yet; it is looked up on every
    /// evaluation.
    pub fn push_variable(&mut self, symbol: &str) -> Option<f64> {
        trace!("push variable {}", symbol);
        self.stack.push(Op::Variable(symbol.to_string()));
        self.evaluate()
    }

    /// Unknown names leave the stack alone and give `None`.
    pub fn perform_operation(&mut self, name: &str) -> Option<f64> {
        match self.symbols.get(name) {
            Some(op) => {
                trace!("perform {:?}", op);
                self.stack.push(op.clone());
                self.evaluate()
            }
            None => {
                debug!("unknown operation {:?} ignored", name);
                None
            }
        }
    }

    /// Stores a variable and evaluates again.
    pub fn set_variable(&mut self, symbol: &str, value: f64) -> Option<f64> {
        self.vars.store(symbol, value);
        self.evaluate()
    }

    pub fn evaluate(&self) -> Option<f64> {
        let result = eval::evaluate(self.stack.ops(), &self.vars);
        trace!("evaluate {:?} => {:?}", self.stack, result);
        result
    }

    /// Empties the stack and the variables. Symbols are kept.
    pub fn clear(&mut self) {
        self.stack.clear();
        self.vars.clear();
    }

    pub fn description(&self) -> String {
        listing::describe(self.stack.ops())
    }

    pub fn program(&self) -> Program {
        self.stack
            .ops()
            .iter()
            .map(|op| match op {
                Op::Operand(v) => self.format.format(*v),
                _ => op.to_string(),
            })
            .collect()
    }

    /// Rebuilds the stack from `tokens`. Symbol names win over numbers and
    /// anything that is neither is skipped. Variables are not touched.
    pub fn set_program<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ops = Vec::new();
        for token in tokens {
            let token = token.as_ref();
            if let Some(op) = self.symbols.get(token) {
                ops.push(op.clone());
            } else if let Some(operand) = self.format.parse(token) {
                ops.push(Op::Operand(operand));
            } else {
                debug!("program token {:?} skipped", token);
            }
        }
        self.stack.replace(ops);
    }

    pub fn variables(&self) -> &Var {
        &self.vars
    }

    pub fn variables_mut(&mut self) -> &mut Var {
        &mut self.vars
    }

    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    pub fn number_format(&self) -> NumberFormat {
        self.format
    }

    pub fn ops(&self) -> &[Op] {
        self.stack.ops()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
