use super::{Op, Opcode};
use std::collections::HashMap;

/// ## Known operations
///
/// Filled once by `Symbols::new()` and never changed afterwards.
/// Every entry is keyed by the display name of its op.

#[derive(Debug, Clone)]
pub struct Symbols {
    known: HashMap<String, Op>,
}

impl Default for Symbols {
    fn default() -> Self {
        Self::new()
    }
}

impl Symbols {
    pub fn new() -> Symbols {
        let mut symbols = Symbols {
            known: HashMap::new(),
        };
        symbols.learn(Op::UnaryOperation("sin".into(), Opcode::Sin));
        symbols.learn(Op::UnaryOperation("cos".into(), Opcode::Cos));
        symbols.learn(Op::UnaryOperation("√".into(), Opcode::Sqrt));
        symbols.learn(Op::UnaryOperation("±".into(), Opcode::Neg));
        symbols.learn(Op::BinaryOperation("×".into(), Opcode::Mul));
        symbols.learn(Op::BinaryOperation("+".into(), Opcode::Add));
        symbols.learn(Op::BinaryOperation("−".into(), Opcode::Sub));
        symbols.learn(Op::BinaryOperation("÷".into(), Opcode::Div));
        symbols.learn(Op::Constant("π".into(), std::f64::consts::PI));
        symbols
    }

    fn learn(&mut self, op: Op) {
        self.known.insert(op.to_string(), op);
    }

    pub fn get(&self, name: &str) -> Option<&Op> {
        self.known.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.known.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    /// Sorted for stable completion lists.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.known.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}
