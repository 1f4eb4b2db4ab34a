use super::Op;

/// ## Operation stack
///
/// Ops are only ever appended; the last one is the top. The whole stack
/// is dropped on clear or replaced when a program is loaded.

#[derive(Default, Clone, PartialEq)]
pub struct Stack {
    vec: Vec<Op>,
}

impl std::fmt::Debug for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl Stack {
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn push(&mut self, op: Op) {
        self.vec.push(op)
    }
    pub fn ops(&self) -> &[Op] {
        &self.vec
    }
    pub fn replace(&mut self, ops: Vec<Op>) {
        self.vec = ops
    }
}
