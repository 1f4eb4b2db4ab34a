/*!
## Rust Machine Module

This Rust module is the Reverse Polish expression engine: an operation
stack, its evaluator and the infix printer for the same stack.

*/

mod engine;
mod eval;
mod listing;
mod op;
mod opcode;
mod operation;
mod program;
mod stack;
mod symbol;
mod var;

#[cfg(test)]
mod tests;

pub use engine::Engine;
pub use op::Op;
pub use opcode::Opcode;
pub use operation::BinaryFn;
pub use operation::Operation;
pub use operation::UnaryFn;
pub use program::Program;
pub use stack::Stack;
pub use symbol::Symbols;
pub use var::Var;
