//! # RPN Calculator
//!
//! A Reverse Polish calculator engine. Operands and operations are pushed
//! on a stack, the stack is evaluated after every push, and the same stack
//! is printed back as ordinary infix expressions.
//!
//! ```
//! use calc::mach::Engine;
//! let mut engine = Engine::new();
//! engine.push_operand(3.0);
//! engine.push_operand(4.0);
//! engine.perform_operation("+");
//! engine.push_operand(2.0);
//! assert_eq!(engine.perform_operation("×"), Some(14.0));
//! assert_eq!(engine.description(), "(3 + 4) × 2");
//! ```
//!
//! Run the executable for an interactive calculator. Words on a line are
//! applied left to right; the display and the expression follow each line.
//! ```text
//! > 3 4 + 2 ×
//! 14
//! (3 + 4) × 2
//! > 14 →m clear m √
//!  
//! √(m)
//! ```
//! `clear` also forgets variables, so `m` has no value on the last line.

pub mod lang;
pub mod mach;
pub mod term;
