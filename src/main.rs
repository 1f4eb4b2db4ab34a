//! # RPN Calculator
//!
//! Interactive Reverse Polish calculator.
//!

fn main() {
    env_logger::init();
    calc::term::main();
}
