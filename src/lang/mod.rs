/*!
# Rust Language Module

Types shared by the engine and its callers: errors for the outer
surfaces and the decimal text of operands.

*/

#[macro_use]
mod error;
mod number;

pub use error::Error;
pub use error::ErrorCode;
pub use number::prettify;
pub use number::NumberFormat;
