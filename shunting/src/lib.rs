//! Shunting-yard conversion of infix arithmetic into reverse polish
//! notation, and a stack machine that evaluates the result.
//!
//! ```
//! assert_eq!(shunting::convert("2 ^ 3 ^ 2").unwrap(), "2 3 2 ^ ^");
//! assert_eq!(shunting::evaluate("2 3 2 ^ ^").unwrap(), 512.0);
//! ```

pub use lexers::Token;

pub use error::RpnError;
pub use operators::{Assoc, Operator};
pub use parser::{convert, RpnExpr, ShuntingParser};
pub use rpneval::{evaluate, is_valid_rpn};

mod error;
pub mod operators;
pub mod parser;
#[cfg(test)]
mod parser_test;

mod rpneval;
mod rpnprint;
