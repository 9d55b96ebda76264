use thiserror::Error;

/// Everything that can go wrong converting or evaluating an expression.
///
/// Each variant carries the offending input (or token) so the message can
/// be shown to a user as is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RpnError {
    #[error("Invalid bracket order: {0}. Not enough open bracket")]
    UnmatchedCloseBracket(String),
    #[error("Invalid bracket order: {0}. Not enough closed bracket")]
    UnmatchedOpenBracket(String),
    #[error("Invalid character: {lexeme} in {input}")]
    InvalidCharacter { lexeme: String, input: String },
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
    #[error("Invalid postfix notation: {0}")]
    MalformedPostfix(String),
}
