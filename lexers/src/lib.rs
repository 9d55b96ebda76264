mod scanner;
mod infix_tokenizer;
mod postfix_tokenizer;

pub use scanner::Scanner;
pub use infix_tokenizer::InfixTokenizer;
pub use postfix_tokenizer::PostfixTokenizer;

use std::fmt;

/// The operator symbols both tokenizers recognize.
pub const OPERATORS: &[char] = &['^', '*', '/', '+', '-'];

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Token {
    Unknown(String),
    Number(String), // lexeme, kept verbatim
    Op(char),
    OParen,
    CParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Unknown(lexeme) | Token::Number(lexeme) => write!(f, "{}", lexeme),
            Token::Op(op) => write!(f, "{}", op),
            Token::OParen => write!(f, "("),
            Token::CParen => write!(f, ")"),
        }
    }
}
