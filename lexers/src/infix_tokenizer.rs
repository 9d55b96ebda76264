#![deny(warnings)]

use crate::scanner::Scanner;
use crate::Token;

/// Splits infix text such as `"(3 + 2) * 3"` into tokens.
///
/// Whitespace only separates tokens. A character that can't start a
/// number, operator or bracket comes out as `Token::Unknown`.
pub struct InfixTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item=char>> InfixTokenizer<I> {
    pub fn new(source: I) -> Self {
        InfixTokenizer{src: Scanner::new(source)}
    }

    fn get_token(&mut self) -> Option<Token> {
        self.src.ignore_ws();
        if let Some(num) = self.src.scan_number() {
            Some(Token::Number(num))
        } else if let Some(op) = self.src.scan_operator() {
            Some(Token::Op(op))
        } else if self.src.accept(&'(').is_some() {
            self.src.ignore();
            Some(Token::OParen)
        } else if self.src.accept(&')').is_some() {
            self.src.ignore();
            Some(Token::CParen)
        } else if self.src.next().is_some() {
            Some(Token::Unknown(self.src.extract_string()))
        } else {
            None
        }
    }
}

impl<'a> InfixTokenizer<std::str::Chars<'a>> {
    pub fn from_str(source: &'a str) -> Self {
        Self::new(source.chars())
    }
}

impl<I: Iterator<Item=char>> Iterator for InfixTokenizer<I> {
    type Item = Token;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

///////////////////////////////////////////////////////////////////////////////
