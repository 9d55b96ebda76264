use std::fmt;
use std::ops::Deref;

use lexers::{InfixTokenizer, Token};
use log::debug;

use crate::error::RpnError;
use crate::operators;

/// A postfix token sequence. Displays as its tokens joined by single spaces.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct RpnExpr(pub Vec<Token>);

impl Deref for RpnExpr {
    type Target = [Token];
    fn deref(&self) -> &[Token] {
        &self.0
    }
}

impl fmt::Display for RpnExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let words = self.0.iter().map(|t| t.to_string()).collect::<Vec<_>>();
        write!(f, "{}", words.join(" "))
    }
}

// What came right before the current token. A '+' or '-' is a sign
// unless it follows something that produces a value.
#[derive(Clone, Copy, PartialEq, Debug)]
enum Prev {
    Start,
    Operand,
    Operator,
    OpenBracket,
}

impl Prev {
    fn makes_unary(self) -> bool {
        match self {
            Prev::Start | Prev::Operator | Prev::OpenBracket => true,
            Prev::Operand => false,
        }
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RpnExpr, RpnError> {
        Self::parse(&mut InfixTokenizer::from_str(expr), expr)
    }

    /// Runs shunting-yard over `lex`. `source` is only used for error messages.
    pub fn parse(lex: &mut impl Iterator<Item = Token>, source: &str) -> Result<RpnExpr, RpnError> {
        let mut out: Vec<Token> = Vec::new();
        let mut stack: Vec<Token> = Vec::new();
        let mut prev = Prev::Start;

        for token in lex {
            match token {
                Token::Number(_) => {
                    out.push(token);
                    prev = Prev::Operand;
                }
                Token::Op(symbol) => {
                    let op = operators::lookup(symbol)
                        .ok_or_else(|| RpnError::UnknownOperator(symbol.to_string()))?;
                    if op.can_be_unary() && prev.makes_unary() {
                        // a sign becomes a binary op against a synthetic zero
                        out.push(Token::Number(format!("0")));
                    } else {
                        while let Some(&Token::Op(top)) = stack.last() {
                            match operators::lookup(top) {
                                Some(top) if top.yields_to(op) => out.extend(stack.pop()),
                                _ => break,
                            }
                        }
                    }
                    stack.push(token);
                    prev = Prev::Operator;
                }
                Token::OParen => {
                    stack.push(token);
                    prev = Prev::OpenBracket;
                }
                Token::CParen => {
                    loop {
                        match stack.pop() {
                            Some(Token::OParen) => break,
                            Some(top) => out.push(top),
                            None => return Err(RpnError::UnmatchedCloseBracket(source.to_string())),
                        }
                    }
                    prev = Prev::Operand;
                }
                Token::Unknown(lexeme) => {
                    return Err(RpnError::InvalidCharacter { lexeme, input: source.to_string() })
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                Token::OParen => return Err(RpnError::UnmatchedOpenBracket(source.to_string())),
                token => out.push(token),
            }
        }
        let rpn = RpnExpr(out);
        debug!("converted '{}' into '{}'", source, rpn);
        Ok(rpn)
    }
}

/// Converts an infix expression into space separated postfix.
pub fn convert(infix: &str) -> Result<String, RpnError> {
    ShuntingParser::parse_str(infix).map(|rpn| rpn.to_string())
}

///////////////////////////////////////////////////////////////////////////////
