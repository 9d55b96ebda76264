use lexers::{PostfixTokenizer, Token};
use log::{debug, trace};

use crate::error::RpnError;
use crate::operators;
use crate::parser::RpnExpr;

impl RpnExpr {
    /// Tokenizes whitespace separated postfix. No validation happens here.
    pub fn from_postfix(postfix: &str) -> RpnExpr {
        RpnExpr(PostfixTokenizer::from_str(postfix).collect())
    }

    pub fn eval(&self) -> Result<f64, RpnError> {
        self.eval_source(&self.to_string())
    }

    // Every operator must find two operands and exactly one value must be
    // left at the end. Unknown tokens are reported as they are reached.
    pub(crate) fn validate(&self, source: &str) -> Result<(), RpnError> {
        let mut surplus = 0usize;
        for token in self.iter() {
            match *token {
                Token::Number(_) => surplus += 1,
                Token::Op(op) if operators::lookup(op).is_some() => {
                    if surplus < 2 {
                        return Err(RpnError::MalformedPostfix(source.to_string()));
                    }
                    surplus -= 1;
                }
                ref other => return Err(RpnError::UnknownOperator(other.to_string())),
            }
        }
        if surplus != 1 {
            return Err(RpnError::MalformedPostfix(source.to_string()));
        }
        Ok(())
    }

    fn eval_source(&self, source: &str) -> Result<f64, RpnError> {
        self.validate(source)?;
        let malformed = || RpnError::MalformedPostfix(source.to_string());
        let mut operands = Vec::new();

        for token in self.iter() {
            match *token {
                Token::Number(ref lexeme) => {
                    let value = lexeme.parse::<f64>()
                        .map_err(|_| RpnError::UnknownOperator(lexeme.clone()))?;
                    operands.push(value);
                }
                Token::Op(symbol) => {
                    let op = operators::lookup(symbol)
                        .ok_or_else(|| RpnError::UnknownOperator(symbol.to_string()))?;
                    let r = operands.pop().ok_or_else(malformed)?;
                    let l = operands.pop().ok_or_else(malformed)?;
                    let result = (op.apply)(l, r);
                    trace!("{} {} {} = {}", l, symbol, r, result);
                    operands.push(result);
                }
                ref other => return Err(RpnError::UnknownOperator(other.to_string())),
            }
        }
        let result = operands.pop().ok_or_else(malformed)?;
        debug!("evaluated '{}' to {}", source, result);
        Ok(result)
    }
}

/// Evaluates space separated postfix such as `"3 2 3 * +"`.
///
/// Division by zero is not an error, it yields an infinity or NaN.
pub fn evaluate(postfix: &str) -> Result<f64, RpnError> {
    RpnExpr::from_postfix(postfix).eval_source(postfix)
}

/// Checks the postfix is well formed without computing anything.
pub fn is_valid_rpn(postfix: &str) -> bool {
    RpnExpr::from_postfix(postfix).validate(postfix).is_ok()
}
