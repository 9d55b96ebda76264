use lexers::Token;

use crate::error::RpnError;
use crate::operators::{self, Assoc};
use crate::parser::RpnExpr;

// leaves never need parens around them
const LEAF_PRECEDENCE: usize = 99;

fn wrap(text: String) -> String {
    format!("({})", text)
}

impl RpnExpr {
    /// Renders the expression back as infix with as few parens as possible.
    ///
    /// Folds over the postfix sequence keeping (rendered text, precedence)
    /// per pending operand, so no tree is built and nothing recurses.
    pub fn to_infix(&self) -> Result<String, RpnError> {
        let source = self.to_string();
        self.validate(&source)?;
        let malformed = || RpnError::MalformedPostfix(source.clone());

        let mut operands: Vec<(String, usize)> = Vec::new();
        for token in self.iter() {
            match *token {
                // keep explicit signs readable: (-3) ^ 2
                Token::Number(ref lexeme) if lexeme.starts_with(&['-', '+'][..]) => {
                    operands.push((wrap(lexeme.clone()), LEAF_PRECEDENCE))
                }
                Token::Number(ref lexeme) => operands.push((lexeme.clone(), LEAF_PRECEDENCE)),
                Token::Op(symbol) => {
                    let op = operators::lookup(symbol)
                        .ok_or_else(|| RpnError::UnknownOperator(symbol.to_string()))?;
                    let (rhs, rprec) = operands.pop().ok_or_else(malformed)?;
                    let (lhs, lprec) = operands.pop().ok_or_else(malformed)?;
                    let mut text = if op.precedence > lprec
                        || (op.precedence == lprec && op.assoc != Assoc::Left)
                    {
                        wrap(lhs)
                    } else {
                        lhs
                    };
                    // extend lhs in place, long left leaning chains stay linear
                    text.push(' ');
                    text.push(symbol);
                    text.push(' ');
                    if op.precedence > rprec
                        || (op.precedence == rprec && op.assoc != Assoc::Right)
                    {
                        text.push('(');
                        text.push_str(&rhs);
                        text.push(')');
                    } else {
                        text.push_str(&rhs);
                    }
                    operands.push((text, op.precedence));
                }
                ref other => return Err(RpnError::UnknownOperator(other.to_string())),
            }
        }
        operands.pop().map(|(text, _)| text).ok_or_else(malformed)
    }
}

///////////////////////////////////////////////////////////////////////////////
