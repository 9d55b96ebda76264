use lexers::Token;

use crate::error::RpnError;
use crate::parser::{convert, RpnExpr, ShuntingParser};
use crate::rpneval::evaluate;

fn num(lexeme: &str) -> Token {
    Token::Number(lexeme.to_string())
}

#[test]
fn parse1() {
    let rpn = ShuntingParser::parse_str("3+4*2/(1-5)^2^3").unwrap();
    let expect = [
        num("3"),
        num("4"),
        num("2"),
        Token::Op('*'),
        num("1"),
        num("5"),
        Token::Op('-'),
        num("2"),
        num("3"),
        Token::Op('^'),
        Token::Op('^'),
        Token::Op('/'),
        Token::Op('+'),
    ];
    assert_eq!(rpn.len(), expect.len());
    for (i, token) in expect.iter().enumerate() {
        assert_eq!(rpn[i], *token);
    }
}

#[test]
fn precedence() {
    assert_eq!(convert("3 + 2 * 3").unwrap(), "3 2 3 * +");
    assert_eq!(convert("3 * 2 + 3 + 4").unwrap(), "3 2 * 3 + 4 +");
    assert_eq!(convert("3 + 4 * 2 / (1 - 5) ^ 2").unwrap(), "3 4 2 * 1 5 - 2 ^ / +");
}

#[test]
fn right_assoc_power() {
    assert_eq!(convert("2 ^ 3 ^ 2").unwrap(), "2 3 2 ^ ^");
    // left associative ops still pop their equals
    assert_eq!(convert("8 / 4 / 2").unwrap(), "8 4 / 2 /");
    assert_eq!(convert("8 - 4 + 2").unwrap(), "8 4 - 2 +");
}

#[test]
fn brackets() {
    assert_eq!(convert("(3 + 2) * 3").unwrap(), "3 2 + 3 *");
    assert_eq!(convert("(3 + (2))").unwrap(), "3 2 +");
    assert_eq!(convert("((((1 * (2 + 3)) - 3) + 4) * 5)").unwrap(), "1 2 3 + * 3 - 4 + 5 *");
}

#[test]
fn unary_signs() {
    assert_eq!(convert("3 + -2").unwrap(), "3 0 2 - +");
    assert_eq!(convert("-3 + +2").unwrap(), "0 3 - 0 2 + +");
    assert_eq!(convert("3 - - - - 5").unwrap(), "3 0 0 0 5 - - - -");
    assert_eq!(convert("-(3 + -2)*-1").unwrap(), "0 3 0 2 - + 0 1 - * -");
    // a sign right after a closing bracket is a plain binary op
    assert_eq!(convert("(3) - 2").unwrap(), "3 2 -");
    // the sign swallows everything up to the next '+', '-' or ')'
    assert_eq!(convert("2 / -1 * 4").unwrap(), "2 0 1 4 * - /");
    assert_eq!(evaluate("2 0 1 4 * - /").unwrap(), -0.5);
}

#[test]
fn whitespace_and_decimals() {
    assert_eq!(convert(" 3 + 2 ").unwrap(), "3 2 +");
    assert_eq!(convert("3+2").unwrap(), "3 2 +");
    assert_eq!(convert("10.5 * 200").unwrap(), "10.5 200 *");
    assert_eq!(convert("").unwrap(), "");
}

#[test]
fn display_matches_convert() {
    let rpn = ShuntingParser::parse_str("(1 + 2) * 4 + 3").unwrap();
    assert_eq!(rpn.to_string(), "1 2 + 4 * 3 +");
    assert_eq!(RpnExpr::from_postfix(" 1 2  + 4 * 3 + "), rpn);
}

#[test]
fn bad_brackets() {
    let err = convert("3 + 3)").unwrap_err();
    assert_eq!(err, RpnError::UnmatchedCloseBracket(format!("3 + 3)")));
    assert_eq!(err.to_string(), "Invalid bracket order: 3 + 3). Not enough open bracket");

    let err = convert("(3 + 3").unwrap_err();
    assert_eq!(err, RpnError::UnmatchedOpenBracket(format!("(3 + 3")));
    assert_eq!(err.to_string(), "Invalid bracket order: (3 + 3. Not enough closed bracket");

    let input = "((((1 * (2 + 3)) - 3) + 4) * 5";
    assert_eq!(
        convert(input).unwrap_err().to_string(),
        format!("Invalid bracket order: {}. Not enough closed bracket", input)
    );
    assert_eq!(convert(")(").unwrap_err(), RpnError::UnmatchedCloseBracket(format!(")(")));
}

#[test]
fn bad_chars() {
    let err = convert("3 % 2").unwrap_err();
    assert_eq!(err, RpnError::InvalidCharacter { lexeme: format!("%"), input: format!("3 % 2") });
    assert_eq!(err.to_string(), "Invalid character: % in 3 % 2");
    assert!(convert("x + 1").is_err());
}

#[test]
fn concurrent_callers() {
    let handles = (0..8)
        .map(|i| std::thread::spawn(move || convert(&format!("{} + 2 * 3", i))))
        .collect::<Vec<_>>();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap().unwrap(), format!("{} 2 3 * +", i));
    }
}
