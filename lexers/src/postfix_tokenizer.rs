use crate::scanner::Scanner;
use crate::{Token, OPERATORS};

/// Splits postfix text on whitespace runs.
///
/// Every word that parses as a float is a number (`-3`, `2.5`); a lone
/// operator symbol is an operator; everything else is `Token::Unknown`.
pub struct PostfixTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item=char>> PostfixTokenizer<I> {
    pub fn new(source: I) -> Self {
        PostfixTokenizer{src: Scanner::new(source)}
    }

    fn classify(word: String) -> Token {
        if word.parse::<f64>().is_ok() {
            return Token::Number(word);
        }
        let mut chars = word.chars();
        match (chars.next(), chars.next()) {
            (Some(op), None) if OPERATORS.contains(&op) => Token::Op(op),
            _ => Token::Unknown(word),
        }
    }
}

impl<'a> PostfixTokenizer<std::str::Chars<'a>> {
    pub fn from_str(source: &'a str) -> Self {
        Self::new(source.chars())
    }
}

impl<I: Iterator<Item=char>> Iterator for PostfixTokenizer<I> {
    type Item = Token;
    fn next(&mut self) -> Option<Self::Item> {
        self.src.ignore_ws();
        self.src.scan_word().map(Self::classify)
    }
}

#[cfg(test)]
mod tests {
    use super::PostfixTokenizer;
    use crate::Token;

    #[test]
    fn padded_input() {
        let lx = PostfixTokenizer::from_str("  3   3 +  ");
        let expect = vec![
            Token::Number(format!("3")),
            Token::Number(format!("3")),
            Token::Op('+'),
        ];
        assert_eq!(lx.collect::<Vec<_>>(), expect);
    }

    #[test]
    fn signed_and_fractional_numbers() {
        let lx = PostfixTokenizer::from_str("-3 2.5 - +4 ^");
        let expect = vec![
            Token::Number(format!("-3")),
            Token::Number(format!("2.5")),
            Token::Op('-'),
            Token::Number(format!("+4")),
            Token::Op('^'),
        ];
        assert_eq!(lx.collect::<Vec<_>>(), expect);
    }

    #[test]
    fn unknown_words() {
        let lx = PostfixTokenizer::from_str("2 3 ? a ++ (");
        let expect = vec![
            Token::Number(format!("2")),
            Token::Number(format!("3")),
            Token::Unknown(format!("?")),
            Token::Unknown(format!("a")),
            Token::Unknown(format!("++")),
            Token::Unknown(format!("(")),
        ];
        assert_eq!(lx.collect::<Vec<_>>(), expect);
    }
}
