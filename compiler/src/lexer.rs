use num_bigint::BigInt;

use crate::{
    error::CompilerError,
    pos::{BytePos, WithTokenMetadata},
    scanner::Scanner,
    token::{Number, Token},
};

/// Lazy tokenizer. Yields tokens until the input is exhausted or the first lexical error.
pub struct Lexer<'a> {
    scanner: Scanner<'a>,
    line: usize,
    halted: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(buf: &str) -> Lexer {
        Lexer {
            scanner: Scanner::new(buf),
            line: 1,
            halted: false,
        }
    }

    /// Current line counter; advances as newlines are consumed.
    pub fn line(&self) -> usize {
        self.line
    }

    fn match_token(&mut self, c: char) -> Result<Option<Token>, CompilerError> {
        let token = match c {
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            ':' => Token::Colon,
            '*' => Token::Times,
            '/' => Token::Divide,
            '=' => Token::Assign,
            '+' | '-' => {
                if self.scanner.peek().map_or(false, |n| n.is_ascii_digit()) {
                    self.tokenize_number(c)?
                } else if c == '+' {
                    Token::Plus
                } else {
                    Token::Minus
                }
            }
            ' ' | '\r' | '\t' => return Ok(None),
            '\n' => {
                self.line += 1 + self.scanner.consume_while(|c| c == '\n').len();
                return Ok(None);
            }
            c if c.is_ascii_digit() => self.tokenize_number(c)?,
            c if c.is_ascii_alphabetic() || c == '_' => self.tokenize_ident(c),
            c => {
                return Err(CompilerError::LexError {
                    ch: c,
                    line: self.line,
                })
            }
        };

        Ok(Some(token))
    }

    fn tokenize_number(&mut self, start: char) -> Result<Token, CompilerError> {
        let mut number: String = String::new();
        number.push(start);

        let part1: String = self
            .scanner
            .consume_while(|c| c.is_ascii_digit())
            .into_iter()
            .collect();
        number.push_str(part1.as_str());

        if self.scanner.consume_if(|c| c == '.') {
            number.push('.');

            let part2: String = self
                .scanner
                .consume_while(|c| c.is_ascii_digit())
                .into_iter()
                .collect();
            number.push_str(part2.as_str());

            let value = if part2.is_empty() {
                format!("{}0", number).parse::<f64>()
            } else {
                number.parse::<f64>()
            };

            value
                .map(|v| Token::Number(Number::Float(v)))
                .map_err(|_| self.invalid_number(number))
        } else if let Ok(v) = number.parse::<i64>() {
            Ok(Token::Number(Number::Int(v)))
        } else {
            number
                .trim_start_matches('+')
                .parse::<BigInt>()
                .map(|v| Token::Number(Number::Big(v)))
                .map_err(|_| self.invalid_number(number))
        }
    }

    fn invalid_number(&self, lexeme: String) -> CompilerError {
        CompilerError::InvalidNumber {
            lexeme,
            line: self.line,
        }
    }

    fn tokenize_ident(&mut self, start: char) -> Token {
        let mut string: String = String::new();
        string.push(start);

        let part: String = self
            .scanner
            .consume_while(|c| c.is_ascii_alphanumeric() || c == '_')
            .into_iter()
            .collect();

        string.push_str(part.as_str());

        Token::from_ident(&string)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<WithTokenMetadata<Token>, CompilerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }

        loop {
            let start = self.scanner.pos;
            let c = self.scanner.next()?;

            match self.match_token(c) {
                Ok(Some(token)) => {
                    return Some(Ok(WithTokenMetadata::new(
                        token,
                        start,
                        BytePos(self.scanner.pos.0 - 1),
                        self.line,
                    )))
                }
                Ok(None) => continue,
                Err(e) => {
                    self.halted = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use crate::{
        error::CompilerError,
        token::{self, Number, Token},
    };

    use super::Lexer;

    fn get_tokens(str: &str) -> Vec<token::Token> {
        Lexer::new(str)
            .map(|t| t.expect("expected a valid token").value)
            .collect()
    }

    #[test]
    fn test_lexer() {
        assert_eq!(get_tokens("("), vec![Token::LeftParen]);
        assert_eq!(get_tokens(")"), vec![Token::RightParen]);
        assert_eq!(get_tokens(":"), vec![Token::Colon]);
        assert_eq!(get_tokens("+"), vec![Token::Plus]);
        assert_eq!(get_tokens("-"), vec![Token::Minus]);
        assert_eq!(get_tokens("*"), vec![Token::Times]);
        assert_eq!(get_tokens("/"), vec![Token::Divide]);
        assert_eq!(get_tokens("="), vec![Token::Assign]);
        assert_eq!(get_tokens(" "), vec![]);
        assert_eq!(get_tokens("\r"), vec![]);
        assert_eq!(get_tokens("\t"), vec![]);
        assert_eq!(get_tokens("\n"), vec![]);
        assert_eq!(get_tokens("1.33"), vec![Token::Number(Number::Float(1.33))]);
        assert_eq!(get_tokens("42"), vec![Token::Number(Number::Int(42))]);
        assert_eq!(
            get_tokens("forward"),
            vec![Token::Identifier("forward".into())]
        );
    }

    #[test]
    fn test_lexer_unknown_char() {
        let mut lexer = Lexer::new("FD 10 `");

        assert!(lexer.next().expect("expected a token").is_ok());
        assert!(lexer.next().expect("expected a token").is_ok());
        assert_eq!(
            lexer.next(),
            Some(Err(CompilerError::LexError { ch: '`', line: 1 }))
        );
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_lexer_stops_after_error() {
        let mut lexer = Lexer::new("a ; b c");

        assert!(lexer.next().expect("expected a token").is_ok());
        assert!(lexer.next().expect("expected an error").is_err());
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_tokenize_number() {
        assert_eq!(
            Lexer::new("20.0").tokenize_number('3'),
            Ok(Token::Number(Number::Float(320.)))
        );
        assert_eq!(
            Lexer::new("20.12").tokenize_number('3'),
            Ok(Token::Number(Number::Float(320.12)))
        );
        assert_eq!(
            Lexer::new("20").tokenize_number('3'),
            Ok(Token::Number(Number::Int(320)))
        );
    }

    #[test]
    fn test_tokenize_number_trailing_dot() {
        assert_eq!(
            Lexer::new(". x").tokenize_number('7'),
            Ok(Token::Number(Number::Float(7.0)))
        );
    }

    #[test]
    fn test_tokenize_number_single_digit() {
        assert_eq!(
            Lexer::new("mousely").tokenize_number('9'),
            Ok(Token::Number(Number::Int(9)))
        );
    }

    #[test]
    fn test_tokenize_number_signed() {
        assert_eq!(
            Lexer::new("20").tokenize_number('-'),
            Ok(Token::Number(Number::Int(-20)))
        );
        assert_eq!(
            Lexer::new("20").tokenize_number('+'),
            Ok(Token::Number(Number::Int(20)))
        );
        assert_eq!(
            Lexer::new("20.5").tokenize_number('-'),
            Ok(Token::Number(Number::Float(-20.5)))
        );
    }

    #[test]
    fn test_tokenize_number_beyond_i64() {
        let big = |s: &str| s.parse::<BigInt>().expect("expected a valid big integer");

        assert_eq!(
            Lexer::new("99999999999999999999").tokenize_number('9'),
            Ok(Token::Number(Number::Big(big("999999999999999999999"))))
        );
        assert_eq!(
            Lexer::new("9223372036854775808").tokenize_number('+'),
            Ok(Token::Number(Number::Big(big("9223372036854775808"))))
        );
        assert_eq!(
            Lexer::new("9223372036854775808").tokenize_number('-'),
            Ok(Token::Number(Number::Int(i64::MIN)))
        );
        assert_eq!(
            Lexer::new("9223372036854775809").tokenize_number('-'),
            Ok(Token::Number(Number::Big(big("-9223372036854775809"))))
        );
    }

    #[test]
    fn test_sign_binds_only_before_digit() {
        assert_eq!(
            get_tokens("3 - 4"),
            vec![
                Token::Number(Number::Int(3)),
                Token::Minus,
                Token::Number(Number::Int(4))
            ]
        );
        assert_eq!(
            get_tokens("3 -4"),
            vec![Token::Number(Number::Int(3)), Token::Number(Number::Int(-4))]
        );
        assert_eq!(
            get_tokens("--5"),
            vec![Token::Minus, Token::Number(Number::Int(-5))]
        );
        assert_eq!(get_tokens("+ 5"), vec![Token::Plus, Token::Number(Number::Int(5))]);
    }

    #[test]
    fn test_tokenize_ident() {
        assert_eq!(
            Lexer::new("20").tokenize_ident('a'),
            Token::Identifier("a20".into())
        );
    }

    #[test]
    fn test_tokenize_ident_kw() {
        assert_eq!(Lexer::new("O").tokenize_ident('T'), Token::To);
        assert_eq!(Lexer::new("nd").tokenize_ident('e'), Token::End);
        assert_eq!(Lexer::new("hile").tokenize_ident('W'), Token::While);
    }

    #[test]
    fn test_keyword_prefix_stays_ident() {
        assert_eq!(
            get_tokens("TOTAL ifx"),
            vec![
                Token::Identifier("TOTAL".into()),
                Token::Identifier("ifx".into())
            ]
        );
    }

    #[test]
    fn test_tokenize_ident_with_underscore() {
        assert_eq!(
            Lexer::new("_snoobers").tokenize_ident('x'),
            Token::Identifier("x_snoobers".into())
        );
        assert_eq!(get_tokens("_a"), vec![Token::Identifier("_a".into())]);
    }

    #[test]
    fn test_newline_runs() {
        let mut lexer = Lexer::new(" \n\t\n\r\n  ");

        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.line(), 4);
    }

    #[test]
    fn test_position() {
        let tokens: Vec<_> = Lexer::new("hello\nhello\n\n\t\t9\nEND\n")
            .map(|t| t.expect("expected a valid token"))
            .collect();

        let token = &tokens[0];
        assert_eq!(token.pos.start_inclusive.0, 0);
        assert_eq!(token.pos.end_inclusive.0, 4);
        assert_eq!(token.pos.line, 1);

        let token = &tokens[1];
        assert_eq!(token.pos.start_inclusive.0, 6);
        assert_eq!(token.pos.end_inclusive.0, 10);
        assert_eq!(token.pos.line, 2);

        let token = &tokens[2];
        assert_eq!(token.pos.start_inclusive.0, 15);
        assert_eq!(token.pos.end_inclusive.0, 15);
        assert_eq!(token.pos.line, 4);

        let token = &tokens[3];
        assert_eq!(token.value, Token::End);
        assert_eq!(token.pos.start_inclusive.0, 17);
        assert_eq!(token.pos.end_inclusive.0, 19);
        assert_eq!(token.pos.line, 5);
    }
}
