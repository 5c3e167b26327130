use std::collections::HashMap;
use std::fmt::Display;

use lazy_static::lazy_static;
use num_bigint::BigInt;

lazy_static! {
    static ref RESERVED_WORDS: HashMap<&'static str, Token> = {
        let mut m = HashMap::new();

        m.insert("IF", Token::If);
        m.insert("THEN", Token::Then);
        m.insert("ELSE", Token::Else);
        m.insert("END", Token::End);
        m.insert("WHILE", Token::While);
        m.insert("NOT", Token::Not);
        m.insert("TO", Token::To);
        m.insert("AND", Token::And);
        m.insert("OR", Token::Or);
        m.insert("SET", Token::Set);

        m
    };
}

#[derive(PartialEq, Debug, Clone)]
pub enum Number {
    Int(i64),
    /// Integer literal outside the `i64` range.
    Big(BigInt),
    Float(f64),
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            Number::Big(v) => write!(f, "{}", v),
            // keep the '.' so the text lexes back into a float
            Number::Float(v) if v.fract() == 0.0 => write!(f, "{:.1}", v),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

#[derive(PartialEq, Debug, Clone)]
pub enum Token {
    LeftParen,
    RightParen,
    Colon,
    Plus,
    Minus,
    Times,
    Divide,
    Assign,

    Identifier(String),
    Number(Number),

    To,
    End,
    If,
    Then,
    Else,
    While,
    And,
    Or,
    Not,
    Set,

    Eof,
}

impl Token {
    /// Classifies an identifier lexeme, case-insensitively, against the reserved words.
    pub fn from_ident(lexeme: &str) -> Token {
        match RESERVED_WORDS.get(lexeme.to_uppercase().as_str()) {
            Some(t) => t.clone(),
            None => Token::Identifier(lexeme.to_owned()),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let literal = match self {
            Token::LeftParen => "(",
            Token::RightParen => ")",
            Token::Colon => ":",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Times => "*",
            Token::Divide => "/",
            Token::Assign => "=",
            Token::Identifier(v) => return f.write_str(v),
            Token::Number(v) => return write!(f, "{}", v),
            Token::To => "TO",
            Token::End => "END",
            Token::If => "IF",
            Token::Then => "THEN",
            Token::Else => "ELSE",
            Token::While => "WHILE",
            Token::And => "AND",
            Token::Or => "OR",
            Token::Not => "NOT",
            Token::Set => "SET",
            Token::Eof => "EOF",
        };

        f.write_str(literal)
    }
}

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    Colon,
    Plus,
    Minus,
    Times,
    Divide,
    Assign,

    Identifier,
    Number,

    To,
    End,
    If,
    Then,
    Else,
    While,
    And,
    Or,
    Not,
    Set,

    Eof,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            TokenKind::LeftParen => "LPAREN",
            TokenKind::RightParen => "RPAREN",
            TokenKind::Colon => "COLON",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Identifier => "ID",
            TokenKind::Number => "NUMBER",
            TokenKind::To => "TO",
            TokenKind::End => "END",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Set => "SET",
            TokenKind::Eof => "EOF",
        };

        f.write_str(tag)
    }
}

impl From<&Token> for TokenKind {
    fn from(value: &Token) -> Self {
        match value {
            Token::LeftParen => TokenKind::LeftParen,
            Token::RightParen => TokenKind::RightParen,
            Token::Colon => TokenKind::Colon,
            Token::Plus => TokenKind::Plus,
            Token::Minus => TokenKind::Minus,
            Token::Times => TokenKind::Times,
            Token::Divide => TokenKind::Divide,
            Token::Assign => TokenKind::Assign,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::Number(_) => TokenKind::Number,
            Token::To => TokenKind::To,
            Token::End => TokenKind::End,
            Token::If => TokenKind::If,
            Token::Then => TokenKind::Then,
            Token::Else => TokenKind::Else,
            Token::While => TokenKind::While,
            Token::And => TokenKind::And,
            Token::Or => TokenKind::Or,
            Token::Not => TokenKind::Not,
            Token::Set => TokenKind::Set,
            Token::Eof => TokenKind::Eof,
        }
    }
}

impl From<&crate::pos::WithTokenMetadata<Token>> for TokenKind {
    fn from(t: &crate::pos::WithTokenMetadata<Token>) -> Self {
        TokenKind::from(&t.value)
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use crate::token::{Number, Token, TokenKind};

    #[test]
    fn test_from_ident_reserved() {
        assert_eq!(Token::from_ident("TO"), Token::To);
        assert_eq!(Token::from_ident("end"), Token::End);
        assert_eq!(Token::from_ident("While"), Token::While);
        assert_eq!(Token::from_ident("sEt"), Token::Set);
        assert_eq!(Token::from_ident("not"), Token::Not);
    }

    #[test]
    fn test_from_ident_plain() {
        assert_eq!(
            Token::from_ident("Forward"),
            Token::Identifier("Forward".to_owned())
        );
        assert_eq!(
            Token::from_ident("ENDING"),
            Token::Identifier("ENDING".to_owned())
        );
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(TokenKind::from(&Token::Identifier("x".into())).to_string(), "ID");
        assert_eq!(TokenKind::from(&Token::Number(Number::Int(1))).to_string(), "NUMBER");
        assert_eq!(TokenKind::from(&Token::LeftParen).to_string(), "LPAREN");
        assert_eq!(TokenKind::from(&Token::Times).to_string(), "TIMES");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
    }

    #[test]
    fn test_display_number() {
        assert_eq!(Token::Number(Number::Int(-12)).to_string(), "-12");
        assert_eq!(Token::Number(Number::Float(3.0)).to_string(), "3.0");
        assert_eq!(Token::Number(Number::Float(2.5)).to_string(), "2.5");

        let big: BigInt = "-123456789012345678901234567890"
            .parse()
            .expect("expected a valid big integer");
        assert_eq!(
            Token::Number(Number::Big(big)).to_string(),
            "-123456789012345678901234567890"
        );
    }

    #[test]
    fn test_display_keywords() {
        assert_eq!(Token::To.to_string(), "TO");
        assert_eq!(Token::Identifier("length".into()).to_string(), "length");
        assert_eq!(Token::Eof.to_string(), "EOF");
    }
}
