use std::fmt::Display;

#[derive(Debug, PartialEq)]
pub enum CompilerError {
    /// A character no token rule accepts.
    LexError { ch: char, line: usize },
    /// An integer literal that does not fit the integer representation.
    InvalidNumber { lexeme: String, line: usize },
    /// A token that cannot extend the derivation; `token` is its display text.
    SyntaxError { token: String, line: usize },
    /// Constructs nested past `parser::MAX_NESTING`.
    NestingTooDeep { line: usize },
    TreeError(String),
    SymbolRedefinition {
        name: String,
        line: usize,
        previous_line: usize,
    },
    Internal(String),
}

impl Display for CompilerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompilerError::LexError { ch, line } => {
                write!(f, "Illegal character: '{}', at line {}", ch, line)
            }
            CompilerError::InvalidNumber { lexeme, line } => {
                write!(f, "Invalid number literal: '{}', at line {}", lexeme, line)
            }
            CompilerError::SyntaxError { token, line } => {
                write!(f, "Syntax error at '{}', at line {}", token, line)
            }
            CompilerError::NestingTooDeep { line } => {
                write!(f, "Nesting too deep, at line {}", line)
            }
            CompilerError::TreeError(msg) => write!(f, "Tree error: {}", msg),
            CompilerError::SymbolRedefinition {
                name,
                line,
                previous_line,
            } => write!(
                f,
                "Redeclaration of symbol: {}:{}: Previously declared at line {}",
                name, line, previous_line
            ),
            CompilerError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for CompilerError {}

#[cfg(test)]
mod tests {
    use super::CompilerError;

    #[test]
    fn test_display() {
        assert_eq!(
            CompilerError::LexError { ch: '`', line: 3 }.to_string(),
            "Illegal character: '`', at line 3"
        );
        assert_eq!(
            CompilerError::SyntaxError {
                token: "EOF".to_owned(),
                line: 1
            }
            .to_string(),
            "Syntax error at 'EOF', at line 1"
        );
        assert_eq!(
            CompilerError::SymbolRedefinition {
                name: "SQUARE".to_owned(),
                line: 9,
                previous_line: 2
            }
            .to_string(),
            "Redeclaration of symbol: SQUARE:9: Previously declared at line 2"
        );
        assert_eq!(
            CompilerError::NestingTooDeep { line: 4 }.to_string(),
            "Nesting too deep, at line 4"
        );
    }
}
