use error::CompilerError;
use lexer::Lexer;
use parser::Parser;
use tree::Node;

pub mod error;
pub mod lexer;
pub mod parser;
pub mod pos;
mod productions;
mod scanner;
pub mod symtable;
pub mod token;
pub mod tree;

/// Lazily tokenizes `buf`; each item is a token or the lexical error that ended the run.
pub fn tokenize(buf: &str) -> Lexer {
    Lexer::new(buf)
}

pub fn parse(buf: &str) -> Result<Node, CompilerError> {
    Parser::new(Lexer::new(buf)).parse()
}
