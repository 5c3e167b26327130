use std::{fmt::Display, io};

use compiler::error::CompilerError;
use rustyline::error::ReadlineError;

#[derive(Debug)]
pub enum LogoError {
    CompileError(CompilerError),
    IoError(String),
    ReadlineError(String),
}

impl Display for LogoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogoError::CompileError(e) => write!(f, "{}", e),
            LogoError::IoError(e) => write!(f, "I/O error: {}", e),
            LogoError::ReadlineError(e) => write!(f, "readline error: {}", e),
        }
    }
}

impl From<io::Error> for LogoError {
    fn from(value: io::Error) -> Self {
        LogoError::IoError(value.to_string())
    }
}

impl From<CompilerError> for LogoError {
    fn from(value: CompilerError) -> Self {
        LogoError::CompileError(value)
    }
}

impl From<ReadlineError> for LogoError {
    fn from(value: ReadlineError) -> Self {
        LogoError::ReadlineError(value.to_string())
    }
}
