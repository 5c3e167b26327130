use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use rustyline::{error::ReadlineError, history::FileHistory};

use crate::error::LogoError;

mod error;

/// Parses Logo programs and prints their syntax tree.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the token stream instead of the syntax tree.
    #[arg(short, long)]
    tokens: bool,

    /// Start an interactive session; an empty line submits the buffered program.
    #[arg(short, long, conflicts_with = "file")]
    repl: bool,

    /// Source file to read. Standard input is used when absent.
    file: Option<PathBuf>,
}

/// Renders `source` as one line per token, or as the indented syntax tree.
fn render(source: &str, tokens: bool) -> Result<String, LogoError> {
    if !tokens {
        return Ok(compiler::parse(source)?.to_string());
    }

    let mut out = String::new();
    for token in compiler::tokenize(source) {
        let token = token?;
        out.push_str(&format!(
            "{} {} {}\n",
            token.pos.line,
            compiler::token::TokenKind::from(&token),
            token.value
        ));
    }

    Ok(out)
}

#[derive(Debug, PartialEq)]
enum IterStatus {
    Continue,
    Break,
}

struct Repl {
    prompt: String,
    editor: rustyline::Editor<(), FileHistory>,
    out: Box<dyn Write>,
    buffer: String,
    tokens: bool,
}

impl Repl {
    pub fn new(tokens: bool) -> Result<Self, LogoError> {
        Ok(Repl {
            out: Box::new(io::stdout()),
            editor: rustyline::DefaultEditor::new()?,
            prompt: "? ".into(),
            buffer: String::new(),
            tokens,
        })
    }

    fn iter(&mut self) -> Result<IterStatus, LogoError> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.trim())?;
                }
                self.handle_line(&line)
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("SIGINT received; exiting...");
                Ok(IterStatus::Break)
            }
            Err(ReadlineError::Eof) => self.finish(),
            Err(err) => {
                eprintln!("Error: {err:?}");
                Ok(IterStatus::Continue)
            }
        }
    }

    fn process_buffer(&mut self) -> Result<(), LogoError> {
        match render(&self.buffer, self.tokens) {
            Ok(rendered) => write!(&mut self.out, "{}", rendered)?,
            Err(LogoError::CompileError(e)) => eprintln!("{}", e),
            Err(e) => return Err(e),
        }

        Ok(())
    }

    /// Renders and clears whatever has been buffered so far.
    fn submit(&mut self) -> Result<(), LogoError> {
        if !self.buffer.is_empty() {
            self.process_buffer()?;
            self.buffer.clear();
        }

        Ok(())
    }

    /// End of input still submits a program that was never followed by a blank line.
    fn finish(&mut self) -> Result<IterStatus, LogoError> {
        self.submit()?;
        Ok(IterStatus::Break)
    }

    fn handle_line(&mut self, line: &str) -> Result<IterStatus, LogoError> {
        if line.trim().eq_ignore_ascii_case("quit") {
            return Ok(IterStatus::Break);
        }

        if line.trim().is_empty() {
            self.submit()?;
        } else {
            self.buffer.push_str(line);
            self.buffer.push('\n');
        }

        Ok(IterStatus::Continue)
    }

    pub fn run(&mut self) -> Result<(), LogoError> {
        while self.iter()? == IterStatus::Continue {}
        Ok(())
    }
}

fn read_source(file: Option<&PathBuf>) -> Result<String, LogoError> {
    Ok(match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            source
        }
    })
}

fn run(args: &Args) -> Result<(), LogoError> {
    if args.repl {
        return Repl::new(args.tokens)?.run();
    }

    let source = read_source(args.file.as_ref())?;
    print!("{}", render(&source, args.tokens)?);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
