use std::io::{self, BufRead, StdinLock, Stdout, Write};

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("no input provided")]
    EndOfInput,
    #[error("\"{0}\" is not a number")]
    NotANumber(String),
}

#[mockall::automock]
pub trait Prompt {
    fn read_number(&mut self, question: &str) -> Result<f64, PromptError>;
}

/// Asks a question on `writer` and reads the answer as one line from `reader`.
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

pub fn stdin_prompt() -> LinePrompt<StdinLock<'static>, Stdout> {
    LinePrompt::new(io::stdin().lock(), io::stdout())
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn read_number(&mut self, question: &str) -> Result<f64, PromptError> {
        write!(self.writer, "{}", question)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput);
        }

        let answer = line.trim();
        answer
            .parse()
            .map_err(|_| PromptError::NotANumber(answer.to_owned()))
    }
}
