use std::io::{self, BufRead, Write};

/// Asks the operator a yes/no question
pub trait Confirm {
    /// `Ok(true)` only for an explicit yes
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Prompts on a writer and reads the answer from a line-oriented reader.
///
/// `y` or `Y` (surrounding whitespace ignored) means yes; anything else,
/// including end of input, means no.
pub struct LineConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LineConfirm<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout, read from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<R, W> {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;

        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }
}
