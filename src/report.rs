//! Console status lines for the operator.
//!
//! Output is human-readable only. Write errors on the sink are ignored: a
//! closed stdout must not turn a finished git operation into a failure.

use std::io::{self, Write};

use crate::error_translation::ErrorTranslator;

pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print a plain line
    pub fn line(&mut self, text: &str) {
        self.emit(text).ok();
    }

    fn emit(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }

    /// Print a line behind an emoji marker
    pub fn mark(&mut self, marker: &str, text: &str) {
        self.line(&format!("{} {}", marker, text));
    }

    pub fn success(&mut self, text: &str) {
        self.mark("✅", text);
    }

    pub fn warn(&mut self, text: &str) {
        self.mark("⚠️", text);
    }

    pub fn failure(&mut self, text: &str) {
        self.mark("❌", text);
    }

    /// A git invocation exited non-zero: name it, show its stderr, and add a
    /// hint when the stderr is recognised
    pub fn command_failed(&mut self, command: &str, stderr: &str) {
        self.line(&format!("Error executing command: {}", command));
        self.line(&format!("Error: {}", stderr.trim_end()));

        if let Some(hint) = ErrorTranslator::suggestion_for(stderr) {
            self.mark("💡", &hint);
        }
    }

    /// The closing `git status` block
    pub fn status_block(&mut self, status: &str) {
        self.line("");
        self.mark("📊", "Current repository status:");
        self.line(status.trim_end());
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
