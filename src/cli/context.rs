use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::clock::Clock;
use crate::directory::Directory;

/// Everything a shell command needs: the directory plus the line-oriented
/// input and output it talks through.
pub struct CLIContext<R, W, C> {
    pub directory: Directory<C>,
    pub input: R,
    pub output: W,
}

impl<R: BufRead, W: Write, C: Clock> CLIContext<R, W, C> {
    pub fn new(directory: Directory<C>, input: R, output: W) -> Self {
        Self {
            directory,
            input,
            output,
        }
    }

    /// Prompt and read a line. Only the line ending is stripped.
    /// Returns `Ok(None)` on end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut buf = String::new();
        match self.input.read_line(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(
                buf.trim_end_matches('\n').trim_end_matches('\r').to_string(),
            )),
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        Ok(self.read_line(prompt)?.map(|s| s.trim().to_string()))
    }

    pub fn print_error(&mut self, e: &dyn Display) -> io::Result<()> {
        writeln!(self.output, "Error: {}", e)
    }

    pub fn into_directory(self) -> Directory<C> {
        self.directory
    }
}
