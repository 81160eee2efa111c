use std::io::{self, BufRead, Write};

/// Prints the prompt and hands back one line at a time.
pub struct ShellPrompt<R, W> {
    prompt: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ShellPrompt<R, W> {
    pub fn new(prompt: impl Into<String>, input: R, output: W) -> Self {
        ShellPrompt {
            prompt: prompt.into(),
            input,
            output,
        }
    }

    pub fn show_prompt(&mut self) -> io::Result<()> {
        write!(self.output, "{}", self.prompt)?;
        self.output.flush()
    }

    /// Reads the next line without its terminator. `None` on end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        let bytes_read = self.input.read_line(&mut buf)?;
        if bytes_read == 0 {
            // EOF (e.g. Ctrl-D)
            writeln!(self.output)?;
            return Ok(None);
        }
        let line = buf.strip_suffix('\n').unwrap_or(&buf);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(Some(line.to_string()))
    }
}
