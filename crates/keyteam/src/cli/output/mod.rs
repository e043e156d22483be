//! Output formatting utilities
//!
//! Commands write through an [`Output`] handed to them by the caller, so the
//! same command code can print to the terminal or into a buffer.

use std::io::{self, Write};

use console::style;

/// Output sink passed to every command
pub struct Output {
    writer: Box<dyn Write>,
    styled: bool,
    quiet: bool,
}

impl Output {
    /// Write to stdout
    pub fn terminal(quiet: bool) -> Self {
        Self {
            writer: Box::new(io::stdout()),
            styled: true,
            quiet,
        }
    }

    /// Collect output in memory, without styling
    #[cfg(test)]
    pub fn buffered() -> (Self, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let out = Self {
            writer: Box::new(buffer.clone()),
            styled: false,
            quiet: false,
        };
        (out, buffer)
    }

    /// Print a line unconditionally
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        if self.styled {
            writeln!(self.writer, "{}", text)
        } else {
            writeln!(self.writer, "{}", console::strip_ansi_codes(text))
        }
    }

    /// Print an empty line, unless quiet
    pub fn blank(&mut self) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.line("")
    }

    /// Print pretty JSON
    pub fn json(&mut self, value: &serde_json::Value) -> anyhow::Result<()> {
        let text = serde_json::to_string_pretty(value)?;
        self.line(&text)?;
        Ok(())
    }

    /// Print a success message, unless quiet
    pub fn success(&mut self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.line(&format!("{} {}", style("✓").green().bold(), message))
    }

    /// Print a warning message
    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        self.line(&format!("{} {}", style("!").yellow().bold(), message))
    }

    /// Print an info message, unless quiet
    pub fn info(&mut self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.line(&format!("{} {}", style("→").blue(), message))
    }
}

/// In-memory writer shared with the [`Output`] that fills it
#[cfg(test)]
#[derive(Clone, Default)]
pub struct SharedBuffer(std::rc::Rc<std::cell::RefCell<Vec<u8>>>);

#[cfg(test)]
impl SharedBuffer {
    /// Everything written so far
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

#[cfg(test)]
impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Print an error message to stderr
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Create a styled header
pub fn header(text: &str) -> String {
    style(text).bold().to_string()
}

/// Create a styled key-value line
pub fn key_value(key: &str, value: &str) -> String {
    format!("  {} {}", style(format!("{:<12}", key)).dim(), value)
}

/// Style a fingerprint for display
pub fn fingerprint_style(text: &str) -> String {
    style(text).cyan().to_string()
}
