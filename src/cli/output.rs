//! Colored terminal output.

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use std::io::{self, IsTerminal, Write};

/// Prints stage outcomes and the final summary.
///
/// Verbose lines are suppressed unless verbose mode is on; everything except
/// errors is suppressed in quiet mode. Errors go to stderr. Color is only
/// used when the stream is a terminal.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
    stdout_color: ColorChoice,
    stderr_color: ColorChoice,
}

impl OutputManager {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            stdout_color: color_choice(io::stdout().is_terminal()),
            stderr_color: color_choice(io::stderr().is_terminal()),
        }
    }

    fn stdout(&self) -> StandardStream {
        StandardStream::stdout(self.stdout_color)
    }

    fn stderr(&self) -> StandardStream {
        StandardStream::stderr(self.stderr_color)
    }

    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.verbose || self.quiet {
            return Ok(());
        }
        let mut stdout = self.stdout();
        stdout.set_color(ColorSpec::new().set_dimmed(true))?;
        writeln!(stdout, "  {}", message)?;
        stdout.reset()
    }

    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = self.stdout();
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(stdout, "✅ {}", message)?;
        stdout.reset()
    }

    pub fn error(&self, message: &str) -> io::Result<()> {
        let mut stderr = self.stderr();
        stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        writeln!(stderr, "❌ {}", message)?;
        stderr.reset()
    }

    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = self.stdout();
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        writeln!(stdout, "{}", title)?;
        writeln!(stdout, "{}", "=".repeat(title.chars().count()))?;
        stdout.reset()
    }

    /// Print preformatted multi-line text as is.
    pub fn block(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        write!(self.stdout(), "{}", text)
    }

    /// Like [`block`](Self::block) but to stderr in red, and never suppressed.
    pub fn error_block(&self, text: &str) -> io::Result<()> {
        let mut stderr = self.stderr();
        stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        write!(stderr, "{}", text)?;
        stderr.reset()
    }
}

fn color_choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
