//! Terminal dialogs.

use std::io::{BufRead, Write};

use sakura_core::UserPrompt;

/// Answers that count as "yes".
const YES: &[&str] = &["y", "yes", "д", "да"];

/// [`UserPrompt`] over a line-based reader and a writer.
///
/// Confirmations block on a line of input; end of input declines.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            assume_yes: false,
        }
    }

    /// Accept every confirmation without reading input.
    #[must_use]
    pub const fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// Consume the prompt and return the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{text}") {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }
}

impl<R: BufRead, W: Write> UserPrompt for TerminalPrompt<R, W> {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            self.line(&format!("{message} [y/N] y"));
            return true;
        }

        let _ = write!(self.output, "{message} [y/N] ");
        let _ = self.output.flush();

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) => false,
            Ok(_) => YES.contains(&answer.trim().to_lowercase().as_str()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read answer");
                false
            }
        }
    }

    fn alert(&mut self, message: &str) {
        self.line(message);
    }

    fn notify(&mut self, message: &str) {
        self.line(&format!("✔ {message}"));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn prompt(input: &str) -> TerminalPrompt<&[u8], Vec<u8>> {
        TerminalPrompt::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_confirm_accepts_yes_variants() {
        for answer in ["y\n", "YES\n", "да\n", " Д \n"] {
            assert!(prompt(answer).confirm("Очистить?"), "{answer:?}");
        }
    }

    #[test]
    fn test_confirm_declines_otherwise() {
        assert!(!prompt("n\n").confirm("Очистить?"));
        assert!(!prompt("\n").confirm("Очистить?"));
        assert!(!prompt("").confirm("Очистить?"));
    }

    #[test]
    fn test_assume_yes_skips_input() {
        let mut p = prompt("").assume_yes(true);
        assert!(p.confirm("Очистить?"));
        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out, "Очистить? [y/N] y\n");
    }

    #[test]
    fn test_alert_and_notify_are_written() {
        let mut p = prompt("");
        p.alert("Корзина пуста!");
        p.notify("Корзина очищена!");
        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out, "Корзина пуста!\n✔ Корзина очищена!\n");
    }
}
