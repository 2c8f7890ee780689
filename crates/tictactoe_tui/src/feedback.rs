//! Audible feedback through the terminal bell.

use std::io::Write;
use tracing::warn;

/// Sounds the UI plays in response to game events.
pub trait Feedback {
    /// A mark was placed.
    fn click(&mut self);

    /// A line was completed.
    fn victory(&mut self);
}

/// Rings the terminal bell (BEL) on the wrapped writer.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    /// Creates a bell writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn ring(&mut self, times: usize) {
        let result = self
            .out
            .write_all("\x07".repeat(times).as_bytes())
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!(error = %e, "Failed to ring terminal bell");
        }
    }
}

impl<W: Write> Feedback for TerminalBell<W> {
    fn click(&mut self) {
        self.ring(1);
    }

    fn victory(&mut self) {
        self.ring(3);
    }
}

/// Plays nothing.
pub struct Muted;

impl Feedback for Muted {
    fn click(&mut self) {}

    fn victory(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_writes_bel_bytes() {
        let mut bell = TerminalBell::new(Vec::new());
        bell.click();
        bell.victory();
        assert_eq!(bell.out, b"\x07\x07\x07\x07");
    }
}
