//! Suppression of a re-emitted battle preamble
//!
//! Asking the simulator about team-preview state right after initialization
//! can make it append the `|start` ... `|turn|N` block a second time. The
//! filter drops that second block and any `|turn|` line that repeats the
//! last turn number it let through.

use splice_protocol::LogLine;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct PreambleFilter {
    seen_start: bool,
    suppressing: bool,
    last_turn: Option<u32>,
}

impl PreambleFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether one line passes
    pub fn accept(&mut self, line: &str) -> bool {
        let tag = LogLine::tag(line);

        if self.suppressing {
            if tag == Some("turn") {
                self.suppressing = false;
                if let Some(turn) = turn_number(line) {
                    self.last_turn = self.last_turn.max(Some(turn));
                }
            }
            return false;
        }

        match tag {
            Some("start") if self.seen_start => {
                debug!("dropping duplicated battle preamble");
                self.suppressing = true;
                false
            }
            Some("start") => {
                self.seen_start = true;
                true
            }
            Some("turn") => {
                let turn = turn_number(line);
                if turn.is_some() && turn == self.last_turn {
                    debug!(turn = ?turn, "dropping repeated turn marker");
                    return false;
                }
                if turn.is_some() {
                    self.last_turn = turn;
                }
                true
            }
            _ => true,
        }
    }

    /// Filter a batch of freshly read lines
    pub fn filter<'a, I>(&mut self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        lines
            .into_iter()
            .filter(|line| self.accept(line))
            .cloned()
            .collect()
    }

    /// Whether a duplicated block is currently being dropped
    pub fn is_suppressing(&self) -> bool {
        self.suppressing
    }
}

fn turn_number(line: &str) -> Option<u32> {
    line.split('|').nth(2).and_then(|n| n.trim().parse().ok())
}
