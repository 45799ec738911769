//! Text helpers for reports

use std::fmt;

/// A count followed by its noun, e.g. "1 node" or "3 nodes"
#[derive(Debug, Clone, Copy)]
pub struct Counted {
    count: usize,
    noun: &'static str,
}

impl Counted {
    pub fn new(count: usize, noun: &'static str) -> Self {
        Self { count, noun }
    }
}

impl fmt::Display for Counted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.count {
            1 => write!(f, "1 {}", self.noun),
            n => write!(f, "{n} {}s", self.noun),
        }
    }
}
