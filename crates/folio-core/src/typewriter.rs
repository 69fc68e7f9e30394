use crate::constants::{TYPEWRITER_CHAR_DELAY_MS, TYPEWRITER_START_DELAY_MS};

/// One rendered step: the visible prefix and the wait before the next step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    pub delay_ms: i32,
}

/// Reveals a string one character at a time, once.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
    stopped: bool,
    char_delay_ms: i32,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self::with_delay(text, TYPEWRITER_CHAR_DELAY_MS)
    }

    pub fn with_delay(text: &str, char_delay_ms: i32) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
            stopped: false,
            char_delay_ms,
        }
    }

    /// Delay before the first character appears.
    pub fn start_delay_ms(&self) -> i32 {
        TYPEWRITER_START_DELAY_MS
    }

    pub fn full_text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.stopped || self.shown >= self.chars.len()
    }

    /// Finish immediately; `full_text` is what should be displayed.
    pub fn stop(&mut self) {
        self.stopped = true;
        self.shown = self.chars.len();
    }

    pub fn step(&mut self) -> Option<TypeStep> {
        if self.is_done() {
            return None;
        }
        self.shown += 1;
        Some(TypeStep {
            text: self.chars[..self.shown].iter().collect(),
            delay_ms: self.char_delay_ms,
        })
    }
}
