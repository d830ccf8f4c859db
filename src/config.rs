// Configuration for the mark tokenizer
// Defaults match the plain `[text]` notation

use crate::error::TokenizeError;

/// What to return when the scan finds no runs at all (e.g. `""` or `"]"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyInputPolicy {
    /// Fail with `TokenizeError::NoRuns`
    #[default]
    Reject,

    /// Return an empty segment list
    Allow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkConfig {
    /// Character that opens a marked span (default '[')
    pub open: char,

    /// Character that closes a marked span (default ']')
    pub close: char,

    pub empty_input: EmptyInputPolicy,
}

impl Default for MarkConfig {
    fn default() -> Self {
        Self {
            open: '[',
            close: ']',
            empty_input: EmptyInputPolicy::Reject,
        }
    }
}

impl MarkConfig {
    pub fn with_delimiters(mut self, open: char, close: char) -> Self {
        self.open = open;
        self.close = close;
        self
    }

    pub fn with_empty_input(mut self, policy: EmptyInputPolicy) -> Self {
        self.empty_input = policy;
        self
    }

    /// Open and close must differ, otherwise a span's end is indistinguishable from the next start.
    pub fn validate(&self) -> Result<(), TokenizeError> {
        if self.open == self.close {
            return Err(TokenizeError::InvalidConfig(format!(
                "open and close delimiters are both {:?}",
                self.open
            )));
        }
        Ok(())
    }

    pub fn is_default_delimiters(&self) -> bool {
        self.open == '[' && self.close == ']'
    }
}
