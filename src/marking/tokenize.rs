use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::config::{EmptyInputPolicy, MarkConfig};
use crate::error::TokenizeError;
use crate::marking::Segment;

lazy_static! {
    static ref DEFAULT_PATTERN: Regex =
        build_pattern('[', ']').expect("default mark pattern must compile");
}

/// A run is either text free of both delimiters, or one open delimiter,
/// anything but the close delimiter, then the close delimiter.
/// Plain runs are tried first, so a stray close or an unclosed open never starts a match.
fn build_pattern(open: char, close: char) -> Result<Regex, regex::Error> {
    let open = regex::escape(&open.to_string());
    let close = regex::escape(&close.to_string());
    Regex::new(&format!(
        "[^{open}{close}]+|{open}[^{close}]*{close}",
        open = open,
        close = close
    ))
}

/// Scans text for plain runs and delimited spans.
///
/// Holds a compiled pattern, so build once and reuse.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    config: MarkConfig,
    pattern: Regex,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            config: MarkConfig::default(),
            pattern: DEFAULT_PATTERN.clone(),
        }
    }
}

impl Tokenizer {
    pub fn new(config: MarkConfig) -> Result<Self, TokenizeError> {
        config.validate()?;

        let pattern = if config.is_default_delimiters() {
            DEFAULT_PATTERN.clone()
        } else {
            build_pattern(config.open, config.close)
                .map_err(|err| TokenizeError::InvalidConfig(err.to_string()))?
        };

        debug!(open = ?config.open, close = ?config.close, policy = ?config.empty_input, "built tokenizer");
        Ok(Self { config, pattern })
    }

    pub fn config(&self) -> &MarkConfig {
        &self.config
    }

    pub fn tokenize(&self, input: &str) -> Result<Vec<Segment>, TokenizeError> {
        let mut segments = Vec::new();
        let mut scanned_to = 0;

        for run in self.pattern.find_iter(input) {
            if run.start() > scanned_to {
                trace!(dropped = &input[scanned_to..run.start()], at = scanned_to, "dropped stray delimiter");
            }
            scanned_to = run.end();
            segments.push(self.segment_for(run.as_str()));
        }

        if scanned_to < input.len() {
            trace!(dropped = &input[scanned_to..], at = scanned_to, "dropped stray delimiter");
        }

        if segments.is_empty() {
            debug!(len = input.len(), "scan found no runs");
            if self.config.empty_input == EmptyInputPolicy::Reject {
                return Err(TokenizeError::NoRuns);
            }
        }

        Ok(segments)
    }

    /// Rejects bytes that are not UTF-8 before scanning.
    pub fn tokenize_bytes(&self, input: &[u8]) -> Result<Vec<Segment>, TokenizeError> {
        let text = std::str::from_utf8(input).map_err(|err| {
            TokenizeError::InvalidArgument(format!("input is not valid UTF-8: {}", err))
        })?;
        self.tokenize(text)
    }

    fn segment_for(&self, run: &str) -> Segment {
        match run.strip_prefix(self.config.open) {
            Some(rest) => {
                // The pattern guarantees a trailing close delimiter on every delimited run
                let inner = rest.strip_suffix(self.config.close).unwrap_or(rest);
                if inner.is_empty() {
                    Segment::empty_mark()
                } else {
                    Segment::marked(inner)
                }
            }
            None => Segment::plain(run),
        }
    }
}

/// Splits `input` into plain and `[marked]` segments, left to right.
///
/// Characters that fit neither run form (a lone `]`, a `[` with no later `]`) are dropped.
/// Fails with `TokenizeError::NoRuns` when nothing is left.
pub fn tokenize(input: &str) -> Result<Vec<Segment>, TokenizeError> {
    Tokenizer::default().tokenize(input)
}

pub fn tokenize_with(input: &str, config: &MarkConfig) -> Result<Vec<Segment>, TokenizeError> {
    Tokenizer::new(*config)?.tokenize(input)
}

pub fn tokenize_bytes(input: &[u8]) -> Result<Vec<Segment>, TokenizeError> {
    Tokenizer::default().tokenize_bytes(input)
}
