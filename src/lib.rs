//! Splits text into plain runs and bracket-marked spans.
//!
//! ```
//! use marktext::{tokenize, Segment};
//!
//! let segments = tokenize("a[b]c").unwrap();
//! assert_eq!(
//!     segments,
//!     vec![Segment::plain("a"), Segment::marked("b"), Segment::plain("c")]
//! );
//! ```

pub mod config;
pub mod error;
pub mod marking;

pub use config::{EmptyInputPolicy, MarkConfig};
pub use error::TokenizeError;
pub use marking::{
    reconstruct, reconstruct_with, tokenize, tokenize_bytes, tokenize_with, Segment, Tokenizer,
};
