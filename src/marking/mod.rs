pub mod segment;
pub mod tokenize;

pub use segment::{reconstruct, reconstruct_with, Segment};
pub use tokenize::{tokenize, tokenize_bytes, tokenize_with, Tokenizer};
