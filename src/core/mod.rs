//! Core domain types
//!
//! The fundamental game types with no I/O: validated words and the
//! guess-scoring algorithm. Everything here is pure and deterministic.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterStatus};
pub use word::{WORD_LEN, Word, WordError};
