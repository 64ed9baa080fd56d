//! Spelling suggestion system.
//!
//! This module ranks the words of a fixed dictionary by edit distance to a
//! query and returns the closest ones as "Did you mean?" candidates.

pub mod dictionary;
pub mod levenshtein;
pub mod suggest;
pub mod text;

// Re-export commonly used types
pub use dictionary::*;
pub use levenshtein::*;
pub use suggest::*;
pub use text::*;
