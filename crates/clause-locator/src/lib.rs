//! Clause location against an external literal-search primitive
//!
//! Classifier output references clauses with noisy labels (punctuation
//! variants, partial titles, numbering-only fragments) while the document
//! viewer only exposes a literal substring search. Locating text reliably
//! therefore runs a deterministic chain of search variants, never fuzzy
//! matching, and manages the resulting highlight's lifecycle.

pub mod error;
pub mod locator;
pub mod variants;

pub use error::LocateError;
pub use locator::{ClauseLocator, DocumentSearch, LocatorState, AUTO_CLEAR_SECS};
pub use variants::{build_variants, first_line_excerpt, MAX_EXCERPT_LEN};
