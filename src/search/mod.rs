//! Incremental group search
//!
//! Combines the server-curated common list with on-demand remote search:
//! trailing-edge debounce, a session-local per-term cache, and discard of
//! responses that a newer keystroke has superseded.

pub mod debounce;
pub mod engine;

pub use debounce::Debouncer;
pub use engine::{GroupAutocomplete, PendingSearch, SearchOutcome, MIN_TERM_LEN};
