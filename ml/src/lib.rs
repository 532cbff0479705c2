//! MemLog - append-only memory log with hybrid recall
//!
//! Persistent memory for an assistant: facts are appended as lines to a flat
//! text file and recalled later either by relevance search or by explicit
//! line address.
//!
//! # Architecture
//!
//! ```text
//! memory.log           # one fact per line, append-only, UTF-8
//!   1  apples are red
//!   2  bananas are yellow
//!   3  ...
//! ```
//!
//! Search is hybrid: exact substring containment dominates, with a
//! Levenshtein-based fuzzy fallback so typos and light paraphrase still
//! recall the right line.
//!
//! # Example
//!
//! ```ignore
//! use memlog::MemoryLog;
//!
//! let log = MemoryLog::open("memory.log");
//! log.append("the wifi password is hunter2")?;
//! let matches = memlog::search(&log, "wifi pasword", None)?;
//! let lines = memlog::fetch(&log, "1-5")?;
//! ```

pub mod cli;
pub mod config;
mod error;
mod range;
mod score;
mod search;
mod store;

pub use error::MemlogError;
pub use range::{FetchedLine, LineSelector, fetch, resolve};
pub use score::score_line;
pub use search::{SearchMatch, search};
pub use store::MemoryLog;

/// Result alias for memlog operations
pub type Result<T> = std::result::Result<T, MemlogError>;

/// Default number of search results returned
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Fuzzy whole-string comparison only looks at this many leading chars
pub const FUZZY_PREFIX_LEN: usize = 100;
