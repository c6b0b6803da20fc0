//! Data models for the transaction feed
//!
//! Records produced by the generator, the grouped sections handed to the
//! renderer, and the filter applied between the two.

pub mod transaction;
pub mod section;
pub mod filter;
pub mod feed;

// Re-export commonly used types for convenience
pub use transaction::{Transaction, TransactionKind, TransactionStatus};
pub use section::Section;
pub use filter::TransactionFilter;
pub use feed::{FeedState, LoadOutcome};
