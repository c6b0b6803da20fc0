pub mod table;
pub mod errors;
pub mod random;
pub mod scroll;

pub use table::{Align, Table};
pub use errors::{user_message, FeedError};
pub use random::{RandomSource, RngSource};
#[cfg(test)]
pub use random::FixedSequence;
pub use scroll::ScrollMetrics;
