//! Engine module: dedup memory, filtering and ranking.

mod filter;
mod rank;
mod seen;

pub use filter::{FilterEngine, Rejection};
pub use rank::rank;
pub use seen::SeenSet;
