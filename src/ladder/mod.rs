//! Word ladder algorithms
//!
//! Data flows dictionary → [`WildcardIndex`] → [`neighbors`] → [`LadderSearch`]
//! → [`Ladder`]. [`verify`] checks any ladder against the dictionary
//! independently of the search.

mod index;
pub mod naive;
mod neighbors;
mod pattern;
mod search;
mod sequence;
mod verify;

pub use index::WildcardIndex;
pub use neighbors::{neighbor_ids, neighbors};
pub use pattern::{MASK, PatternFamily, WildcardPattern, patterns_for};
pub use search::{LadderSearch, SearchConfig, SearchReport, shortest_ladder};
pub use sequence::Ladder;
pub use verify::{VerifyError, verify};

/// Build the wildcard index for a dictionary
///
/// Alias of [`WildcardIndex::build`].
#[must_use]
pub fn build_index(dictionary: &crate::core::Dictionary) -> WildcardIndex<'_> {
    WildcardIndex::build(dictionary)
}
