//! Command implementations

pub mod benchmark;
mod error;
pub mod ladder;
pub mod neighbors;
pub mod path;
pub mod verify;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use error::CommandError;
pub use ladder::{LadderConfig, LadderResult, find_ladder};
pub use neighbors::{NeighborResult, list_neighbors};
pub use path::{PathResult, find_path, shortest_path};
pub use verify::{VerifyOutcome, verify_ladder};
