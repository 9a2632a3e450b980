//! Classic table-filling dynamic programming algorithms.
//!
//! Five independent engines share one 2-D [`table::Table`] abstraction:
//!
//! - [`floyd`]: all-pairs shortest paths with path reconstruction
//! - [`knapsack`]: bounded knapsack with per-item quantity limits
//! - [`obst`]: optimal binary search tree construction
//! - [`probwin`]: probability of winning a best-of-N series
//! - [`replacement`]: minimum-cost equipment replacement planning
//!
//! Each engine is a context struct owning its input parameters and DP
//! tables: construct it (validation happens here), populate any remaining
//! inputs, call `run()`, then read the filled tables or use the engine's
//! reconstruction helpers. Runs are single-threaded, deterministic and
//! infallible once construction succeeds.

pub mod error;
pub mod floyd;
pub mod knapsack;
pub mod obst;
pub mod probwin;
pub mod replacement;
pub mod table;

// Re-export the engines and common types with descriptive names
pub use error::{Error, Result};
pub use floyd::FloydWarshall;
pub use knapsack::{BoundedKnapsack, Item};
pub use obst::{BstNode, OptimalBst};
pub use probwin::SeriesProbability;
pub use replacement::ReplacementPlan;
pub use table::{Table, INFINITY};
