//! Traits describing read-only rules data owned by collaborators.
//!
//! Oracles answer lookups the engine needs but does not own, such as which
//! skills a kingdom activity is rolled with. Concrete implementations live in
//! content loaders; [`ActivityTable`] is the in-memory default.
mod activities;

pub use activities::{ActivityOracle, ActivityTable};
