//! Data-driven kingdom content and loaders.
//!
//! This crate houses the static rules content a kingdom is evaluated against
//! and provides loaders for RON/TOML data files:
//! - Structure catalog (data-driven via RON)
//! - Settlement roster referencing catalog names (data-driven via RON)
//! - Activity → skill table (data-driven via TOML)
//! - Kingdom configuration (data-driven via TOML)
//!
//! All loaders use kingdom-core types directly with serde for RON/TOML
//! deserialization.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::StructureCatalog;

#[cfg(feature = "loaders")]
pub use loaders::{
    ActivityLoader, ConfigLoader, ContentFactory, KingdomContent, SettlementLoader,
    SettlementSpec, StructureLoader,
};
