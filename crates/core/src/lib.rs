//! discovery-core
//!
//! Core library that turns the results of a contract discovery pass into a
//! deterministic project snapshot.
//!
//! A run produces two artifacts under `discovery/<project>/`:
//! - `discovered.json`: one canonical descriptor (contracts, EOAs, merged ABIs).
//! - `.code/`: the verified source code of every contract, one folder per
//!   contract and source slot.
//!
//! All substantive logic lives here so it can be tested without the CLI.

pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod services;
pub mod snapshot;

pub use error::{DiscoveryError, DiscoveryResult};

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
