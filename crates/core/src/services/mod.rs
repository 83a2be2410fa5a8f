//! Filesystem-facing services: rebuilding the source tree and persisting a
//! full discovery run.

pub mod persist;
pub mod source_tree;

pub use persist::{save_discovery_result, SaveOutcome};
pub use source_tree::{write_source_tree, SourceTreeSummary};
