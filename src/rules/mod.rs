//! Game rules for Network
//!
//! This module implements the rule set:
//! - Move legality (empty target, own source, opponent goal strips off limits)
//! - Network detection (six or more chips, goal to goal, no straight triples)

pub mod legality;
pub mod network;

// Re-exports for convenient access
pub use legality::{is_legal_target, is_valid_move};
pub use network::{has_network, is_valid_network, Slope};
