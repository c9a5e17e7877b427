//! Static travel estimates.
//!
//! Duration and cost come from fixed per-mode constants; traffic and
//! warnings are heuristics over the departure hour. No live data is
//! consulted anywhere in this module.

mod estimator;
pub mod traffic;
pub mod warnings;

pub use estimator::{MAX_DISTANCE_KM, estimate_cost, estimate_duration, format_duration};
