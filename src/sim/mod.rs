//! Simulation layer: fixed-timer stand-in for a real transport.

pub mod fixtures;
pub mod replies;
pub mod timeline;

/// Returns the sim module name for smoke checks.
pub fn module_name() -> &'static str {
    "sim"
}
