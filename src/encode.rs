//! Frame persistence.
//!
//! Sinks receive finished frames in render order and report where each one landed.

/// Generic frame sink trait and built-in sinks.
pub mod sink;
