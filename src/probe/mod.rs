//! Server Probe Module
//!
//! Determines the host server's version and feature support once at startup
//! and exposes immutable capability flags for the rest of the toolkit to
//! branch on.

// Internal modules - all access should go through api module
pub(crate) mod capabilities;
pub(crate) mod error;
pub(crate) mod host;
pub(crate) mod report;
pub(crate) mod thresholds;
pub(crate) mod version;

// Public API module - the only public interface for the probe system
pub mod api;

#[cfg(test)]
mod tests;
