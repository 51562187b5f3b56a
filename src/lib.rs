//! Server version and capability detection for UI plugin toolkits.
//!
//! The embedding host injects a [`probe::HostRuntime`] at startup; the probe
//! encodes the host's version string, checks for the extended server API, and
//! exposes a fixed set of capability flags the toolkit branches on.

pub mod core;
pub mod probe;

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Parse the API version string from build script into u32
pub fn get_toolkit_api_version() -> u32 {
    TOOLKIT_API_VERSION.parse().unwrap_or(20260805)
}
