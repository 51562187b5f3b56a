//! Public API for the probe system
//!
//! This module provides the complete public API for the probe system.
//! External modules should import from here rather than directly from
//! internal modules.

use std::sync::OnceLock;

// Capability flags and detection
pub use crate::probe::capabilities::{Capabilities, ServerProbe};

// Error handling
pub use crate::probe::error::{ProbeError, ProbeResult};

// Host runtime abstraction
pub use crate::probe::host::{HostRuntime, TypeResolution, EXTENDED_API_MARKER};

// Diagnostics
pub use crate::probe::report::ProbeReport;

// Threshold table and version encoding
pub use crate::probe::thresholds::Threshold;
pub use crate::probe::version::parse_version;

/// Global probe instance, installed once at startup
static PROBE_SERVICE: OnceLock<ServerProbe> = OnceLock::new();

/// Run detection once and install the result as the process-wide probe.
///
/// Call this from the host's startup path, after constructing its
/// [`HostRuntime`]. The installed probe never changes afterwards; a second
/// call is rejected with `AlreadyInitialized`.
pub fn init_probe_service(host: &dyn HostRuntime) -> ProbeResult<()> {
    log::trace!("Initializing probe service");
    let probe = ServerProbe::detect(host)?;
    PROBE_SERVICE
        .set(probe)
        .map_err(|_| ProbeError::AlreadyInitialized)
}

/// Access the process-wide probe
///
/// Returns `NotInitialized` until `init_probe_service` has run. After that
/// every call returns the same immutable instance, lock-free.
pub fn probe_service() -> ProbeResult<&'static ServerProbe> {
    log::trace!("Acquiring probe service");
    PROBE_SERVICE.get().ok_or(ProbeError::NotInitialized)
}

/// The process-wide capability flags, if detection has run
///
/// Flag reads never fail once the service is installed; before installation
/// this returns `None`.
pub fn capabilities() -> Option<Capabilities> {
    PROBE_SERVICE.get().map(|probe| probe.capabilities())
}
