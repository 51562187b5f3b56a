//! Capability Flag Derivation
//!
//! The probe's output: five immutable booleans derived from the encoded
//! server version and the extended-API check. Detection runs once; the flags
//! never change for the lifetime of the process.

use crate::probe::error::ProbeResult;
use crate::probe::host::{detect_extended_api, HostRuntime};
use crate::probe::thresholds::Threshold;
use crate::probe::version::parse_version;

/// The five feature-support flags the toolkit branches on
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Capabilities {
    /// The extended server API is present
    pub extended_api: bool,
    /// Rich text components are unavailable; fall back to legacy strings.
    /// Always set on baseline servers, whatever their version.
    pub component_legacy: bool,
    /// Items predate the material flattening
    pub item_legacy: bool,
    /// Unbreakable is not available on item meta yet
    pub unbreakable_legacy: bool,
    /// Persistent data containers are available
    pub pdc_supported: bool,
}

impl Capabilities {
    /// Derive all flags from the encoded server version and the variant flag.
    ///
    /// Version 0 (unrecognisable version string) conservatively reports the
    /// oldest feature set: every legacy flag set, `pdc_supported` unset.
    pub fn derive(version: u32, extended_api: bool) -> Self {
        Self {
            extended_api,
            component_legacy: !extended_api || version < Threshold::TextComponents.version(),
            item_legacy: version < Threshold::ItemFlattening.version(),
            unbreakable_legacy: version < Threshold::UnbreakableMeta.version(),
            pdc_supported: version >= Threshold::PersistentData.version(),
        }
    }
}

/// Completed detection run: the encoded version plus the derived flags
#[derive(Debug, Clone)]
pub struct ServerProbe {
    raw_version: String,
    version: u32,
    capabilities: Capabilities,
}

impl ServerProbe {
    /// Run detection against the injected host runtime.
    ///
    /// Fails only when the extended-API lookup fails with something other
    /// than "type not found"; an unrecognisable version string is not an
    /// error and degrades to version 0.
    pub fn detect(host: &dyn HostRuntime) -> ProbeResult<Self> {
        let raw_version = host.server_version();
        let version = parse_version(&raw_version);
        let extended_api = detect_extended_api(host)?;
        let capabilities = Capabilities::derive(version, extended_api);

        log::debug!(
            "Server version '{}' encoded as {}, extended API present: {}",
            raw_version,
            version,
            extended_api
        );
        log::debug!("Derived capabilities: {:?}", capabilities);

        Ok(Self {
            raw_version,
            version,
            capabilities,
        })
    }

    /// The version-report string exactly as the host supplied it
    pub fn raw_version(&self) -> &str {
        &self.raw_version
    }

    /// The encoded server version, e.g. 1165 for "1.16.5"
    pub fn version(&self) -> u32 {
        self.version
    }

    /// The derived feature-support flags
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }
}
