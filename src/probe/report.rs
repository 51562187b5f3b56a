//! Probe Report
//!
//! Serialisable snapshot of what detection concluded, for embedding hosts
//! that want the probe's view in their own diagnostics output.

use crate::probe::capabilities::{Capabilities, ServerProbe};
use crate::probe::thresholds::Threshold;
use strum::IntoEnumIterator;

/// Snapshot of the probe's conclusions
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProbeReport {
    pub toolkit_api_version: u32,
    pub raw_version: String,
    pub version: u32,
    pub capabilities: Capabilities,
    pub thresholds: Vec<ThresholdEntry>,
}

/// One named threshold and the encoded version it compares against
#[derive(Debug, Clone, serde::Serialize)]
pub struct ThresholdEntry {
    pub name: String,
    pub version: u32,
}

impl ProbeReport {
    /// Build a report from a completed detection run
    pub fn from_probe(probe: &ServerProbe) -> Self {
        Self {
            toolkit_api_version: crate::core::version::get_api_version(),
            raw_version: probe.raw_version().to_string(),
            version: probe.version(),
            capabilities: probe.capabilities(),
            thresholds: Threshold::iter()
                .map(|threshold| ThresholdEntry {
                    name: threshold.to_string(),
                    version: threshold.version(),
                })
                .collect(),
        }
    }
}
