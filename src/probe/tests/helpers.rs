//! Test helper types for probe unit tests
//!
//! A host stub with canned answers, so test cases can exercise detection
//! without a real server runtime behind them.

use crate::probe::host::{HostRuntime, TypeResolution};

/// Host stub returning fixed answers
pub struct StaticHost {
    pub version: &'static str,
    pub resolution: TypeResolution,
}

impl StaticHost {
    /// A baseline server: marker type absent
    pub fn baseline(version: &'static str) -> Self {
        Self {
            version,
            resolution: TypeResolution::NotFound,
        }
    }

    /// An extended-API server: marker type present
    pub fn extended(version: &'static str) -> Self {
        Self {
            version,
            resolution: TypeResolution::Found,
        }
    }
}

impl HostRuntime for StaticHost {
    fn server_version(&self) -> String {
        self.version.to_string()
    }

    fn resolve_type(&self, _qualified_name: &str) -> TypeResolution {
        self.resolution.clone()
    }
}
