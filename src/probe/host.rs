//! Host Runtime Abstraction
//!
//! The probe needs two facts only the embedding host can supply: the server's
//! version-report string and whether a given type name exists in the server's
//! runtime. Hosts implement [`HostRuntime`] and hand it to the probe at
//! startup; the probe never reaches into ambient global state itself.

use crate::probe::error::{ProbeError, ProbeResult};

/// Fully qualified name of the marker type that only the extended server API ships
pub const EXTENDED_API_MARKER: &str = "server.ext.ExtendedApiConfig";

/// Outcome of a type lookup in the host runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeResolution {
    /// The type exists in the current runtime
    Found,
    /// The type does not exist - a normal negative result
    NotFound,
    /// The lookup itself failed for some other reason
    Failed(String),
}

/// Runtime facts supplied by the embedding host
///
/// Implementations are expected to be cheap: one in-process string read and
/// one type-table lookup, no I/O.
pub trait HostRuntime: Send + Sync {
    /// The host's free-form version-report string, e.g. "1.16.5-R0.1-SNAPSHOT"
    fn server_version(&self) -> String;

    /// Attempt to resolve a fully qualified type name in the current runtime
    fn resolve_type(&self, qualified_name: &str) -> TypeResolution;
}

/// Check whether the extended server API is present.
///
/// `NotFound` is the expected answer on baseline servers and maps to `false`.
/// Any other lookup failure propagates; there is no sensible fallback when
/// the host cannot answer the question at all.
pub fn detect_extended_api(host: &dyn HostRuntime) -> ProbeResult<bool> {
    match host.resolve_type(EXTENDED_API_MARKER) {
        TypeResolution::Found => Ok(true),
        TypeResolution::NotFound => Ok(false),
        TypeResolution::Failed(cause) => Err(ProbeError::TypeResolution {
            type_name: EXTENDED_API_MARKER.to_string(),
            cause,
        }),
    }
}
