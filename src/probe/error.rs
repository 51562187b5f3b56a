//! Probe Error Types

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProbeError {
    #[error("Type resolution failed for '{type_name}': {cause}")]
    TypeResolution { type_name: String, cause: String },

    #[error("Probe service is already initialised")]
    AlreadyInitialized,

    #[error("Probe service not initialised. Call init_probe_service first")]
    NotInitialized,
}

/// Result type for probe operations
pub type ProbeResult<T> = Result<T, ProbeError>;
