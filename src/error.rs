use thiserror::Error;

/// Closed set of failures raised by the record store and service.
///
/// The boundary layer inspects the variant to choose a response; the core
/// never retries or reinterprets them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The referenced identifier has no live record.
    #[error("record not found: {id}")]
    NotFound { id: String },

    /// The candidate content collides with another live record's fingerprint.
    /// Carries the computed fingerprint for diagnostics.
    #[error("duplicate record content (fingerprint: {fingerprint})")]
    Duplicate { fingerprint: String },

    /// Opaque failure from a backing collaborator. Never produced by the
    /// in-memory store.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Label used for metrics/log status fields.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Duplicate { .. } => "duplicate",
            Self::Backend(_) => "backend_error",
        }
    }
}
