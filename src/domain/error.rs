//! Error types.

/// Top-level error type for tenencias.
#[derive(Debug, thiserror::Error)]
pub enum TenenciasError {
    #[error("connection error: {reason}")]
    Connection { reason: String },

    #[error("feed error: {reason}")]
    Feed { reason: String },

    #[error("config error in {file}: {reason}")]
    Config { file: String, reason: String },

    #[error("snapshot store error: {reason}")]
    Persistence { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&TenenciasError> for std::process::ExitCode {
    fn from(err: &TenenciasError) -> Self {
        let code: u8 = match err {
            TenenciasError::Io(_) => 1,
            TenenciasError::Config { .. } => 2,
            TenenciasError::Connection { .. } | TenenciasError::Feed { .. } => 3,
            TenenciasError::Persistence { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
