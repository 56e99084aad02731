use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read feed catalog {path}: {source}")]
    FeedsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse feed catalog: {0}")]
    FeedsFileParse(#[source] serde_yaml::Error),

    #[error("invalid feed catalog: {0}")]
    Validation(String),
}
