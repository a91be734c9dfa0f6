use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures of the local media devices (microphone, speaker output).
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("capture device unavailable: {0}")]
    Unavailable(String),

    #[error("capture permission denied")]
    PermissionDenied,

    #[error("playback error: {0}")]
    Playback(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum VigilError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("network error: {0}")]
    Network(String),

    #[error("assistant error: {0}")]
    Assistant(String),

    #[error("investigation error: {0}")]
    Investigation(String),

    #[error("{0}")]
    Other(String),
}
