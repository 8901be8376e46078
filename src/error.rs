use crate::hardware::HardwareId;

/// Result type for provider operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for provider and backend operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The machine exposes no usable CPU temperature sensor
    #[error("{0}")]
    PlatformNotSupported(String),

    #[error("Temperature provider is not initialized")]
    NotInitialized,

    #[error("Monitoring session is closed")]
    SessionClosed,

    #[error("Unknown hardware node: {0}")]
    UnknownHardware(HardwareId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub(crate) fn platform_not_supported<S: Into<String>>(msg: S) -> Self {
        Error::PlatformNotSupported(msg.into())
    }

    pub(crate) fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Error::InvalidConfig(msg.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::invalid_config(err.to_string())
    }
}
