//! Error Types

use thiserror::Error;

/// Main error type
#[derive(Debug, Clone, Error)]
pub enum TempoError {
    #[error("Config error: {message}")]
    Config { message: String },
    #[error("Audio error: {message}")]
    Audio { message: String },
    #[error("Transcode error: {message}")]
    Transcode { message: String },
    #[error("IO error: {message}")]
    Io { message: String },
    #[error("Processing error: {message}")]
    Processing { message: String },
}

impl TempoError {
    pub fn config<S: Into<String>>(msg: S) -> Self { Self::Config { message: msg.into() } }
    pub fn audio<S: Into<String>>(msg: S) -> Self { Self::Audio { message: msg.into() } }
    pub fn transcode<S: Into<String>>(msg: S) -> Self { Self::Transcode { message: msg.into() } }
    pub fn io<S: Into<String>>(msg: S) -> Self { Self::Io { message: msg.into() } }
    pub fn processing<S: Into<String>>(msg: S) -> Self { Self::Processing { message: msg.into() } }
}

pub type Result<T> = std::result::Result<T, TempoError>;

impl From<std::io::Error> for TempoError {
    fn from(err: std::io::Error) -> Self { Self::io(err.to_string()) }
}

impl From<lofty::error::LoftyError> for TempoError {
    fn from(err: lofty::error::LoftyError) -> Self { Self::audio(format!("lofty: {}", err)) }
}
