use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid colour {0:?}, expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("pixel surface error: {0}")]
    Surface(#[from] pixels::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
