use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Catalog request failed: {0}")]
    Transport(String),

    #[error("Catalog responded with HTTP {0}")]
    Status(u16),

    #[error("Malformed catalog payload: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
