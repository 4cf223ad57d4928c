use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Launch error: {0}")]
    Launch(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<chromiumoxide::error::CdpError> for Error {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Error::Session(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
