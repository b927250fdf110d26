use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("unknown production location: {0}")]
    UnknownFacility(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
