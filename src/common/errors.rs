use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DraftError {
    #[error("Invalid coordinate: {0:?}")]
    InvalidCoordinate(String),
}
