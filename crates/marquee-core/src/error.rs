use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown field: {0}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, Error>;
