//! Error type for project file loading

use std::{io, result};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Underlying cause of error is I/O related
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Underlying cause of error is JSON related
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        match err {
            Error::IoError(e) => e,
            _ => io::Error::new(io::ErrorKind::InvalidData, format!("{}", err)),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
