use std::io;
use std::path::PathBuf;
use std::result;

use thiserror::Error;
pub type Result<T> = result::Result<T, ConcertsGenError>;

#[derive(Error, Debug)]
pub enum ConcertsGenError {
    #[error("FileAccess: can't read {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("ParseError: {0:?}")]
    ParseError(#[from] serde_json::Error),
    #[error("EmptySource: {0:?}")]
    EmptySource(String),
    #[error("StoreError: {0:?}")]
    StoreError(#[from] rusqlite::Error),
    #[error("Internal: {0:?}")]
    Internal(String),
}
