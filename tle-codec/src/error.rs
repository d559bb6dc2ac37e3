use crate::{config::ConfigError, fields::FieldError};
use nom::error::ErrorKind;
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed input, {leftover} trailing line(s) do not form a complete TLE entry")]
    MalformedInput { leftover: usize },
    #[error("Failed to group TLE lines at line {line} ({kind:?})")]
    Grouping { line: usize, kind: ErrorKind },
    #[error("TLE entry {record} ('{name}'). {source}")]
    Field {
        record: usize,
        name: String,
        #[source]
        source: FieldError,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
