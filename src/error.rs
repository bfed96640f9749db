//! Error kinds raised while rendering a site

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the input, fill and output phases
#[derive(Error, Debug)]
pub enum Error {
    #[error("input not found: {path:?}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read {path:?}: {message}")]
    InputRead { path: PathBuf, message: String },

    #[error("front matter in {path}: {source}")]
    FrontMatterParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{path:?} is produced by both {first} and {second}")]
    DuplicateOutput {
        path: PathBuf,
        first: String,
        second: String,
    },

    #[error("execute layout for {path}: {message}")]
    TemplateExecution { path: String, message: String },

    #[error("write {path:?}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("encode feed: {0}")]
    FeedEncode(String),

    #[error("{} page(s) failed to write: {}", .0.len(), join_errors(.0))]
    Output(Vec<Error>),
}

fn join_errors(errors: &[Error]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, Error>;
