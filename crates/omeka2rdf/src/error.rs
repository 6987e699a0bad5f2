//! Error types shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Why a single record could not be converted. The rest of the batch continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("record has no @id")]
    MissingId,

    #[error("record @id is not a usable URI string: {0}")]
    InvalidId(String),

    #[error("field {field} is malformed: {reason}")]
    MalformedField { field: String, reason: &'static str },
}

/// Failure to retrieve a record over HTTP.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("response from {url} is not a JSON record: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure to write a serialized graph.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("could not create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure to load record lists from disk.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a JSON array of records: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure to load the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown format: {0}. Use 'ntriples' or 'turtle'.")]
    UnknownFormat(String),
}
