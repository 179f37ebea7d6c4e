use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Usage(#[from] clap::Error),

    #[error("{}: {source}\n{hint}", .path.display())]
    Config {
        path: PathBuf,
        source: std::io::Error,
        hint: &'static str,
    },

    #[error("Invalid config file {}: {message}", .path.display())]
    ConfigFormat { path: PathBuf, message: String },

    #[error("Unknown friend {0}")]
    UnknownFriend(String),

    #[error("Ambiguous friend {requested}, possible candidates: {}", .candidates.join(", "))]
    AmbiguousFriend {
        requested: String,
        candidates: Vec<String>,
    },

    #[error("Error reading from {url}\n{message}")]
    Api {
        url: String,
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("Error reading from {url}\n{source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid JSON from {url}: {source}")]
    Json { url: String, source: json::Error },

    #[error("Unexpected response shape: {0}")]
    MalformedResponse(String),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
