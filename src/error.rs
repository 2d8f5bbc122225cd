// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Content(ContentError),
}

/// Specific error types for content document loading.
///
/// A content failure is fatal for the session: the caller replaces the
/// normal page with a minimal error view carrying this error's message.
#[derive(Debug, Clone)]
pub enum ContentError {
    /// The request could not be performed (DNS, connection, TLS, ...).
    Network(String),

    /// The server answered with a non-success HTTP status.
    Status(u16),

    /// The document body is not valid JSON of the expected shape.
    MalformedJson(String),

    /// The document could not be read from the local filesystem.
    Io(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Network(msg) => write!(f, "Network error: {}", msg),
            ContentError::Status(code) => write!(f, "HTTP error! status: {}", code),
            ContentError::MalformedJson(msg) => write!(f, "Malformed content document: {}", msg),
            ContentError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Content(e) => write!(f, "Content Error: {}", e),
        }
    }
}

impl From<ContentError> for Error {
    fn from(err: ContentError) -> Self {
        Error::Content(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<std::io::Error> for ContentError {
    fn from(err: std::io::Error) -> Self {
        ContentError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::MalformedJson(err.to_string())
    }
}

impl From<reqwest::Error> for ContentError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ContentError::Status(status.as_u16()),
            None => ContentError::Network(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
