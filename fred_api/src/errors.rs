//! Error types for the API client.

use std::fmt::Display;

/// Coarse classification of an [`Error`], stable across context wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A response with a usable status could not be decoded.
    Parse,
    /// The request never produced a status (connection, timeout, body read).
    Transport,
    /// The API rejected the request (HTTP 400).
    InvalidRequest,
    /// The endpoint was not found (HTTP 404).
    NotFound,
    /// Any other non-success status.
    UnknownServer,
    /// A single-entity endpoint returned zero or several entities.
    UnexpectedCount,
    /// A response format other than `json` or `xml` was requested.
    UnknownResponseFormat,
    /// The client could not be configured (bad API key, base URL, environment).
    InvalidConfig,
}

/// Errors that can occur when making API requests.
///
/// Every variant carries a human-readable message. Callers and endpoint
/// wrappers add context with [`Error::context`], which prefixes the message
/// and never drops the original cause.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The body of a response could not be decoded.
    #[error("{0}")]
    Parse(String),
    /// Network or I/O failure before any status was known.
    #[error("{0}")]
    Transport(String),
    /// HTTP 400. `reason` is the message sent back by the server, verbatim.
    #[error("{message}")]
    InvalidRequest { message: String, reason: String },
    /// HTTP 404.
    #[error("{0}")]
    NotFound(String),
    /// Any other non-success status, with the code and message from the error envelope.
    #[error("{message}")]
    UnknownServer {
        status: u16,
        code: u32,
        message: String,
    },
    /// A singular endpoint returned an empty list or more than one entity.
    #[error("{0}")]
    UnexpectedCount(String),
    /// The requested format is neither JSON nor XML.
    #[error("{0}")]
    UnknownResponseFormat(String),
    /// Client construction failed.
    #[error("{0}")]
    InvalidConfig(String),
}

impl Error {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse(_) => ErrorKind::Parse,
            Error::Transport(_) => ErrorKind::Transport,
            Error::InvalidRequest { .. } => ErrorKind::InvalidRequest,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::UnknownServer { .. } => ErrorKind::UnknownServer,
            Error::UnexpectedCount(_) => ErrorKind::UnexpectedCount,
            Error::UnknownResponseFormat(_) => ErrorKind::UnknownResponseFormat,
            Error::InvalidConfig(_) => ErrorKind::InvalidConfig,
        }
    }

    /// Prefixes `ctx` ahead of the current message, keeping the kind and any
    /// server-provided fields intact.
    pub fn context(self, ctx: impl Display) -> Self {
        let prefix = |msg: String| format!("{}: {}", ctx, msg);
        match self {
            Error::Parse(msg) => Error::Parse(prefix(msg)),
            Error::Transport(msg) => Error::Transport(prefix(msg)),
            Error::InvalidRequest { message, reason } => Error::InvalidRequest {
                message: prefix(message),
                reason,
            },
            Error::NotFound(msg) => Error::NotFound(prefix(msg)),
            Error::UnknownServer {
                status,
                code,
                message,
            } => Error::UnknownServer {
                status,
                code,
                message: prefix(message),
            },
            Error::UnexpectedCount(msg) => Error::UnexpectedCount(prefix(msg)),
            Error::UnknownResponseFormat(msg) => Error::UnknownResponseFormat(prefix(msg)),
            Error::InvalidConfig(msg) => Error::InvalidConfig(prefix(msg)),
        }
    }
}

/// Why a scalar value could not be decoded from its wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The input does not match the fixed layout (dates, timestamps).
    BadFormat,
    /// The input is well formed but not a known value (codes, numbers).
    BadValue,
}

/// Failure of one of the scalar codecs in [`crate::types`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DecodeError {
    pub kind: DecodeErrorKind,
    pub message: String,
}

impl DecodeError {
    pub(crate) fn bad_format(message: impl Into<String>) -> Self {
        Self {
            kind: DecodeErrorKind::BadFormat,
            message: message.into(),
        }
    }

    pub(crate) fn bad_value(message: impl Into<String>) -> Self {
        Self {
            kind: DecodeErrorKind::BadValue,
            message: message.into(),
        }
    }
}
