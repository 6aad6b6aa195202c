//! Error types for socialgraph operations.
//!
//! The graph engine itself never fails: its operations report rejection
//! through `bool` results. These errors belong to the layers around it
//! (configuration, input parsing, the command surface).

use crate::domain::UserId;
use std::io;
use thiserror::Error;

/// The error type for socialgraph operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Role text outside the fixed enumeration.
    #[error("Invalid role '{0}'. Valid roles: student, teacher, graduate (or 1, 2, 3)")]
    InvalidRole(String),

    /// User identifier failed validation.
    #[error("Invalid user id: {0}")]
    InvalidUserId(String),

    /// User not found.
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// A command was rejected by the graph.
    #[error("{0}")]
    Command(String),
}

/// A specialized Result type for socialgraph operations.
pub type Result<T> = std::result::Result<T, Error>;
