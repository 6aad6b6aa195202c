//! Domain types for the follows graph.
//!
//! This module contains the user record, its role enumeration, and the
//! result shapes returned by the traversal operations.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a user.
///
/// Comparison is exact and case-sensitive. Callers that want
/// case-insensitive identifiers normalize before constructing one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// Create a new user ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Parses an identifier exactly as given (no trimming or case folding).
///
/// Empty text and text containing whitespace are rejected.
impl FromStr for UserId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Error::InvalidUserId("id cannot be empty".to_string()));
        }
        if s.chars().any(char::is_whitespace) {
            return Err(Error::InvalidUserId(format!("'{s}' contains whitespace")));
        }
        Ok(Self(s.to_string()))
    }
}

/// Role of a user. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Currently enrolled
    Student,

    /// Teaching staff
    Teacher,

    /// Former student
    Graduate,
}

impl Role {
    /// All roles in menu order.
    pub const ALL: [Role; 3] = [Role::Student, Role::Teacher, Role::Graduate];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => write!(f, "student"),
            Self::Teacher => write!(f, "teacher"),
            Self::Graduate => write!(f, "graduate"),
        }
    }
}

impl FromStr for Role {
    type Err = Error;

    /// Accepts the English name, the menu number, or the Spanish label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "student" | "estudiante" => Ok(Self::Student),
            "2" | "teacher" | "profesor" => Ok(Self::Teacher),
            "3" | "graduate" | "egresado" => Ok(Self::Graduate),
            _ => Err(Error::InvalidRole(s.trim().to_string())),
        }
    }
}

/// A vertex of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, immutable once created
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Role
    pub role: Role,
}

impl User {
    /// Create a new user record
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
        }
    }
}

/// Outcome of a breadth-first traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BfsResult {
    /// Users in visit order, origin first
    pub order: Vec<UserId>,

    /// Number of users reached, origin included
    pub reachable: usize,
}

/// Outcome of a depth-first traversal over every user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DfsResult {
    /// Every user exactly once, in visit order
    pub order: Vec<UserId>,

    /// Whether a back-edge was found anywhere
    pub cycle_detected: bool,
}
