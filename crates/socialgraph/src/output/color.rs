//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Success:        green   (accepted mutations, "no cycle")
//!   - Error:          red     (rejected operations, "cycle detected")
//!   - Warning:        yellow  (empty results)
//!   - Info/Reference: cyan    (user ids)
//!   - Emphasis:       bold    (section headers)
//!   - Muted:          dimmed  (field labels, separators)

use crate::domain::Role;
use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "warning" color (yellow) to text.
pub fn warning(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

/// Colorize a user ID (cyan).
pub(crate) fn colorize_id(id: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return id.to_string();
    }
    id.cyan().to_string()
}

/// Apply color to a role.
pub(crate) fn colorize_role(role: Role, config: &OutputConfig) -> String {
    let text = role.to_string();
    if !config.use_colors {
        return text;
    }
    match role {
        Role::Student => text.white().to_string(),
        Role::Teacher => text.magenta().to_string(),
        Role::Graduate => text.blue().to_string(),
    }
}

/// Bold text, for section headers.
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

/// Dimmed text, for labels and separators.
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}
