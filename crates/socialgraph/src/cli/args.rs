//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation. The same structs back the one-shot
//! subcommands and the interactive shell.

use clap::Parser;

use super::types::RoleArg;
use super::validators::{validate_name, validate_user_id};

/// Arguments for commands that take a single user id
#[derive(Parser, Debug, Clone)]
pub struct UserArgs {
    /// User id (case-insensitive)
    #[arg(value_parser = validate_user_id)]
    pub id: String,
}

/// Arguments for commands that take an ordered pair of users
#[derive(Parser, Debug, Clone)]
pub struct PairArgs {
    /// Follower (origin) user id
    #[arg(value_parser = validate_user_id)]
    pub from: String,

    /// Followed (destination) user id
    #[arg(value_parser = validate_user_id)]
    pub to: String,
}

/// Arguments for the `add` shell command
#[derive(Parser, Debug, Clone)]
pub struct AddArgs {
    /// New user id (case-insensitive, must be unused)
    #[arg(value_parser = validate_user_id)]
    pub id: String,

    /// Display name (quote names with spaces)
    #[arg(value_parser = validate_name)]
    pub name: String,

    /// Role
    #[arg(value_enum, ignore_case = true)]
    pub role: RoleArg,
}

/// Arguments for the `update` shell command
#[derive(Parser, Debug, Clone)]
pub struct UpdateArgs {
    /// User id to update
    #[arg(value_parser = validate_user_id)]
    pub id: String,

    /// New display name
    #[arg(short, long, value_parser = validate_name)]
    pub name: Option<String>,

    /// New role
    #[arg(short, long, value_enum, ignore_case = true)]
    pub role: Option<RoleArg>,
}
