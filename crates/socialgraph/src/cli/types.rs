//! CLI value enums and domain type conversions.

use clap::ValueEnum;

use crate::domain::Role;

/// User role for CLI arguments
///
/// Accepts the English name, the menu number, or the Spanish label.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleArg {
    /// Currently enrolled
    #[value(aliases = ["1", "estudiante"])]
    Student,
    /// Teaching staff
    #[value(aliases = ["2", "profesor"])]
    Teacher,
    /// Former student
    #[value(aliases = ["3", "egresado"])]
    Graduate,
}

impl std::fmt::Display for RoleArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Role::from(*self))
    }
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Student => Role::Student,
            RoleArg::Teacher => Role::Teacher,
            RoleArg::Graduate => Role::Graduate,
        }
    }
}

impl From<Role> for RoleArg {
    fn from(role: Role) -> Self {
        match role {
            Role::Student => RoleArg::Student,
            Role::Teacher => RoleArg::Teacher,
            Role::Graduate => RoleArg::Graduate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_arg_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from(RoleArg::from(role)), role);
        }
    }

    #[test]
    fn test_role_arg_aliases() {
        assert_eq!(RoleArg::from_str("2", true).unwrap(), RoleArg::Teacher);
        assert_eq!(RoleArg::from_str("Egresado", true).unwrap(), RoleArg::Graduate);
        assert!(RoleArg::from_str("admin", true).is_err());
    }

    #[test]
    fn test_role_arg_display_matches_domain() {
        assert_eq!(RoleArg::Student.to_string(), "student");
    }
}
