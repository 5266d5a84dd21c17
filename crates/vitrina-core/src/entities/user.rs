//! User entity and role

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Account role. Stored in the database as the Spanish display string,
/// which is also what the audit trail and dashboards group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Explorador")]
    Explorer,
    #[serde(rename = "Emprendedor")]
    Owner,
    #[serde(rename = "Administrador")]
    Administrator,
}

impl Role {
    /// Database / display representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Explorer => "Explorador",
            Self::Owner => "Emprendedor",
            Self::Administrator => "Administrador",
        }
    }

    /// Parse the stored representation back into a role
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Explorador" => Ok(Self::Explorer),
            "Emprendedor" => Ok(Self::Owner),
            "Administrador" => Ok(Self::Administrator),
            other => Err(DomainError::InvalidRole(other.to_string())),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_explorer(self) -> bool {
        matches!(self, Self::Explorer)
    }

    #[inline]
    #[must_use]
    pub fn is_owner(self) -> bool {
        matches!(self, Self::Owner)
    }

    #[inline]
    #[must_use]
    pub fn is_administrator(self) -> bool {
        matches!(self, Self::Administrator)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s)
    }
}

/// User account. The password hash lives only in the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Whether this account may administer other entities
    #[inline]
    pub fn is_administrator(&self) -> bool {
        self.role.is_administrator()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Explorer, Role::Owner, Role::Administrator] {
            assert_eq!(Role::parse(role.as_str()).unwrap(), role);
        }
    }

    #[test]
    fn test_role_parse_rejects_unknown() {
        assert!(Role::parse("Visitante").is_err());
        assert!(Role::parse("explorador").is_err());
    }

    #[test]
    fn test_role_display_is_spanish() {
        assert_eq!(Role::Explorer.to_string(), "Explorador");
        assert_eq!(Role::Owner.to_string(), "Emprendedor");
        assert_eq!(Role::Administrator.to_string(), "Administrador");
    }

    #[test]
    fn test_role_serde_uses_stored_names() {
        let json = serde_json::to_string(&Role::Owner).unwrap();
        assert_eq!(json, "\"Emprendedor\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::Owner);
    }
}
