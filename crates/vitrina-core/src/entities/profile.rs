//! Role profiles and the tagged profile union

use chrono::NaiveDate;

use super::user::Role;
use crate::error::DomainError;

/// Preference tags the admin dashboard knows how to chart.
/// Free text outside this list is stored but charted as "other".
pub const KNOWN_PREFERENCES: [&str; 6] = [
    "Comida",
    "Deportes",
    "Ocio",
    "Arte y Cultura",
    "Naturaleza",
    "Compras",
];

/// Date format accepted for birth dates
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a birth date in strict `AAAA-MM-DD` form.
///
/// An empty string means "not provided" and maps to `None`; anything else
/// must parse or the whole surrounding mutation is rejected.
pub fn parse_birth_date(input: &str) -> Result<Option<NaiveDate>, DomainError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, BIRTH_DATE_FORMAT)
        .map(Some)
        .map_err(|_| DomainError::InvalidDate(trimmed.to_string()))
}

/// Explorer profile: personal data plus a free-text preference tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerProfile {
    pub id: i64,
    pub user_id: i64,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub second_last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub preference: Option<String>,
}

impl ExplorerProfile {
    /// "first last" display form, skipping missing parts
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut parts = Vec::new();
        if let Some(first) = self.first_name.as_deref() {
            parts.push(first);
        }
        if let Some(last) = self.last_name.as_deref() {
            parts.push(last);
        }
        parts.join(" ")
    }
}

/// Owner ("emprendedor") profile: personal data only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerProfile {
    pub id: i64,
    pub user_id: i64,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub second_last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
}

/// Tagged union over the role profiles.
///
/// A user has at most one profile and its variant always matches the account
/// role, so orphaned or duplicate cross-role profiles cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserProfile {
    Explorer(ExplorerProfile),
    Owner(OwnerProfile),
}

impl UserProfile {
    /// The role this profile belongs to
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::Explorer(_) => Role::Explorer,
            Self::Owner(_) => Role::Owner,
        }
    }

    /// Owning user id
    #[must_use]
    pub fn user_id(&self) -> i64 {
        match self {
            Self::Explorer(p) => p.user_id,
            Self::Owner(p) => p.user_id,
        }
    }

    /// Unwrap the explorer variant
    #[must_use]
    pub fn as_explorer(&self) -> Option<&ExplorerProfile> {
        match self {
            Self::Explorer(p) => Some(p),
            Self::Owner(_) => None,
        }
    }

    /// Unwrap the owner variant
    #[must_use]
    pub fn as_owner(&self) -> Option<&OwnerProfile> {
        match self {
            Self::Owner(p) => Some(p),
            Self::Explorer(_) => None,
        }
    }
}
