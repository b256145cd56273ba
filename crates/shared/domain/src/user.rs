//! User entity, roles and the profile/login request types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{
    AVATAR_BACKGROUND, AVATAR_PLACEHOLDER_URL, NAME_SEPARATOR, ROLE_ADMIN, ROLE_INVESTOR,
};
use crate::error::DomainResult;

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Investor,
    Admin,
}

impl UserRole {
    /// Check if this role has back-office privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Check if this role can access a required role
    pub fn can_access(&self, required: &UserRole) -> bool {
        match self {
            UserRole::Admin => true,
            UserRole::Investor => matches!(required, UserRole::Investor),
        }
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => UserRole::Admin,
            _ => UserRole::Investor,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", ROLE_ADMIN),
            UserRole::Investor => write!(f, "{}", ROLE_INVESTOR),
        }
    }
}

/// Account lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

/// Portal user: identity, profile and lifecycle fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub joined_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: UserStatus,
}

impl User {
    /// Case-insensitive email comparison
    pub fn has_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.trim().to_lowercase()
    }

    /// Merge the provided profile fields, leaving the rest untouched
    pub fn apply(&mut self, update: UpdateProfile) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(company) = update.company {
            self.company = Some(company);
        }
        if let Some(avatar) = update.avatar {
            self.avatar = Some(avatar);
        }
    }
}

/// Derive a display name from an email address.
///
/// Dots in the local-part become spaces and every space-separated word gets
/// an upper-case first letter: `jean.pierre@x.com` becomes `Jean Pierre`.
pub fn display_name_from_email(email: &str) -> String {
    let local = email.trim().split('@').next().unwrap_or_default();

    local
        .replace(NAME_SEPARATOR, " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Placeholder avatar URL for a display name
pub fn avatar_url(name: &str) -> String {
    format!(
        "{}?name={}&background={}&color=fff",
        AVATAR_PLACEHOLDER_URL,
        name.split_whitespace().collect::<Vec<_>>().join("+"),
        AVATAR_BACKGROUND
    )
}

/// Login form payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address, the only field that identifies the investor
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Accepted but never checked
    pub password: String,
}

impl LoginRequest {
    /// Build a request with the email trimmed
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
        .normalized()
    }

    /// Trim surrounding whitespace from the email
    pub fn normalized(mut self) -> Self {
        self.email = self.email.trim().to_string();
        self
    }

    /// Run the form validation rules against the trimmed email
    pub fn check(&self) -> DomainResult<()> {
        self.clone().normalized().validate()?;
        Ok(())
    }
}

/// Partial profile update; `None` fields are left as they are
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub avatar: Option<String>,
}

impl UpdateProfile {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.company.is_none()
            && self.avatar.is_none()
    }
}

/// Password change form payload
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePassword {
    pub current_password: String,
    pub new_password: String,
}
