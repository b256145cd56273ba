//! Investor entity: a portal user with holdings and financial aggregates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::Document;
use crate::notification::Notification;
use crate::user::{avatar_url, display_name_from_email, User, UserRole, UserStatus};

/// A position in one portfolio company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioHolding {
    pub company_id: String,
    pub company_name: String,
    pub shares: u64,
    pub invested: f64,
    pub current_value: f64,
    pub acquired_at: DateTime<Utc>,
}

/// Investor domain entity
///
/// The aggregates and owned collections are persisted with the record but
/// are not recomputed from holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investor {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub total_invested: f64,
    #[serde(default)]
    pub current_value: f64,
    #[serde(default)]
    pub total_return: f64,
    #[serde(default)]
    pub portfolio: Vec<PortfolioHolding>,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl Investor {
    /// Wrap a user with zeroed aggregates and empty collections
    pub fn from_user(user: User) -> Self {
        Self {
            user,
            total_invested: 0.0,
            current_value: 0.0,
            total_return: 0.0,
            portfolio: Vec::new(),
            documents: Vec::new(),
            notifications: Vec::new(),
        }
    }

    /// Synthesize a fresh investor for an email nobody has used yet
    pub fn from_email(email: &str, now: DateTime<Utc>) -> Self {
        let name = display_name_from_email(email);
        let avatar = avatar_url(&name);

        Self::from_user(User {
            id: Uuid::new_v4().to_string(),
            name,
            email: email.trim().to_string(),
            role: UserRole::Investor,
            phone: None,
            company: None,
            avatar: Some(avatar),
            joined_at: now,
            last_login: Some(now),
            status: UserStatus::Active,
        })
    }

    pub fn id(&self) -> &str {
        &self.user.id
    }

    pub fn email(&self) -> &str {
        &self.user.email
    }

    pub fn name(&self) -> &str {
        &self.user.name
    }

    /// Record a successful sign-in
    pub fn touch_login(&mut self, now: DateTime<Utc>) {
        self.user.last_login = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_email_synthesizes_active_investor() {
        let now = Utc::now();
        let investor = Investor::from_email(" jean.pierre@x.com ", now);

        assert_eq!(investor.name(), "Jean Pierre");
        assert_eq!(investor.email(), "jean.pierre@x.com");
        assert_eq!(investor.user.status, UserStatus::Active);
        assert_eq!(investor.user.role, UserRole::Investor);
        assert_eq!(investor.user.joined_at, now);
        assert_eq!(investor.user.last_login, Some(now));
        assert!(investor.user.avatar.is_some());
        assert_eq!(investor.total_invested, 0.0);
        assert!(investor.portfolio.is_empty());
        assert!(Uuid::parse_str(investor.id()).is_ok());
    }

    #[test]
    fn test_serialized_layout_is_flat_camel_case() {
        let investor = Investor::from_email("ada@x.com", Utc::now());
        let json = serde_json::to_value(&investor).unwrap();

        assert_eq!(json["name"], "Ada");
        assert!(json.get("user").is_none());
        assert!(json.get("joinedAt").is_some());
        assert!(json.get("totalInvested").is_some());
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn test_missing_aggregates_default_to_zero() {
        let json = r#"{
            "id": "inv-9",
            "name": "Old Record",
            "email": "old@x.com",
            "role": "investor",
            "joinedAt": "2023-01-01T00:00:00Z"
        }"#;
        let investor: Investor = serde_json::from_str(json).unwrap();

        assert_eq!(investor.current_value, 0.0);
        assert!(investor.documents.is_empty());
        assert_eq!(investor.user.status, UserStatus::Active);
    }
}
