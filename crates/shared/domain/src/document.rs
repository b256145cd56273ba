//! Document library entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::UserRole;

/// File format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Pdf,
    Excel,
    Doc,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentCategory {
    Report,
    Financial,
    Legal,
    Tax,
    Compliance,
}

impl std::str::FromStr for DocumentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "report" => Ok(DocumentCategory::Report),
            "financial" => Ok(DocumentCategory::Financial),
            "legal" => Ok(DocumentCategory::Legal),
            "tax" => Ok(DocumentCategory::Tax),
            "compliance" => Ok(DocumentCategory::Compliance),
            other => Err(format!("unknown document category: {}", other)),
        }
    }
}

/// Who may see a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    All,
    Investors,
    Admin,
}

impl AccessLevel {
    /// Check whether a role clears this access level
    pub fn permits(&self, role: UserRole) -> bool {
        match self {
            AccessLevel::All => true,
            AccessLevel::Investors => role.can_access(&UserRole::Investor),
            AccessLevel::Admin => role.is_admin(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub category: DocumentCategory,
    pub access_level: AccessLevel,
    /// Human-readable size label, e.g. "2.4 MB"
    pub size: String,
    pub uploaded_at: DateTime<Utc>,
    #[serde(default)]
    pub downloads: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
}
