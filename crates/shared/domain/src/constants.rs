//! Domain-level constants.
//!
//! Storage keys, role names and the placeholder avatar service.

// =============================================================================
// Storage Keys
// =============================================================================

/// Investor collection
pub const KEY_INVESTORS: &str = "portal_investors";

/// Portfolio company collection
pub const KEY_COMPANIES: &str = "portal_companies";

/// Document library
pub const KEY_DOCUMENTS: &str = "portal_documents";

/// Notification feed
pub const KEY_NOTIFICATIONS: &str = "portal_notifications";

/// Portfolio performance series
pub const KEY_PERFORMANCE: &str = "portal_performance";

/// Message threads
pub const KEY_MESSAGES: &str = "portal_messages";

/// Pointer to the signed-in investor
pub const KEY_CURRENT_USER: &str = "portal_current_user";

/// Every collection key written by the seed initializer.
pub const COLLECTION_KEYS: &[&str] = &[
    KEY_INVESTORS,
    KEY_COMPANIES,
    KEY_DOCUMENTS,
    KEY_NOTIFICATIONS,
    KEY_PERFORMANCE,
    KEY_MESSAGES,
];

// =============================================================================
// User Roles
// =============================================================================

/// Default role for portal users
pub const ROLE_INVESTOR: &str = "investor";

/// Back-office role
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// Profiles
// =============================================================================

/// Base URL of the generated placeholder avatars
pub const AVATAR_PLACEHOLDER_URL: &str = "https://ui-avatars.com/api/";

/// Background colour passed to the avatar generator
pub const AVATAR_BACKGROUND: &str = "1e3a5f";

/// Character in an email local-part that separates name words
pub const NAME_SEPARATOR: char = '.';
