//! Domain layer - Core portal entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! All types here are shared by the store, session and portal services.

pub mod company;
pub mod constants;
pub mod document;
pub mod error;
pub mod investor;
pub mod message;
pub mod notification;
pub mod performance;
pub mod user;

pub use company::{Company, CompanyMetrics};
pub use constants::*;
pub use document::{AccessLevel, Document, DocumentCategory, DocumentType};
pub use error::{DomainError, DomainResult};
pub use investor::{Investor, PortfolioHolding};
pub use message::{Message, NewMessage};
pub use notification::{Notification, NotificationType};
pub use performance::PerformancePoint;
pub use user::{
    avatar_url, display_name_from_email, ChangePassword, LoginRequest, UpdateProfile, User,
    UserRole, UserStatus,
};
