//! Portal data service - Notifications, messages and read-only collections.
//!
//! Loads every collection once from the persistent store and keeps the
//! mutable ones (notifications, messages) in sync with it.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use common::AppResult;
use domain::{
    Company, Document, DocumentCategory, Message, NewMessage, Notification, PerformancePoint,
    UserRole,
};
use store_service_lib::PersistentStore;

use crate::views::{self, PerformanceSummary};

/// Portal collections with notification and message mutations.
///
/// Every mutation persists the new array before publishing it in memory, so a
/// failed write leaves both sides on the previous value.
#[async_trait]
pub trait PortalDataService: Send + Sync {
    async fn notifications(&self) -> Vec<Notification>;
    async fn messages(&self) -> Vec<Message>;

    /// Number of notifications not yet read
    async fn unread_count(&self) -> usize;

    /// Returns whether anything changed
    async fn mark_notification_read(&self, id: &str) -> AppResult<bool>;
    /// Returns how many notifications were flipped to read
    async fn mark_all_notifications_read(&self) -> AppResult<usize>;
    /// Returns whether a notification was removed
    async fn delete_notification(&self, id: &str) -> AppResult<bool>;

    async fn mark_message_read(&self, id: &str) -> AppResult<bool>;
    async fn send_message(&self, draft: NewMessage) -> AppResult<Message>;
}

/// In-memory copies of the portal collections backed by a [`PersistentStore`]
pub struct DataProvider {
    store: PersistentStore,
    documents: Vec<Document>,
    companies: Vec<Company>,
    performance: Vec<PerformancePoint>,
    notifications: RwLock<Vec<Notification>>,
    messages: RwLock<Vec<Message>>,
}

impl DataProvider {
    /// Read every collection once from the store
    pub async fn load(store: PersistentStore) -> AppResult<Self> {
        let documents = store.get_documents().await?;
        let companies = store.get_companies().await?;
        let performance = store.get_performance().await?;
        let notifications = store.get_notifications().await?;
        let messages = store.get_messages().await?;

        info!(
            documents = documents.len(),
            companies = companies.len(),
            notifications = notifications.len(),
            messages = messages.len(),
            "Portal data loaded"
        );

        Ok(Self {
            store,
            documents,
            companies,
            performance,
            notifications: RwLock::new(notifications),
            messages: RwLock::new(messages),
        })
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn performance(&self) -> &[PerformancePoint] {
        &self.performance
    }

    pub fn company(&self, id: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    pub fn documents_for_role(&self, role: UserRole) -> Vec<Document> {
        views::documents_for_role(&self.documents, role)
    }

    pub fn documents_in_category(&self, category: DocumentCategory) -> Vec<Document> {
        views::documents_in_category(&self.documents, category)
    }

    pub fn companies_by_valuation(&self) -> Vec<Company> {
        views::companies_by_valuation(&self.companies)
    }

    pub fn performance_summary(&self) -> Option<PerformanceSummary> {
        views::performance_summary(&self.performance)
    }

    pub async fn inbox(&self, user_id: &str) -> Vec<Message> {
        views::inbox(&self.messages.read().await, user_id)
    }

    pub async fn unread_message_count(&self, user_id: &str) -> usize {
        self.messages
            .read()
            .await
            .iter()
            .filter(|m| m.is_addressed_to(user_id) && !m.read)
            .count()
    }

    async fn commit_notifications(
        &self,
        current: &mut Vec<Notification>,
        next: Vec<Notification>,
    ) -> AppResult<bool> {
        if *current == next {
            return Ok(false);
        }
        self.store.set_notifications(&next).await?;
        *current = next;
        Ok(true)
    }

    async fn commit_messages(&self, current: &mut Vec<Message>, next: Vec<Message>) -> AppResult<bool> {
        if *current == next {
            return Ok(false);
        }
        self.store.set_messages(&next).await?;
        *current = next;
        Ok(true)
    }
}

#[async_trait]
impl PortalDataService for DataProvider {
    async fn notifications(&self) -> Vec<Notification> {
        self.notifications.read().await.clone()
    }

    async fn messages(&self) -> Vec<Message> {
        self.messages.read().await.clone()
    }

    async fn unread_count(&self) -> usize {
        self.notifications
            .read()
            .await
            .iter()
            .filter(|n| n.is_unread())
            .count()
    }

    async fn mark_notification_read(&self, id: &str) -> AppResult<bool> {
        let mut current = self.notifications.write().await;
        let next = current
            .iter()
            .cloned()
            .map(|mut n| {
                if n.id == id {
                    n.read = true;
                }
                n
            })
            .collect();

        let changed = self.commit_notifications(&mut current, next).await?;
        debug!(id, changed, "Notification marked read");
        Ok(changed)
    }

    async fn mark_all_notifications_read(&self) -> AppResult<usize> {
        let mut current = self.notifications.write().await;
        let flipped = current.iter().filter(|n| n.is_unread()).count();
        let next = current
            .iter()
            .cloned()
            .map(|mut n| {
                n.read = true;
                n
            })
            .collect();

        self.commit_notifications(&mut current, next).await?;
        debug!(flipped, "All notifications marked read");
        Ok(flipped)
    }

    async fn delete_notification(&self, id: &str) -> AppResult<bool> {
        let mut current = self.notifications.write().await;
        let next = current.iter().filter(|n| n.id != id).cloned().collect();

        let removed = self.commit_notifications(&mut current, next).await?;
        debug!(id, removed, "Notification deleted");
        Ok(removed)
    }

    async fn mark_message_read(&self, id: &str) -> AppResult<bool> {
        let mut current = self.messages.write().await;
        let next = current
            .iter()
            .cloned()
            .map(|mut m| {
                if m.id == id {
                    m.read = true;
                }
                m
            })
            .collect();

        let changed = self.commit_messages(&mut current, next).await?;
        debug!(id, changed, "Message marked read");
        Ok(changed)
    }

    async fn send_message(&self, draft: NewMessage) -> AppResult<Message> {
        let message = draft.into_message(Utc::now());
        let mut current = self.messages.write().await;
        let mut next = current.clone();
        next.push(message.clone());

        self.commit_messages(&mut current, next).await?;
        info!(message_id = %message.id, recipient = %message.recipient_id, "Message sent");
        Ok(message)
    }
}
