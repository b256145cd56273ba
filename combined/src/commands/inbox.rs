//! Notification and message commands.

use common::{AppResult, OptionExt};
use domain::{Message, NewMessage, Notification};
use portal_service_lib::PortalDataService;

use super::Portal;
use crate::cli::{MessageAction, NotificationAction};

pub async fn notifications(portal: &Portal, action: Option<NotificationAction>) -> AppResult<()> {
    portal.signed_in()?;
    let data = &portal.data;

    match action.unwrap_or(NotificationAction::List) {
        NotificationAction::List => {
            let notifications = data.notifications().await;
            let unread = data.unread_count().await;
            portal.emit(&notifications, |list| print_notifications(list, unread))
        }
        NotificationAction::Read { id } => {
            let changed = data.mark_notification_read(&id).await?;
            outcome(changed, "Marked read", "No unread notification with that id");
            Ok(())
        }
        NotificationAction::ReadAll => {
            let flipped = data.mark_all_notifications_read().await?;
            println!("Marked {} notification(s) read", flipped);
            Ok(())
        }
        NotificationAction::Delete { id } => {
            let removed = data.delete_notification(&id).await?;
            outcome(removed, "Deleted", "No notification with that id");
            Ok(())
        }
    }
}

pub async fn messages(portal: &Portal, action: Option<MessageAction>) -> AppResult<()> {
    let me = portal.signed_in()?;
    let data = &portal.data;

    match action.unwrap_or(MessageAction::List) {
        MessageAction::List => {
            let inbox = data.inbox(me.id()).await;
            let unread = data.unread_message_count(me.id()).await;
            portal.emit(&inbox, |list| print_messages(list, unread))
        }
        MessageAction::Read { id } => {
            let changed = data.mark_message_read(&id).await?;
            outcome(changed, "Marked read", "No unread message with that id");
            Ok(())
        }
        MessageAction::Send {
            to,
            subject,
            content,
        } => {
            let recipient = portal
                .store
                .get_investors()
                .await?
                .into_iter()
                .find(|i| i.id() == to)
                .ok_or_not_found()?;

            let sent = data
                .send_message(NewMessage {
                    sender_id: me.id().to_string(),
                    sender_name: me.name().to_string(),
                    sender_avatar: me.user.avatar.clone(),
                    recipient_id: recipient.id().to_string(),
                    recipient_name: recipient.name().to_string(),
                    subject,
                    content,
                })
                .await?;

            portal.emit(&sent, |m| {
                println!("Sent \"{}\" to {} ({})", m.subject, m.recipient_name, m.id);
            })
        }
    }
}

fn outcome(changed: bool, done: &str, skipped: &str) {
    println!("{}", if changed { done } else { skipped });
}

fn print_notifications(notifications: &[Notification], unread: usize) {
    println!("{} notification(s), {} unread", notifications.len(), unread);
    for n in notifications {
        let marker = if n.is_unread() { "*" } else { " " };
        println!(
            "{} {}  {}  [{:?}] {}",
            marker,
            n.id,
            n.created_at.format("%Y-%m-%d"),
            n.kind,
            n.title
        );
        println!("      {}", n.message);
    }
}

fn print_messages(messages: &[Message], unread: usize) {
    println!("{} message(s), {} unread", messages.len(), unread);
    for m in messages {
        let marker = if m.read { " " } else { "*" };
        println!(
            "{} {}  {}  from {}: {}",
            marker,
            m.id,
            m.sent_at.format("%Y-%m-%d %H:%M"),
            m.sender_name,
            m.subject
        );
    }
}
