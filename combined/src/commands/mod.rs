//! Command implementations.
//!
//! Every invocation is one application load: open the store, run
//! `initialize()`, mount the session provider and read the portal data.

mod catalog;
mod inbox;
mod session;

use serde::Serialize;
use tracing::{info, warn};

use common::{AppError, AppResult, CancellationToken, LatencyConfig};
use domain::Investor;
use portal_service_lib::DataProvider;
use session_service_lib::config::SessionServiceConfig;
use session_service_lib::service::SessionManager;
use session_service_lib::SessionService;
use store_service_lib::config::StoreServiceConfig;
use store_service_lib::{open_store, PersistentStore};

use crate::cli::{Cli, Commands};

/// The three providers of a loaded portal
pub struct Portal {
    pub store: PersistentStore,
    pub session: SessionManager,
    pub data: DataProvider,
    json: bool,
}

impl Portal {
    pub async fn load(
        store_config: &StoreServiceConfig,
        latency: LatencyConfig,
        json: bool,
    ) -> AppResult<Self> {
        let store = open_store(store_config).await?;
        store.initialize().await?;

        let session = SessionManager::mount(store.clone(), latency).await?;
        let data = portal_service_lib::load_portal(store.clone()).await?;

        info!(
            backend = ?store_config.backend,
            policy = %store_config.seed_policy,
            "Portal loaded"
        );

        Ok(Self {
            store,
            session,
            data,
            json,
        })
    }

    /// The signed-in investor, or `Unauthorized`
    pub fn signed_in(&self) -> AppResult<Investor> {
        self.session.current_user().ok_or(AppError::Unauthorized)
    }

    /// Print `value` as JSON, or with `human` otherwise
    pub fn emit<T, F>(&self, value: &T, human: F) -> AppResult<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T),
    {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            human(value);
        }
        Ok(())
    }
}

/// Store configuration from the environment with CLI overrides applied
pub fn store_config(cli: &Cli) -> StoreServiceConfig {
    let mut config = StoreServiceConfig::from_env();
    if let Some(backend) = cli.backend {
        config.backend = backend;
    }
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(policy) = cli.seed_policy {
        config.seed_policy = policy;
    }
    config
}

pub fn latency_config(cli: &Cli) -> LatencyConfig {
    if cli.instant {
        LatencyConfig::immediate()
    } else {
        SessionServiceConfig::from_env().latency
    }
}

/// Token cancelled when the user presses Ctrl+C
fn cancel_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, abandoning the pending operation");
            trigger.cancel();
        }
    });
    token
}

/// Execute the parsed command line
pub async fn execute(cli: Cli) -> AppResult<()> {
    let portal = Portal::load(&store_config(&cli), latency_config(&cli), cli.json).await?;

    match cli.command {
        Commands::Init => session::init(&portal).await,
        Commands::Login { email, password } => {
            session::login(&portal, email, password, &cancel_on_ctrl_c()).await
        }
        Commands::Logout => session::logout(&portal).await,
        Commands::Whoami => session::whoami(&portal),
        Commands::Profile(args) => session::profile(&portal, args, &cancel_on_ctrl_c()).await,
        Commands::Password { current, new } => {
            session::password(&portal, current, new, &cancel_on_ctrl_c()).await
        }
        Commands::Notifications { action } => inbox::notifications(&portal, action).await,
        Commands::Messages { action } => inbox::messages(&portal, action).await,
        Commands::Documents { category } => catalog::documents(&portal, category),
        Commands::Companies => catalog::companies(&portal),
        Commands::Dashboard => catalog::dashboard(&portal).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use common::StorageBackend;
    use portal_service_lib::PortalDataService;

    use crate::cli::{MessageAction, NotificationAction, ProfileArgs};

    async fn memory_portal() -> Portal {
        let cli = Cli::try_parse_from([
            "investor-portal",
            "--backend",
            "memory",
            "--instant",
            "init",
        ])
        .unwrap();
        let config = store_config(&cli);
        assert_eq!(config.backend, StorageBackend::Memory);
        assert_eq!(latency_config(&cli), LatencyConfig::immediate());

        Portal::load(&config, latency_config(&cli), cli.json)
            .await
            .unwrap()
    }

    async fn signed_in_as(email: &str) -> Portal {
        let portal = memory_portal().await;
        let cancel = CancellationToken::new();
        session::login(&portal, email.to_string(), String::new(), &cancel)
            .await
            .unwrap();
        portal
    }

    #[tokio::test]
    async fn test_load_initializes_store_and_providers() {
        let portal = memory_portal().await;

        assert_eq!(portal.store.get_investors().await.unwrap().len(), 4);
        assert_eq!(portal.data.documents().len(), 7);
        assert_eq!(portal.data.unread_count().await, 3);
        assert!(portal.session.current_user().is_none());
        assert!(matches!(portal.signed_in(), Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_data_commands_require_sign_in() {
        let portal = memory_portal().await;

        let read_all = inbox::notifications(&portal, Some(NotificationAction::ReadAll)).await;
        assert!(matches!(read_all, Err(AppError::Unauthorized)));
        assert!(matches!(
            inbox::messages(&portal, None).await,
            Err(AppError::Unauthorized)
        ));
        assert!(matches!(
            catalog::documents(&portal, None),
            Err(AppError::Unauthorized)
        ));
        assert!(matches!(catalog::companies(&portal), Err(AppError::Unauthorized)));
        assert!(matches!(
            catalog::dashboard(&portal).await,
            Err(AppError::Unauthorized)
        ));

        // The gate runs before any mutation
        assert_eq!(portal.data.unread_count().await, 3);
    }

    #[tokio::test]
    async fn test_notification_commands_after_sign_in() {
        let portal = signed_in_as("sarah.mitchell@example.com").await;

        let read = NotificationAction::Read {
            id: "ntf-001".to_string(),
        };
        inbox::notifications(&portal, Some(read)).await.unwrap();
        assert_eq!(portal.data.unread_count().await, 2);

        let delete = NotificationAction::Delete {
            id: "ntf-002".to_string(),
        };
        inbox::notifications(&portal, Some(delete)).await.unwrap();
        let stored = portal.store.get_notifications().await.unwrap();
        assert_eq!(stored.len(), 4);
        assert_eq!(portal.data.unread_count().await, 1);
    }

    #[tokio::test]
    async fn test_message_send_resolves_recipient() {
        let portal = signed_in_as("sarah.mitchell@example.com").await;

        let unknown = inbox::messages(
            &portal,
            Some(MessageAction::Send {
                to: "inv-404".to_string(),
                subject: "Hello".to_string(),
                content: "Anyone there?".to_string(),
            }),
        )
        .await;
        assert!(matches!(unknown, Err(AppError::NotFound)));
        assert_eq!(portal.data.messages().await.len(), 4);

        inbox::messages(
            &portal,
            Some(MessageAction::Send {
                to: "inv-002".to_string(),
                subject: "Helix round".to_string(),
                content: "Are you taking your pro-rata?".to_string(),
            }),
        )
        .await
        .unwrap();

        let messages = portal.store.get_messages().await.unwrap();
        let sent = messages.last().unwrap();
        assert_eq!(messages.len(), 5);
        assert_eq!(sent.sender_id, "inv-001");
        assert_eq!(sent.recipient_name, "James Chen");
    }

    #[tokio::test]
    async fn test_profile_rejects_empty_update() {
        let portal = signed_in_as("james.chen@example.com").await;
        let before = portal.store.get_current_user().await.unwrap();

        let result =
            session::profile(&portal, ProfileArgs::default(), &CancellationToken::new()).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(portal.store.get_current_user().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_profile_update_is_persisted() {
        let portal = signed_in_as("james.chen@example.com").await;
        let args = ProfileArgs {
            phone: Some("+1 555 0199".to_string()),
            ..Default::default()
        };

        session::profile(&portal, args, &CancellationToken::new())
            .await
            .unwrap();

        let stored = portal.store.get_current_user().await.unwrap().unwrap();
        assert_eq!(stored.user.phone.as_deref(), Some("+1 555 0199"));
    }
}
