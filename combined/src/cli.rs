//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use common::{SeedPolicy, StorageBackend};
use domain::DocumentCategory;

/// Investor portal: sign in, read notices and documents, message investor relations
#[derive(Parser, Debug)]
#[command(name = "investor-portal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Storage backend holding the portal state
    #[arg(long, global = true, env = "PORTAL_STORAGE_BACKEND")]
    pub backend: Option<StorageBackend>,

    /// Directory of the file backend
    #[arg(long, global = true, env = "PORTAL_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// What loading does with collections that are already stored
    #[arg(long, global = true, env = "PORTAL_SEED_POLICY")]
    pub seed_policy: Option<SeedPolicy>,

    /// Skip the simulated network latency
    #[arg(long, global = true)]
    pub instant: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the portal and write the seed collections
    Init,

    /// Sign in by email; unknown emails get a new investor record
    Login {
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in investor
    Whoami,

    /// Update fields of the signed-in profile
    Profile(ProfileArgs),

    /// Change the password of the signed-in investor
    Password {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
    },

    /// Portal notifications
    Notifications {
        #[command(subcommand)]
        action: Option<NotificationAction>,
    },

    /// Investor relations messages
    Messages {
        #[command(subcommand)]
        action: Option<MessageAction>,
    },

    /// Documents visible to the signed-in role
    Documents {
        #[arg(long)]
        category: Option<DocumentCategory>,
    },

    /// Portfolio companies, largest valuation first
    Companies,

    /// Portfolio overview of the signed-in investor
    Dashboard,
}

#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub avatar: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum NotificationAction {
    /// List all notifications (default)
    List,
    /// Mark one notification read
    Read { id: String },
    /// Mark every notification read
    ReadAll,
    /// Delete one notification
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum MessageAction {
    /// Messages addressed to you, newest first (default)
    List,
    /// Mark one message read
    Read { id: String },
    /// Send a message
    Send {
        /// Recipient user id
        #[arg(long, default_value = "adm-001")]
        to: String,
        #[arg(long)]
        subject: String,
        content: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "investor-portal",
            "notifications",
            "read",
            "ntf-001",
            "--backend",
            "memory",
            "--seed-policy",
            "if-missing",
        ])
        .unwrap();

        assert_eq!(cli.backend, Some(StorageBackend::Memory));
        assert_eq!(cli.seed_policy, Some(SeedPolicy::IfMissing));
        assert!(matches!(
            cli.command,
            Commands::Notifications {
                action: Some(NotificationAction::Read { ref id })
            } if id == "ntf-001"
        ));
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let result = Cli::try_parse_from(["investor-portal", "--backend", "floppy", "init"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_message_send_defaults_to_investor_relations() {
        let cli = Cli::try_parse_from([
            "investor-portal",
            "messages",
            "send",
            "--subject",
            "Hello",
            "Is the AGM still on the 12th?",
        ])
        .unwrap();

        match cli.command {
            Commands::Messages {
                action: Some(MessageAction::Send { to, subject, .. }),
            } => {
                assert_eq!(to, "adm-001");
                assert_eq!(subject, "Hello");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
