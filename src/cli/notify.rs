//! Notification centre commands

use chrono::Utc;
use clap::Subcommand;

use crate::display::format_notification_list;
use crate::error::FolioResult;
use crate::models::{Notification, NotificationKind};
use crate::services::NotificationService;
use crate::storage::Storage;

/// Notification subcommands
#[derive(Subcommand)]
pub enum NotifyCommands {
    /// List notifications, newest first
    List,

    /// Add a notification
    Add {
        /// Title
        title: String,
        /// Message body
        message: String,
        /// Type: info, success, warning or error
        #[arg(short = 't', long = "type", default_value = "info")]
        kind: NotificationKind,
        /// Link for the call to action
        #[arg(long, requires = "action_label")]
        action_url: Option<String>,
        /// Label for the call to action
        #[arg(long, requires = "action_url")]
        action_label: Option<String>,
    },

    /// Mark a notification as read
    Read {
        /// Notification ID (short or full)
        id: String,
    },

    /// Mark all notifications as read
    ReadAll,

    /// Remove a notification
    Remove {
        /// Notification ID (short or full)
        id: String,
    },

    /// Remove all notifications
    Clear,
}

/// Handle a notification command
pub fn handle_notify_command(storage: &Storage, cmd: NotifyCommands) -> FolioResult<()> {
    let service = NotificationService::new(storage);

    match cmd {
        NotifyCommands::List => {
            let state = service.list()?;
            println!("{}", format_notification_list(&state, Utc::now()));
        }

        NotifyCommands::Add {
            title,
            message,
            kind,
            action_url,
            action_label,
        } => {
            let mut notification = Notification::new(kind, title, message);
            if let (Some(url), Some(label)) = (action_url, action_label) {
                notification = notification.with_action(url, label);
            }
            let added = service.add(notification)?;
            println!("Added notification {}", added.id);
        }

        NotifyCommands::Read { id } => {
            let n = service.mark_read(&id)?;
            println!("Marked '{}' as read", n.title);
        }

        NotifyCommands::ReadAll => {
            let count = service.mark_all_read()?;
            println!("Marked {} notifications as read", count);
        }

        NotifyCommands::Remove { id } => {
            let n = service.remove(&id)?;
            println!("Removed '{}'", n.title);
        }

        NotifyCommands::Clear => {
            let count = service.clear()?;
            println!("Removed {} notifications", count);
        }
    }

    Ok(())
}
