//! Notification centre display

use chrono::{DateTime, Utc};

use crate::stores::NotificationState;

/// Format a notification list, newest first, with relative ages
pub fn format_notification_list(state: &NotificationState, now: DateTime<Utc>) -> String {
    if state.is_empty() {
        return "No notifications.".to_string();
    }

    let mut output = format!(
        "{} notifications, {} unread\n\n",
        state.len(),
        state.unread_count()
    );

    for n in state.notifications() {
        let marker = if n.is_read { " " } else { "*" };
        output.push_str(&format!(
            "{} [{}] {}  {}  ({})\n",
            marker,
            n.kind.icon(),
            n.id,
            n.title,
            format_age(now - n.timestamp)
        ));
        output.push_str(&format!("      {}\n", n.message));
        if let (Some(url), Some(label)) = (&n.action_url, &n.action_label) {
            output.push_str(&format!("      {} -> {}\n", label, url));
        }
    }

    output
}

/// Coarse relative age, e.g. `5m ago`
pub fn format_age(age: chrono::Duration) -> String {
    if age.num_minutes() < 1 {
        "just now".to_string()
    } else if age.num_hours() < 1 {
        format!("{}m ago", age.num_minutes())
    } else if age.num_days() < 1 {
        format!("{}h ago", age.num_hours())
    } else {
        format!("{}d ago", age.num_days())
    }
}
