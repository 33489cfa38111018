//! Chat entity - conversation parent record used for recipient resolution

/// A direct or group conversation.
///
/// Only the fields the notification path reads are modeled; the chat
/// document itself is owned by the client-facing application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: String,
    pub participants: Vec<String>,
    /// Display name of the most recent sender, used for notification titles.
    pub last_message_sender_name: Option<String>,
}

impl Chat {
    pub fn new(id: impl Into<String>, participants: Vec<String>) -> Self {
        Self {
            id: id.into(),
            participants,
            last_message_sender_name: None,
        }
    }

    /// All participants except the given sender.
    #[must_use]
    pub fn recipients_excluding(&self, sender_id: &str) -> Vec<String> {
        self.participants
            .iter()
            .filter(|p| p.as_str() != sender_id)
            .cloned()
            .collect()
    }
}
