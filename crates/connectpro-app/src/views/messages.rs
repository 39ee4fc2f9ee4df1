//! # Messaging View State
//!
//! Contact list and per-conversation message list. Everything is a local
//! simulation: conversations are fixture-loaded when a contact is selected,
//! sends append locally with no echo from a counterpart, and nothing survives
//! a reload.

use serde::{Deserialize, Serialize};

/// A conversation partner in the contact rail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique contact id
    pub id: String,
    /// Display name
    pub name: String,
    /// Avatar URL
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub avatar: Option<String>,
    /// Preview of the most recent message
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_message: Option<String>,
    /// Timestamp of the most recent message, ms since epoch
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_message_time: Option<u64>,
    /// Presence indicator
    pub online: bool,
    /// Unread message count badge
    pub unread: u32,
}

/// A single message inside a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message id (time-based for locally sent messages)
    pub id: String,
    /// Sender's user id
    pub sender_id: String,
    /// Receiver's user id
    pub receiver_id: String,
    /// Message text
    pub text: String,
    /// Send time, ms since epoch
    pub timestamp: u64,
    /// Whether the receiver has read the message
    pub read: bool,
}

/// Messaging page state.
#[derive(Debug, Clone, Default)]
pub struct MessagesState {
    /// All contacts, fixture-fabricated on mount
    pub contacts: Vec<Contact>,
    /// Currently selected contact id
    pub selected: Option<String>,
    /// Messages for the selected conversation
    pub messages: Vec<ChatMessage>,
    /// Mobile-only flag: show the conversation pane instead of the list
    pub mobile_conversation: bool,
}

impl MessagesState {
    /// Seed with fixture contacts.
    #[must_use]
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            selected: None,
            messages: Vec::new(),
            mobile_conversation: false,
        }
    }

    /// Look up a contact by id.
    #[must_use]
    pub fn contact(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// The currently selected contact, if any.
    #[must_use]
    pub fn selected_contact(&self) -> Option<&Contact> {
        self.selected.as_deref().and_then(|id| self.contact(id))
    }

    /// Select a contact and load its conversation fixture.
    ///
    /// Resets that contact's unread count to zero (other contacts are left
    /// untouched) and raises the mobile conversation flag. Unknown ids are
    /// ignored.
    pub fn open_conversation(&mut self, contact_id: &str, messages: Vec<ChatMessage>) -> bool {
        let Some(contact) = self.contacts.iter_mut().find(|c| c.id == contact_id) else {
            return false;
        };
        contact.unread = 0;
        self.selected = Some(contact_id.to_string());
        self.messages = messages;
        self.mobile_conversation = true;
        true
    }

    /// Return from the conversation pane to the contact list on mobile.
    pub fn close_conversation(&mut self) {
        self.mobile_conversation = false;
    }

    /// Append a sent message and update the contact's preview.
    ///
    /// Rejected when no conversation is open or the text is blank. The
    /// message is appended with `read = false`; there is no echo.
    pub fn send_message(&mut self, sender_id: &str, text: &str, now_ms: u64) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        let Some(receiver_id) = self.selected.clone() else {
            return false;
        };
        self.messages.push(ChatMessage {
            id: format!("msg-{now_ms}"),
            sender_id: sender_id.to_string(),
            receiver_id: receiver_id.clone(),
            text: trimmed.to_string(),
            timestamp: now_ms,
            read: false,
        });
        if let Some(contact) = self.contacts.iter_mut().find(|c| c.id == receiver_id) {
            contact.last_message = Some(trimmed.to_string());
            contact.last_message_time = Some(now_ms);
        }
        true
    }

    /// Contacts whose name contains the query, case-insensitively.
    #[must_use]
    pub fn filtered_contacts(&self, query: &str) -> Vec<&Contact> {
        let needle = query.trim().to_lowercase();
        self.contacts
            .iter()
            .filter(|c| needle.is_empty() || c.name.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contacts() -> Vec<Contact> {
        vec![
            Contact {
                id: "contact1".to_string(),
                name: "Sarah Johnson".to_string(),
                avatar: None,
                last_message: Some("Let me know if you need help.".to_string()),
                last_message_time: Some(9_000),
                online: true,
                unread: 2,
            },
            Contact {
                id: "contact2".to_string(),
                name: "Miguel Lopez".to_string(),
                avatar: None,
                last_message: None,
                last_message_time: None,
                online: false,
                unread: 1,
            },
        ]
    }

    fn fixture_messages() -> Vec<ChatMessage> {
        vec![ChatMessage {
            id: "msg-1".to_string(),
            sender_id: "contact1".to_string(),
            receiver_id: "user123".to_string(),
            text: "Hey!".to_string(),
            timestamp: 8_000,
            read: true,
        }]
    }

    #[test]
    fn test_open_conversation_resets_unread_in_isolation() {
        let mut state = MessagesState::new(contacts());
        assert!(state.open_conversation("contact1", fixture_messages()));

        assert_eq!(state.contact("contact1").unwrap().unread, 0);
        // The other contact's badge is untouched
        assert_eq!(state.contact("contact2").unwrap().unread, 1);
        assert!(state.mobile_conversation);
        assert_eq!(state.messages.len(), 1);
    }

    #[test]
    fn test_open_unknown_contact_is_ignored() {
        let mut state = MessagesState::new(contacts());
        assert!(!state.open_conversation("contact99", Vec::new()));
        assert!(state.selected.is_none());
        assert!(!state.mobile_conversation);
    }

    #[test]
    fn test_send_appends_unread_and_updates_preview() {
        let mut state = MessagesState::new(contacts());
        state.open_conversation("contact1", fixture_messages());

        assert!(state.send_message("user123", "  On it!  ", 10_000));
        let sent = state.messages.last().unwrap();
        assert_eq!(sent.text, "On it!");
        assert_eq!(sent.receiver_id, "contact1");
        assert!(!sent.read);

        let contact = state.contact("contact1").unwrap();
        assert_eq!(contact.last_message.as_deref(), Some("On it!"));
        assert_eq!(contact.last_message_time, Some(10_000));
    }

    #[test]
    fn test_send_requires_selection_and_text() {
        let mut state = MessagesState::new(contacts());
        assert!(!state.send_message("user123", "hello", 10_000));

        state.open_conversation("contact1", Vec::new());
        assert!(!state.send_message("user123", "   ", 10_000));
        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_contact_search_is_case_insensitive() {
        let state = MessagesState::new(contacts());
        let hits = state.filtered_contacts("sarah");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Sarah Johnson");

        let all = state.filtered_contacts("  ");
        assert_eq!(all.len(), 2);

        assert!(state.filtered_contacts("zoe").is_empty());
    }

    #[test]
    fn test_close_conversation_keeps_selection() {
        let mut state = MessagesState::new(contacts());
        state.open_conversation("contact1", Vec::new());
        state.close_conversation();
        assert!(!state.mobile_conversation);
        // Desktop split view still shows the conversation
        assert_eq!(state.selected.as_deref(), Some("contact1"));
    }
}
