pub mod contact;
pub mod conversation;
pub mod message;

pub use contact::{Contact, Presence};
pub use conversation::Conversation;
pub use message::{
    Attachment, AttachmentKind, DeliveryEvent, DeliveryStatus, Message, MessageKind,
};

use serde::{Deserialize, Serialize};

/// Snapshot of the data a search runs over. The caller owns updates;
/// a snapshot is never mutated while a query executes against it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    pub messages: Vec<Message>,
    pub conversations: Vec<Conversation>,
    pub contacts: Vec<Contact>,
}

impl Corpus {
    pub fn contact(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// First conversation whose participant list contains the given user.
    pub fn conversation_with(&self, user_id: &str) -> Option<&Conversation> {
        self.conversations
            .iter()
            .find(|c| c.participants.iter().any(|p| p == user_id))
    }

    /// Existing one-to-one conversation with the given contact, if any.
    pub fn direct_conversation_with(&self, contact_id: &str) -> Option<&Conversation> {
        self.conversations
            .iter()
            .find(|c| !c.is_group && c.participants.iter().any(|p| p == contact_id))
    }
}
