use serde::{Deserialize, Serialize};

use super::message::Message;

/// A one-to-one or group conversation. Participants are contact ids;
/// the display layer resolves them against the address book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub participants: Vec<String>,
    pub is_group: bool,
    pub group_name: Option<String>,
    pub group_avatar: Option<String>,
    pub last_message: Option<Message>,
}
