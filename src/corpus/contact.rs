use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Offline,
    Away,
}

/// An entry in the address book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub presence: Presence,
    /// Unix seconds of last activity, when the contact is not online.
    pub last_seen: Option<i64>,
    pub bio: Option<String>,
}
