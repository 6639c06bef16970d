use serde::{Deserialize, Serialize};

/// Delivery lifecycle of a message: sent, then delivered, then read.
/// Variant order defines the progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,
    Delivered,
    Read,
}

/// External delivery event reported for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryEvent {
    Delivered,
    Read,
}

impl DeliveryStatus {
    /// Advance the status for an event. Transitions are monotonic: an
    /// event that would move the status backwards is ignored.
    pub fn advance(self, event: DeliveryEvent) -> DeliveryStatus {
        let next = match event {
            DeliveryEvent::Delivered => DeliveryStatus::Delivered,
            DeliveryEvent::Read => DeliveryStatus::Read,
        };
        if next > self {
            next
        } else {
            self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Image,
    Voice,
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    Voice,
    File,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub kind: AttachmentKind,
    pub url: String,
    pub name: Option<String>,
    /// Playback length in seconds, for voice attachments.
    pub duration: Option<u32>,
}

/// A single message. Timestamps are unix seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub content: String,
    pub timestamp: i64,
    pub kind: MessageKind,
    pub status: DeliveryStatus,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl Message {
    pub fn apply_delivery(&mut self, event: DeliveryEvent) {
        self.status = self.status.advance(event);
    }
}
