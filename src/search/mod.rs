pub mod collate;
pub mod engine;
pub mod highlight;

use serde::{Deserialize, Serialize};

pub use engine::search;

/// Which corpus collection a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Message,
    Conversation,
    Contact,
}

/// One entry in the ranked result list. Built fresh per query and
/// handed to the display layer as-is; nothing is retained between
/// queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub kind: ResultKind,
    pub id: String,
    pub title: String,
    pub subtitle: String,
    /// Raw message content; message results only.
    pub content: Option<String>,
    pub timestamp: Option<i64>,
    pub avatar: Option<String>,
    /// Conversation the result navigates into, when one resolved.
    pub conversation_id: Option<String>,
    /// Content with match spans wrapped in highlight markers.
    pub highlighted_content: Option<String>,
}
