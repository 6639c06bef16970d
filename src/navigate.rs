use serde::{Deserialize, Serialize};

use crate::corpus::Corpus;
use crate::search::{ResultKind, SearchResult};

/// Where selecting a search result takes the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Navigation {
    /// Open a conversation at its latest message.
    OpenConversation { conversation_id: String },
    /// Open a conversation scrolled to a specific message.
    OpenMessage {
        conversation_id: String,
        message_id: String,
    },
}

/// Resolve a selected result to a navigation target.
///
/// Contact results resolve to an existing one-to-one conversation with
/// that contact; when there is none, nothing happens (creating one is
/// the caller's business). Message results whose conversation never
/// resolved also go nowhere.
pub fn resolve_selection(corpus: &Corpus, result: &SearchResult) -> Option<Navigation> {
    match result.kind {
        ResultKind::Message => {
            result
                .conversation_id
                .as_ref()
                .map(|conversation_id| Navigation::OpenMessage {
                    conversation_id: conversation_id.clone(),
                    message_id: result.id.clone(),
                })
        }
        ResultKind::Conversation => Some(Navigation::OpenConversation {
            conversation_id: result.id.clone(),
        }),
        ResultKind::Contact => {
            corpus
                .direct_conversation_with(&result.id)
                .map(|c| Navigation::OpenConversation {
                    conversation_id: c.id.clone(),
                })
        }
    }
}
