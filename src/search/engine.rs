use std::cmp::Reverse;

use crate::corpus::Corpus;
use crate::query::{DateFilter, ResultType, SearchQuery, SortMode};

use super::collate;
use super::highlight::highlight_term;
use super::{ResultKind, SearchResult};

const SECONDS_PER_DAY: i64 = 86_400;

/// Shown in place of a sender the address book no longer knows.
const UNKNOWN_SENDER: &str = "مستخدم غير معروف";
/// Subtitle for one-to-one conversations.
const DIRECT_LABEL: &str = "محادثة فردية";
/// Fallback title for a group without a name.
const UNNAMED_GROUP: &str = "مجموعة";
/// Subtitle for contacts without a bio.
const NO_BIO: &str = "لا توجد معلومات إضافية";

/// Run a query against a corpus snapshot. `now` is the caller's clock
/// in unix seconds; date filtering and recency scoring count whole days
/// back from it.
///
/// Blank queries and queries with no matches both yield an empty list,
/// never an error. Two calls with the same inputs produce the same
/// output.
pub fn search(corpus: &Corpus, query: &SearchQuery, now: i64) -> Vec<SearchResult> {
    let trimmed = query.text.trim();
    if trimmed.is_empty() {
        return vec![];
    }
    let term = trimmed.to_lowercase();

    let mut results = Vec::new();
    if matches!(query.result_type, ResultType::All | ResultType::Messages) {
        collect_messages(corpus, query, trimmed, &term, now, &mut results);
    }
    if matches!(query.result_type, ResultType::All | ResultType::Groups) {
        collect_conversations(corpus, &term, &mut results);
    }
    if matches!(query.result_type, ResultType::All | ResultType::Contacts) {
        collect_contacts(corpus, &term, &mut results);
    }

    // All three sorts are stable; ties keep corpus insertion order,
    // messages before conversations before contacts.
    match query.sort {
        SortMode::Relevance => {
            results.sort_by_key(|r| Reverse(relevance_score(r, &term, now)))
        }
        SortMode::Date => results.sort_by_key(|r| Reverse(r.timestamp.unwrap_or(0))),
        SortMode::Name => results.sort_by(|a, b| collate::compare(&a.title, &b.title)),
    }

    log::debug!("query \"{}\" matched {} results", trimmed, results.len());
    results
}

fn collect_messages(
    corpus: &Corpus,
    query: &SearchQuery,
    raw_term: &str,
    term: &str,
    now: i64,
    out: &mut Vec<SearchResult>,
) {
    for message in &corpus.messages {
        if !message.content.to_lowercase().contains(term) {
            continue;
        }
        let sender = corpus.contact(&message.sender_id);

        if let Some(from) = query.from_user.as_deref() {
            let sender_matches = sender
                .map(|s| s.name.to_lowercase() == from.to_lowercase())
                .unwrap_or(false);
            if !sender_matches {
                continue;
            }
        }
        if query.has_attachments && message.attachments.is_empty() {
            continue;
        }
        if excluded_by_date(query.date_filter, message.timestamp, now) {
            continue;
        }

        let conversation = corpus.conversation_with(&message.sender_id);
        let subtitle = match conversation {
            Some(c) if c.is_group => c
                .group_name
                .clone()
                .unwrap_or_else(|| UNNAMED_GROUP.to_string()),
            _ => DIRECT_LABEL.to_string(),
        };

        out.push(SearchResult {
            kind: ResultKind::Message,
            id: message.id.clone(),
            title: sender
                .map(|s| s.name.clone())
                .unwrap_or_else(|| UNKNOWN_SENDER.to_string()),
            subtitle,
            content: Some(message.content.clone()),
            timestamp: Some(message.timestamp),
            avatar: sender.map(|s| s.avatar.clone()),
            conversation_id: conversation.map(|c| c.id.clone()),
            highlighted_content: Some(highlight_term(&message.content, raw_term)),
        });
    }
}

fn collect_conversations(corpus: &Corpus, term: &str, out: &mut Vec<SearchResult>) {
    for conversation in &corpus.conversations {
        // A one-to-one conversation is titled after its first participant.
        let first_participant = conversation
            .participants
            .first()
            .and_then(|id| corpus.contact(id));
        let name = if conversation.is_group {
            conversation.group_name.clone()
        } else {
            first_participant.map(|c| c.name.clone())
        };
        let name = match name {
            Some(n) => n,
            None => continue,
        };
        if !name.to_lowercase().contains(term) {
            continue;
        }

        let subtitle = if conversation.is_group {
            format!("{} أعضاء", conversation.participants.len())
        } else {
            DIRECT_LABEL.to_string()
        };
        let avatar = if conversation.is_group {
            conversation.group_avatar.clone()
        } else {
            first_participant.map(|c| c.avatar.clone())
        };

        out.push(SearchResult {
            kind: ResultKind::Conversation,
            id: conversation.id.clone(),
            title: name,
            subtitle,
            content: None,
            timestamp: conversation.last_message.as_ref().map(|m| m.timestamp),
            avatar,
            conversation_id: None,
            highlighted_content: None,
        });
    }
}

fn collect_contacts(corpus: &Corpus, term: &str, out: &mut Vec<SearchResult>) {
    for contact in &corpus.contacts {
        let name_hit = contact.name.to_lowercase().contains(term);
        let bio_hit = contact
            .bio
            .as_ref()
            .map(|b| b.to_lowercase().contains(term))
            .unwrap_or(false);
        if !name_hit && !bio_hit {
            continue;
        }

        out.push(SearchResult {
            kind: ResultKind::Contact,
            id: contact.id.clone(),
            title: contact.name.clone(),
            subtitle: contact.bio.clone().unwrap_or_else(|| NO_BIO.to_string()),
            content: None,
            timestamp: None,
            avatar: Some(contact.avatar.clone()),
            conversation_id: None,
            highlighted_content: None,
        });
    }
}

fn excluded_by_date(filter: DateFilter, timestamp: i64, now: i64) -> bool {
    let days = (now - timestamp).div_euclid(SECONDS_PER_DAY);
    match filter {
        DateFilter::All => false,
        DateFilter::Today => days > 0,
        DateFilter::Week => days > 7,
        DateFilter::Month => days > 30,
    }
}

/// Score one result against the lowercased term. An exact title match
/// dominates a partial one; content and subtitle hits add less, and
/// items from the last ten days get a small boost.
fn relevance_score(result: &SearchResult, term: &str, now: i64) -> i64 {
    let mut score = 0;
    let title = result.title.to_lowercase();
    if title == term {
        score += 100;
    } else if title.contains(term) {
        score += 50;
    }
    if let Some(content) = &result.content {
        if content.to_lowercase().contains(term) {
            score += 30;
        }
    }
    if result.subtitle.to_lowercase().contains(term) {
        score += 20;
    }
    if let Some(timestamp) = result.timestamp {
        let days = (now - timestamp).div_euclid(SECONDS_PER_DAY);
        score += (10 - days).max(0);
    }
    score
}
