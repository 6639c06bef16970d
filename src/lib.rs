//! Local search for a chat application: substring matching over
//! messages, conversations and contacts, hard-exclude filters,
//! relevance/date/name ranking, match highlighting, and resolution of
//! selected results to navigation targets.
//!
//! Searches are pure functions over a [`Corpus`] snapshot; the caller
//! owns the data, the clock, and everything on screen.

pub mod corpus;
pub mod error;
pub mod navigate;
pub mod query;
pub mod search;

pub use corpus::Corpus;
pub use error::QueryParseError;
pub use navigate::{resolve_selection, Navigation};
pub use query::{DateFilter, ResultType, SearchQuery, SortMode};
pub use search::{search, ResultKind, SearchResult};
