use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryParseError;

/// Which result kinds a search covers. `Groups` covers conversations,
/// one-to-one ones included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    All,
    Messages,
    Contacts,
    Groups,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    Relevance,
    Date,
    Name,
}

/// Upper bound on message age, counted in whole days from the caller's
/// clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFilter {
    All,
    Today,
    Week,
    Month,
}

impl FromStr for ResultType {
    type Err = QueryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ResultType::All),
            "messages" => Ok(ResultType::Messages),
            "contacts" => Ok(ResultType::Contacts),
            "groups" => Ok(ResultType::Groups),
            other => Err(QueryParseError::ResultType(other.to_string())),
        }
    }
}

impl FromStr for SortMode {
    type Err = QueryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(SortMode::Relevance),
            "date" => Ok(SortMode::Date),
            "name" => Ok(SortMode::Name),
            other => Err(QueryParseError::Sort(other.to_string())),
        }
    }
}

impl FromStr for DateFilter {
    type Err = QueryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(DateFilter::All),
            "today" => Ok(DateFilter::Today),
            "week" => Ok(DateFilter::Week),
            "month" => Ok(DateFilter::Month),
            other => Err(QueryParseError::DateFilter(other.to_string())),
        }
    }
}

/// One search request. `from_user` and `has_attachments` are hard
/// excludes applied to message results only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub text: String,
    pub result_type: ResultType,
    pub sort: SortMode,
    pub date_filter: DateFilter,
    pub from_user: Option<String>,
    pub has_attachments: bool,
}

impl Default for SearchQuery {
    fn default() -> Self {
        SearchQuery {
            text: String::new(),
            result_type: ResultType::All,
            sort: SortMode::Relevance,
            date_filter: DateFilter::All,
            from_user: None,
            has_attachments: false,
        }
    }
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        SearchQuery {
            text: text.into(),
            ..Default::default()
        }
    }
}
