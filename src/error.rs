use std::fmt;

/// Raised when a caller-supplied query mode string is not one of the
/// defined wire values. Well-typed queries never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParseError {
    ResultType(String),
    Sort(String),
    DateFilter(String),
}

impl fmt::Display for QueryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryParseError::ResultType(v) => write!(f, "unknown result type: {}", v),
            QueryParseError::Sort(v) => write!(f, "unknown sort mode: {}", v),
            QueryParseError::DateFilter(v) => write!(f, "unknown date filter: {}", v),
        }
    }
}

impl From<QueryParseError> for String {
    fn from(e: QueryParseError) -> Self {
        e.to_string()
    }
}
