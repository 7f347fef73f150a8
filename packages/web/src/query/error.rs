use super::key::QueryKey;

/// Errors surfaced by the query cache to its callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Query {key} failed after {attempts} attempt(s): {message}")]
    Fetch {
        key: QueryKey,
        attempts: u32,
        message: String,
    },

    #[error("Query {key} holds data of a different type than requested")]
    TypeMismatch { key: QueryKey },
}
