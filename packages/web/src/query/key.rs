//! Hierarchical query keys

use std::fmt;

/// Identifies a cached query, e.g. `["resumes", "42"]`.
///
/// Keys are hierarchical: `["resumes"]` is a prefix of `["resumes", "42"]`,
/// which is what invalidation and removal match on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }

    /// Append a segment, returning the extended key.
    pub fn with(mut self, part: impl Into<String>) -> Self {
        self.0.push(part.into());
        self
    }

    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

impl From<&str> for QueryKey {
    fn from(part: &str) -> Self {
        Self(vec![part.to_string()])
    }
}

impl From<String> for QueryKey {
    fn from(part: String) -> Self {
        Self(vec![part])
    }
}

impl<const N: usize> From<[&str; N]> for QueryKey {
    fn from(parts: [&str; N]) -> Self {
        Self::new(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_matching_is_segment_based() {
        let key = QueryKey::from(["resumes", "42"]);
        assert!(key.starts_with(&QueryKey::from("resumes")));
        assert!(key.starts_with(&key));
        assert!(!key.starts_with(&QueryKey::from("resume")));
        assert!(!QueryKey::from("resumes").starts_with(&key));
    }

    #[test]
    fn display_lists_segments() {
        let key = QueryKey::from("skills").with("rust");
        assert_eq!(key.to_string(), "[skills, rust]");
    }
}
