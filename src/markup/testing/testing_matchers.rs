//! Text matchers for tree assertions

use std::fmt;

/// How an asserted text node's content is compared
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    Contains(String),
}

impl TextMatch {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix.as_str()),
            TextMatch::Contains(needle) => actual.contains(needle.as_str()),
        }
    }

    /// Panic with `context` in the message unless `actual` matches
    pub fn assert(&self, actual: &str, context: &str) {
        assert!(
            self.matches(actual),
            "{}: Expected text {}, found {:?}",
            context,
            self,
            actual
        );
    }
}

impl fmt::Display for TextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextMatch::Exact(expected) => write!(f, "{:?}", expected),
            TextMatch::StartsWith(prefix) => write!(f, "starting with {:?}", prefix),
            TextMatch::Contains(needle) => write!(f, "containing {:?}", needle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        assert!(TextMatch::Exact("Hello ".into()).matches("Hello "));
        assert!(!TextMatch::Exact("Hello".into()).matches("Hello "));
        assert!(TextMatch::StartsWith("He".into()).matches("Hello"));
        assert!(!TextMatch::StartsWith("lo".into()).matches("Hello"));
        assert!(TextMatch::Contains("ll".into()).matches("Hello"));
        assert!(!TextMatch::Contains("world".into()).matches("Hello"));
    }

    #[test]
    #[should_panic(expected = "document/children[0]: Expected text containing \"world\", found \"Hello \"")]
    fn test_failure_message() {
        TextMatch::Contains("world".into()).assert("Hello ", "document/children[0]");
    }
}
