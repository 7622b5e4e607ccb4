//! Test/training account exclusion.

use std::collections::BTreeSet;

/// Name tokens of known test and training accounts.
const DEFAULT_TOKENS: [&str; 8] = [
    "use",
    "user",
    "teststudent",
    "test student",
    "testtt",
    "testtest",
    "karentest",
    "tester",
];

/// Case-insensitive exact-token name filter.
///
/// A record is excluded when its first or last name, lowercased, equals one
/// of the tokens. Token equality, not substring containment: a real surname
/// that merely contains "user" must not be dropped.
#[derive(Debug, Clone)]
pub struct ExclusionList {
    tokens: BTreeSet<String>,
}

impl ExclusionList {
    /// Build a list from arbitrary tokens; entries are stored lowercased.
    #[must_use]
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(|token| token.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// True when either name matches an excluded token.
    #[must_use]
    pub fn is_excluded(&self, first_name: &str, last_name: &str) -> bool {
        self.tokens.contains(&first_name.to_lowercase())
            || self.tokens.contains(&last_name.to_lowercase())
    }
}

impl Default for ExclusionList {
    fn default() -> Self {
        Self::new(DEFAULT_TOKENS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_is_case_insensitive() {
        let list = ExclusionList::default();
        assert!(list.is_excluded("Jane", "TestStudent"));
        assert!(list.is_excluded("TESTER", "Doe"));
    }

    #[test]
    fn matching_is_exact_not_substring() {
        let list = ExclusionList::default();
        assert!(list.is_excluded("Test Student", "Doe"));
        assert!(!list.is_excluded("Testing Student", "Doe"));
        assert!(!list.is_excluded("Jane", "Hauser"));
    }
}
