use std::{
    cmp::Ordering,
    fmt::{self, Formatter},
};

use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize,
};

/// Represents the author (user) of a worklog item
#[derive(Debug, Deserialize, Serialize, PartialOrd, PartialEq, Eq, Hash, Clone)]
pub struct Author {
    #[serde(alias = "accountId")]
    pub account_id: String,
    #[serde(alias = "emailAddress")]
    pub email_address: Option<String>,
    #[serde(alias = "displayName")]
    pub display_name: String,
}

/// Represents a Jira issue key like for instance `JNYY-148`.
/// The key is normalized to uppercase on construction.
#[derive(Debug, Serialize, Default, Eq, PartialEq, Hash, Clone)]
pub struct IssueKey {
    value: String,
}

impl IssueKey {
    ///
    /// # Panics
    /// If the supplied value is empty
    #[must_use]
    pub fn new(input: &str) -> Self {
        assert!(
            !input.trim().is_empty(),
            "IssueKey may not be empty!"
        );
        IssueKey {
            value: input.to_uppercase(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl From<&str> for IssueKey {
    fn from(value: &str) -> Self {
        IssueKey::new(value)
    }
}

impl From<String> for IssueKey {
    fn from(s: String) -> Self {
        IssueKey::new(&s)
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Ord for IssueKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for IssueKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'de> Deserialize<'de> for IssueKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IssueKeyVisitor;

        impl Visitor<'_> for IssueKeyVisitor {
            type Value = IssueKey;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a non-empty issue key string")
            }

            fn visit_str<E>(self, value: &str) -> Result<IssueKey, E>
            where
                E: de::Error,
            {
                if value.trim().is_empty() {
                    return Err(de::Error::invalid_value(de::Unexpected::Str(value), &self));
                }
                Ok(IssueKey {
                    value: value.to_uppercase(),
                })
            }
        }

        deserializer.deserialize_str(IssueKeyVisitor)
    }
}
