//! Jira connection settings sourced from the environment.
//!
//! All three variables are mandatory. They are checked in a single pass so
//! the user gets every missing name at once, before any network activity.
use std::env;

use crate::error::WorklogError;

pub const JIRA_BASE_URL: &str = "JIRA_BASE_URL";
pub const JIRA_EMAIL: &str = "JIRA_EMAIL";
pub const JIRA_API_TOKEN: &str = "JIRA_API_TOKEN";

#[derive(Debug, Clone, PartialEq)]
pub struct JiraConfig {
    pub base_url: String,
    pub email: String,
    pub token: String,
}

impl JiraConfig {
    pub fn from_env() -> Result<Self, WorklogError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, WorklogError> {
        let mut missing = Vec::new();
        let mut require = |name: &str| {
            // An empty value is as useless as an absent one
            match lookup(name).filter(|v| !v.trim().is_empty()) {
                Some(value) => value,
                None => {
                    missing.push(name.to_string());
                    String::new()
                }
            }
        };

        let base_url = require(JIRA_BASE_URL);
        let email = require(JIRA_EMAIL);
        let token = require(JIRA_API_TOKEN);

        if !missing.is_empty() {
            return Err(WorklogError::MissingConfig(missing));
        }

        Ok(JiraConfig {
            base_url,
            email,
            token,
        })
    }
}
