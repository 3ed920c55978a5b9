use std::fmt::{self, Formatter};

use clap::{Parser, ValueEnum};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub(crate) enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Parser)]
/// Log work on the Jira ticket referenced by your latest git commit.
///
/// Reads the most recent commit message from the repository in the current
/// directory, looks for a JNYY ticket reference, verifies the ticket in Jira
/// and asks how much time you spent on it.
///
/// Duration is specified in units of weeks, days, hours and minutes, using
/// the abbreviations 'w', 'd', 'h' and 'm' respectively, in that order.
/// E.g. 30m, 2h30m, 1d, 1w2d.
///
/// Credentials are taken from the JIRA_BASE_URL, JIRA_EMAIL and
/// JIRA_API_TOKEN environment variables.
#[command(author, version, about)] // Read from Cargo.toml
pub(crate) struct Opts {
    #[arg(short, long)]
    pub verbosity: Option<LogLevel>,
}
