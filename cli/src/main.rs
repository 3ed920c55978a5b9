//! # commit-worklog
//!
//! Reads the latest git commit message, extracts the Jira ticket it
//! references, verifies the ticket exists and interactively records a work
//! log entry on it.
//!
//! ```bash
//! $ git commit -m "feat: jnyy-42 add login"
//! $ commit-worklog
//! > JNYY-42: Add login
//! ? How much time did you spend? (e.g. 2h30m) 2h30m
//! ? Comment (optional): Implemented the redirect
//! > Logged 2h30m on JNYY-42 (worklog id 100028)
//! ```
//!
//! A commit without a ticket reference is not an error; the run simply
//! reports there is nothing to log and exits successfully.
use std::path::Path;
use std::process::exit;

use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use jira::{Credentials, IssueLookup, Jira};
use log::debug;

use cli::{LogLevel, Opts};
use config::JiraConfig;
use error::WorklogError;

mod cli;
mod config;
mod duration;
mod error;
mod git;
mod prompt;
mod ticket;

#[tokio::main]
async fn main() {
    let opts: Opts = Opts::parse();

    configure_logging(&opts); // Handles the -v option

    if let Err(err) = run().await {
        eprintln!("{} {err}", category(&err).bright_red());
        exit(1);
    }
}

async fn run() -> Result<(), WorklogError> {
    let config = JiraConfig::from_env()?;

    let message = git::latest_commit_message(Path::new("."))?;
    debug!("latest commit message: {message:?}");

    let Some(key) = ticket::extract(&message) else {
        println!(
            "No {} ticket referenced by the latest commit, nothing to log.",
            ticket::PROJECT_CODE
        );
        return Ok(());
    };

    let client = Jira::new(
        config.base_url.as_str(),
        Credentials::Basic(config.email, config.token),
    )?;

    let issue = match client.get_issue(&key).await? {
        IssueLookup::Found(issue) => issue,
        IssueLookup::NotFound => return Err(WorklogError::TicketNotFound(key)),
    };
    println!(
        "{} {}: {}",
        ">".bright_green(),
        issue.key.to_string().bright_cyan(),
        issue.fields.summary
    );

    let spec = prompt::duration()?;
    let comment = prompt::comment()?;
    let seconds = duration::to_seconds(&spec);

    let worklog = client
        .insert_worklog(
            &key,
            Utc::now(),
            seconds,
            comment.as_deref().unwrap_or(prompt::DEFAULT_COMMENT),
        )
        .await?;

    println!(
        "{} Logged {} on {} (worklog id {})",
        ">".bright_green(),
        spec.bright_cyan(),
        key.to_string().bright_cyan(),
        worklog.id
    );
    Ok(())
}

/// Category prefix for the final diagnostic line on stderr.
fn category(err: &WorklogError) -> &'static str {
    match err {
        WorklogError::MissingConfig(_) => "configuration error:",
        WorklogError::NotInGitRepo
        | WorklogError::NoCommits
        | WorklogError::EmptyCommitMessage
        | WorklogError::Git(_) => "git error:",
        WorklogError::TicketNotFound(_) => "ticket error:",
        WorklogError::Jira(_) => "jira error:",
        WorklogError::Cancelled | WorklogError::Prompt(_) => "aborted:",
    }
}

fn configure_logging(opts: &Opts) {
    // If nothing else was specified in RUST_LOG, use 'warn'
    env_logger::Builder::from_env(Env::default().default_filter_or(opts.verbosity.map_or(
        "warn",
        |lvl| match lvl {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        },
    )))
    .init();
    debug!("Logging started");
}
