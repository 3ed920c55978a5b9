//! Interactive prompts. The duration prompt re-asks until the input
//! validates; there is no retry limit, only Ctrl-C out.
use inquire::{validator::Validation, CustomUserError, Text};

use crate::duration;
use crate::error::WorklogError;

/// Used when the operator leaves the comment empty.
pub const DEFAULT_COMMENT: &str = "Worked on this ticket";

fn duration_validator(input: &str) -> Result<Validation, CustomUserError> {
    if duration::is_valid(input.trim()) {
        Ok(Validation::Valid)
    } else {
        Ok(Validation::Invalid(
            "Use whole numbers with units w, d, h, m in that order, e.g. 2h30m".into(),
        ))
    }
}

pub fn duration() -> Result<String, WorklogError> {
    let answer = Text::new("How much time did you spend? (e.g. 2h30m)")
        .with_validator(duration_validator)
        .prompt()?;
    Ok(answer.trim().to_string())
}

/// Free-text comment; an empty answer means "no comment".
pub fn comment() -> Result<Option<String>, WorklogError> {
    let answer = Text::new("Comment (optional):").prompt()?;
    let answer = answer.trim().to_string();
    Ok(if answer.is_empty() {
        None
    } else {
        Some(answer)
    })
}
