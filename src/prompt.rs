use std::io::{self, BufRead, Write};

use crate::errors::PushLaterError;

pub const SET_UPSTREAM_QUESTION: &str =
    "No upstream branch set. Would you like to set it automatically? [y/n]: ";
const PASSWORD_PROMPT: &str = "Enter Password: ";

/// Interactive input needed while setting up a scheduled push.
pub trait Prompt {
    fn confirm(&mut self, question: &str) -> Result<bool, PushLaterError>;
    fn password(&mut self, username: &str) -> Result<String, PushLaterError>;
}

pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Write `question` and read one line of answer. A closed input is an
/// error rather than a "no".
pub fn confirm<R, W>(question: &str, input: &mut R, output: &mut W) -> Result<bool, PushLaterError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", question).map_err(PushLaterError::PromptInput)?;
    output.flush().map_err(PushLaterError::PromptInput)?;
    let mut line = String::new();
    let len = input
        .read_line(&mut line)
        .map_err(PushLaterError::PromptInput)?;
    if len == 0 {
        return Err(PushLaterError::PromptClosed);
    }
    Ok(is_affirmative(&line))
}

pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, question: &str) -> Result<bool, PushLaterError> {
        confirm(question, &mut io::stdin().lock(), &mut io::stdout())
    }

    fn password(&mut self, _username: &str) -> Result<String, PushLaterError> {
        rpassword::prompt_password(PASSWORD_PROMPT).map_err(PushLaterError::PasswordInput)
    }
}
