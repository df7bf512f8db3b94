use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::{
    datetime::parse_datetime, errors::PushLaterError, github::Credential, opts::CliOptions,
    prompt::Prompt,
};

/// How the user asked to authenticate. A username still needs a password
/// before it becomes a `Credential`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Login {
    Token(String),
    Username(String),
}

impl Login {
    pub fn into_credential(self, prompt: &mut impl Prompt) -> Result<Credential, PushLaterError> {
        match self {
            Login::Token(token) => Ok(Credential::Token(token)),
            Login::Username(username) => {
                let password = prompt.password(&username)?;
                Ok(Credential::Basic { username, password })
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub login: Login,
    pub repo_path: PathBuf,
    pub target: DateTime<Local>,
    pub message: Option<String>,
    pub assume_yes: bool,
    pub api_url: String,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.is_empty())
}

impl TryFrom<&CliOptions> for Login {
    type Error = PushLaterError;

    fn try_from(opts: &CliOptions) -> Result<Self, Self::Error> {
        match (non_empty(&opts.token), non_empty(&opts.username)) {
            (Some(token), None) => Ok(Login::Token(token)),
            (None, Some(username)) => Ok(Login::Username(username)),
            (None, None) => Err(PushLaterError::MissingCredentials),
            (Some(_), Some(_)) => Err(PushLaterError::CredentialConflict),
        }
    }
}

impl TryFrom<&CliOptions> for Config {
    type Error = PushLaterError;

    fn try_from(opts: &CliOptions) -> Result<Self, Self::Error> {
        let login = Login::try_from(opts)?;
        let repo_path = opts
            .path
            .clone()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(PushLaterError::MissingRepoPath)?;
        let date = non_empty(&opts.date).ok_or(PushLaterError::MissingDate)?;
        Ok(Config {
            login,
            repo_path,
            target: parse_datetime(&date)?,
            message: non_empty(&opts.message),
            assume_yes: opts.yes,
            api_url: opts.api_url.clone(),
        })
    }
}
