use std::{path::PathBuf, process::ExitStatus};

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PushLaterError {
    #[error("A GitHub username or a personal access token is required")]
    MissingCredentials,
    #[error("Provide --token or --username, not both")]
    CredentialConflict,
    #[error("Path to the repository is required")]
    MissingRepoPath,
    #[error("A date to schedule the push is required")]
    MissingDate,
    #[error("Invalid date {0:?}, expected dd-mm-yyyy hh:mm: {1}")]
    MalformedDateTime(String, String),
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(reqwest::Error),
    #[error("Failed to authenticate with GitHub: {0}")]
    GitHubNetworkError(reqwest::Error),
    #[error("Failed to authenticate with GitHub: {0} returned {1}: {2}")]
    GitHubApiError(String, StatusCode, String),
    #[error("Failed to read password: {0}")]
    PasswordInput(std::io::Error),
    #[error("Failed to read confirmation: {0}")]
    PromptInput(std::io::Error),
    #[error("Input closed before a confirmation was given")]
    PromptClosed,
    #[error("Cannot access repository at {}: {}", .0.display(), .1)]
    InvalidRepoPath(PathBuf, std::io::Error),
    #[error("Not a git repository: {}", .0.display())]
    NotARepository(PathBuf),
    #[error("Failed to query upstream of {}: {}", .0.display(), .1)]
    UpstreamQueryFailed(PathBuf, String),
    #[error("Failed to launch git: {0}")]
    GitLaunch(std::io::Error),
    #[error("git {0} failed: {1}")]
    GitFailed(String, ExitStatus),
    #[error("Scheduled push was already started")]
    AlreadyStarted,
    #[error("Scheduled push was never started")]
    NotStarted,
    #[error("Scheduled push worker panicked")]
    WorkerPanicked,
}

impl PushLaterError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            PushLaterError::MissingCredentials
                | PushLaterError::CredentialConflict
                | PushLaterError::MissingRepoPath
                | PushLaterError::MissingDate
                | PushLaterError::MalformedDateTime(..)
        )
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            2
        } else {
            1
        }
    }
}
