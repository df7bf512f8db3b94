use std::{
    sync::mpsc::channel,
    thread::{spawn, JoinHandle},
};

use log::{error, info};

pub mod config;
pub mod datetime;
pub mod errors;
pub mod git;
pub mod github;
pub mod opts;
pub mod prompt;
pub mod receiver;
pub mod task;
pub mod utils;

#[cfg(test)]
mod testutils;

use crate::{
    config::Config,
    errors::PushLaterError,
    git::UpstreamStatus,
    github::GithubClient,
    prompt::{Prompt, SET_UPSTREAM_QUESTION},
    receiver::logging_receiver,
    task::{gitpush::GitPush, scheduled::ScheduledTask, ScheduledPush},
};

/// Check the credentials, then decide whether the push has to set an
/// upstream. Returns the push to schedule.
pub fn prepare<P: Prompt>(
    config: &Config,
    prompt: &mut P,
) -> Result<ScheduledPush, PushLaterError> {
    let credential = config.login.clone().into_credential(prompt)?;
    let client = GithubClient::new(&config.api_url, credential)?;
    let login = client.current_user()?;
    println!("{}", login);

    if let Some(message) = &config.message {
        git::commit(&config.repo_path, message)?;
    }

    let set_upstream = match git::upstream_status(&config.repo_path)? {
        UpstreamStatus::Present => false,
        UpstreamStatus::Absent => {
            info!("The current branch does not have an upstream branch set.");
            config.assume_yes || prompt.confirm(SET_UPSTREAM_QUESTION)?
        }
    };
    Ok(ScheduledPush {
        target: config.target,
        repo_path: config.repo_path.clone(),
        set_upstream,
    })
}

/// Start the push in the background and wait for it to finish.
pub fn execute(push: ScheduledPush) -> Result<(), PushLaterError> {
    let (tx, rx) = channel();
    let logger = spawn(move || logging_receiver(&rx));
    let mut task: ScheduledTask<GitPush> = push.into();
    task.start(tx)?;
    let res = task.finalize();
    // The worker owned the only sender, so the receiver drains and stops.
    join_logger(logger, res)
}

fn join_logger(
    logger: JoinHandle<()>,
    res: Result<(), PushLaterError>,
) -> Result<(), PushLaterError> {
    if logger.join().is_err() {
        error!("Event logger panicked; some push events may not have been logged");
    }
    res
}

pub fn run<P: Prompt>(config: &Config, prompt: &mut P) -> Result<(), PushLaterError> {
    let push = prepare(config, prompt)?;
    execute(push)
}
