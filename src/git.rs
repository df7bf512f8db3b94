use std::{
    path::Path,
    process::{Command, Stdio},
};

use log::debug;

use crate::errors::PushLaterError;

const GIT: &str = "git";
const REMOTE: &str = "origin";
// What `rev-parse @{u}` prints (under LC_ALL=C) when the branch has no
// upstream to resolve, as opposed to git itself failing.
const NO_UPSTREAM_MESSAGES: &[&str] = &[
    "no upstream configured for branch",
    "no such branch",
    "HEAD does not point to a branch",
    "ambiguous argument '@{u}'",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpstreamStatus {
    Present,
    Absent,
}

fn git_in(repo_path: &Path) -> Command {
    let mut command = Command::new(GIT);
    command.arg("-C").arg(repo_path);
    command
}

fn run_git(name: &str, mut command: Command) -> Result<(), PushLaterError> {
    debug!("running {:?}", command);
    let status = command.status().map_err(PushLaterError::GitLaunch)?;
    if status.success() {
        Ok(())
    } else {
        Err(PushLaterError::GitFailed(name.to_owned(), status))
    }
}

pub fn push_args(set_upstream: bool) -> Vec<&'static str> {
    let mut args = vec!["push"];
    if set_upstream {
        args.push("-u");
    }
    args.extend([REMOTE, "HEAD"]);
    args
}

pub fn push(repo_path: &Path, set_upstream: bool) -> Result<(), PushLaterError> {
    let mut command = git_in(repo_path);
    command.args(push_args(set_upstream));
    run_git("push", command)
}

pub fn commit(repo_path: &Path, message: &str) -> Result<(), PushLaterError> {
    let mut command = git_in(repo_path);
    command.args(["commit", "-m", message]);
    run_git("commit", command)
}

pub fn is_missing_upstream(stderr: &str) -> bool {
    NO_UPSTREAM_MESSAGES.iter().any(|msg| stderr.contains(msg))
}

/// Ask git for the upstream of the checked-out branch.
///
/// git exits non-zero both when the branch simply has no upstream and when
/// the query itself fails; only the former is `Absent`.
pub fn upstream_status(repo_path: &Path) -> Result<UpstreamStatus, PushLaterError> {
    let metadata = std::fs::metadata(repo_path)
        .map_err(|err| PushLaterError::InvalidRepoPath(repo_path.to_path_buf(), err))?;
    if !metadata.is_dir() {
        return Err(PushLaterError::InvalidRepoPath(
            repo_path.to_path_buf(),
            std::io::Error::new(std::io::ErrorKind::Other, "not a directory"),
        ));
    }
    let output = git_in(repo_path)
        .args([
            "rev-parse",
            "--abbrev-ref",
            "--symbolic-full-name",
            "@{u}",
        ])
        .env("LC_ALL", "C")
        .stdin(Stdio::null())
        .output()
        .map_err(PushLaterError::GitLaunch)?;
    if output.status.success() {
        return Ok(UpstreamStatus::Present);
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if stderr.contains("not a git repository") {
        return Err(PushLaterError::NotARepository(repo_path.to_path_buf()));
    }
    if is_missing_upstream(&stderr) {
        debug!("no upstream: {}", stderr.trim());
        return Ok(UpstreamStatus::Absent);
    }
    Err(PushLaterError::UpstreamQueryFailed(
        repo_path.to_path_buf(),
        stderr.trim().to_owned(),
    ))
}
