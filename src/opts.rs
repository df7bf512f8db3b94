use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

use crate::github::DEFAULT_API_URL;

const LONG_FLAGS: &[&str] = &[
    "token", "username", "date", "path", "message", "yes", "api-url", "help", "version",
];
const VALUE_FLAGS: &[&str] = &["token", "username", "date", "path", "message", "api-url"];

/// Push the current branch of a repository at a later time
#[derive(Parser)]
#[command(name = "pushlater", version)]
pub struct CliOptions {
    /// GitHub personal access token
    #[clap(long, allow_hyphen_values = true)]
    pub token: Option<String>,
    /// GitHub username (the password is prompted for)
    #[clap(long, allow_hyphen_values = true)]
    pub username: Option<String>,
    /// When to push, in the format: dd-mm-yyyy hh:mm (local time)
    #[clap(long)]
    pub date: Option<String>,
    /// Path to the repository to push
    #[clap(long)]
    pub path: Option<PathBuf>,
    /// Commit staged changes with this message before scheduling the push
    #[clap(long, allow_hyphen_values = true)]
    pub message: Option<String>,
    /// Set the upstream branch without asking when none is configured
    #[clap(long)]
    pub yes: bool,
    /// GitHub API base URL
    #[clap(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

fn long_flag_name(arg: &str) -> Option<&str> {
    let rest = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'))?;
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name).then_some(name)
}

/// Rewrite Go-style `-token=abc` flags into `--token=abc` so both spellings
/// are accepted. The argument following a value flag given without `=` is a
/// value and is passed through as is, as is everything after `--`.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut pending_value = false;
    let mut options_ended = false;
    args.into_iter()
        .map(|arg| {
            if pending_value || options_ended {
                pending_value = false;
                return arg;
            }
            let Some(s) = arg.to_str() else {
                return arg;
            };
            if s == "--" {
                options_ended = true;
                return arg;
            }
            match long_flag_name(s) {
                Some(name) => {
                    pending_value = VALUE_FLAGS.contains(&name) && !s.contains('=');
                    if s.starts_with("--") {
                        arg
                    } else {
                        OsString::from(format!("-{}", s))
                    }
                }
                None => arg,
            }
        })
        .collect()
}
