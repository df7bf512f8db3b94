use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::errors::PushLaterError;

pub mod gitpush;
pub mod scheduled;

pub trait Workload {
    fn id(&self) -> String;
    fn perform(self) -> Result<(), PushLaterError>;
}

/// A push of `repo_path` to be made once `target` has passed.
#[derive(Clone, Debug)]
pub struct ScheduledPush {
    pub target: DateTime<Local>,
    pub repo_path: PathBuf,
    pub set_upstream: bool,
}
