use std::path::PathBuf;

use crate::{errors::PushLaterError, git};

use super::{scheduled::ScheduledTask, ScheduledPush, Workload};

#[derive(Clone, Debug)]
pub struct GitPush {
    repo_path: PathBuf,
    set_upstream: bool,
}

impl GitPush {
    pub fn new(repo_path: PathBuf, set_upstream: bool) -> Self {
        Self {
            repo_path,
            set_upstream,
        }
    }
}

impl Workload for GitPush {
    fn id(&self) -> String {
        self.repo_path.display().to_string()
    }

    fn perform(self) -> Result<(), PushLaterError> {
        git::push(&self.repo_path, self.set_upstream)
    }
}

impl From<ScheduledPush> for ScheduledTask<GitPush> {
    fn from(push: ScheduledPush) -> Self {
        ScheduledTask::new(GitPush::new(push.repo_path, push.set_upstream), push.target)
    }
}
