#![allow(dead_code)]

use std::path::Path;

use tempfile::TempDir;
use xshell::{cmd, Shell};

pub fn shell() -> Shell {
    let sh = Shell::new().unwrap();
    sh.set_var("GIT_CONFIG_SYSTEM", "/dev/null");
    sh.set_var("GIT_CONFIG_GLOBAL", "/dev/null");
    sh
}

pub fn empty_repo(sh: &Shell) -> TempDir {
    let upstream = tempfile::tempdir().unwrap();
    let ref pupstream = upstream.path();
    cmd!(sh, "git init -q -b main {pupstream}")
        .ignore_stdout()
        .run()
        .unwrap();
    upstream
}

pub fn bare_repo(sh: &Shell) -> TempDir {
    let upstream = tempfile::tempdir().unwrap();
    let ref pupstream = upstream.path();
    cmd!(sh, "git init -q --bare -b main {pupstream}")
        .ignore_stdout()
        .run()
        .unwrap();
    upstream
}

pub fn clone_repo<P>(sh: &Shell, source: P) -> TempDir
where
    P: AsRef<Path>,
{
    let repodir = tempfile::tempdir().unwrap();
    let ref psource = source.as_ref().as_os_str();
    let ref prepodir = repodir.path();
    cmd!(sh, "git clone -q {psource} {prepodir}")
        .ignore_stdout()
        .run()
        .unwrap();
    set_identity(sh, &repodir);
    repodir
}

/// Commits made by the code under test use the repo's own config.
pub fn set_identity<P>(sh: &Shell, dir: P)
where
    P: AsRef<Path>,
{
    let ref pdir = dir.as_ref();
    cmd!(sh, "git -C {pdir} config user.email testing@example.com")
        .run()
        .unwrap();
    cmd!(sh, "git -C {pdir} config user.name Testing").run().unwrap();
}

/// A repo with one commit and an `origin` remote, but no tracking branch.
pub fn repo_without_upstream<P>(sh: &Shell, remote: P) -> TempDir
where
    P: AsRef<Path>,
{
    let repo = empty_repo(sh);
    set_identity(sh, &repo);
    commit_file(&repo, "revision 1");
    let ref prepo = repo.path();
    let ref premote = remote.as_ref().as_os_str();
    cmd!(sh, "git -C {prepo} remote add origin {premote}")
        .run()
        .unwrap();
    repo
}

pub fn stage_file<P>(dir: P, content: &str)
where
    P: AsRef<Path>,
{
    let dir = dir.as_ref();
    let sh = shell();
    sh.change_dir(dir);
    sh.write_file(dir.join("ze-file"), content).unwrap();
    cmd!(sh, "git add ze-file").ignore_stdout().run().unwrap();
}

pub fn commit_file<P>(dir: P, content: &str) -> String
where
    P: AsRef<Path>,
{
    let dir = dir.as_ref();
    stage_file(dir, content);
    let sh = shell();
    sh.change_dir(dir);
    cmd!(sh, "git -c user.email=testing@example.com -c user.name=Testing commit -q -m 'Committing {content}'").ignore_stdout().run().unwrap();
    cmd!(sh, "git rev-parse HEAD").read().unwrap()
}

pub fn head_of<P>(sh: &Shell, dir: P) -> String
where
    P: AsRef<Path>,
{
    let ref pdir = dir.as_ref();
    cmd!(sh, "git -C {pdir} rev-parse HEAD").read().unwrap()
}

pub fn branch_of<P>(sh: &Shell, dir: P, branch: &str) -> Option<String>
where
    P: AsRef<Path>,
{
    let ref pdir = dir.as_ref();
    let reference = format!("refs/heads/{}", branch);
    cmd!(sh, "git -C {pdir} rev-parse --verify -q {reference}")
        .quiet()
        .ignore_status()
        .read()
        .ok()
        .filter(|sha| !sha.is_empty())
}

pub fn tracking_branch<P>(sh: &Shell, dir: P) -> Option<String>
where
    P: AsRef<Path>,
{
    let ref pdir = dir.as_ref();
    let upstream = "@{u}";
    let out = cmd!(sh, "git -C {pdir} rev-parse --abbrev-ref {upstream}")
        .quiet()
        .ignore_status()
        .ignore_stderr()
        .read()
        .ok()?;
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

pub fn last_message<P>(sh: &Shell, dir: P) -> String
where
    P: AsRef<Path>,
{
    let ref pdir = dir.as_ref();
    cmd!(sh, "git -C {pdir} log -1 --format=%s").read().unwrap()
}
