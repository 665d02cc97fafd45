use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Initialized repository with no commits
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_trit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

/// Repository with `a.txt` committed once on master
#[fixture]
pub fn committed_repository_dir(init_repository_dir: TempDir) -> TempDir {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("a.txt"), "alpha".to_string()));
    run_trit_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    trit_commit(dir.path(), "GO BEARS! first")
        .assert()
        .success();

    dir
}

/// Repository with three commits on master, each adding one file
#[fixture]
pub fn repository_with_multiple_commits(init_repository_dir: TempDir) -> TempDir {
    let dir = init_repository_dir;

    for (i, name) in ["one", "two", "three"].iter().enumerate() {
        let file_name = format!("{}.txt", name);
        write_file(FileSpec::new(
            dir.path().join(&file_name),
            format!("content {}", i + 1),
        ));
        run_trit_command(dir.path(), &["add", &file_name])
            .assert()
            .success();
        trit_commit(dir.path(), &format!("GO BEARS! commit {}", name))
            .assert()
            .success();
    }

    dir
}

pub fn run_trit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("trit").expect("Failed to find trit binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.env_remove("TRIT_WORK_TREE");
    cmd.env_remove("TRIT_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn trit_commit(dir: &Path, message: &str) -> Command {
    run_trit_command(dir, &["commit", "-m", message])
}

/// Commit id the working tree currently reflects
pub fn get_prev_commit_id(dir: &Path) -> String {
    crate::common::read_metadata(dir, "prev").trim().to_string()
}

/// Parent pointer stored with a commit
pub fn get_parent_commit_id(dir: &Path, commit_id: &str) -> String {
    crate::common::read_metadata(dir, &format!("commits/{}/prev", commit_id))
        .trim()
        .to_string()
}
