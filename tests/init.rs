use crate::common::command::{repository_dir, run_trit_command};
use crate::common::{ROOT_COMMIT_ID, read_metadata};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

#[rstest]
fn init_creates_empty_repository(repository_dir: TempDir) {
    run_trit_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    repository_dir
        .child(".trit/commits")
        .assert(predicate::path::is_dir());
    repository_dir
        .child(".trit/heads/master")
        .assert(predicate::path::is_file());
    assert_eq!(read_metadata(repository_dir.path(), "index"), "");
    assert_eq!(read_metadata(repository_dir.path(), "branches"), "master\n");
    assert_eq!(
        read_metadata(repository_dir.path(), "current_branch").trim(),
        "master"
    );
    assert_eq!(
        read_metadata(repository_dir.path(), "prev").trim(),
        ROOT_COMMIT_ID
    );
}

#[rstest]
fn init_twice_fails(repository_dir: TempDir) {
    run_trit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_trit_command(repository_dir.path(), &["init"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with(
            "ERROR: Repository already initialized at",
        ));
}

#[rstest]
fn init_honours_work_tree_option(repository_dir: TempDir) {
    let work_tree = repository_dir.child("nested/project");

    run_trit_command(
        repository_dir.path(),
        &["-C", work_tree.path().to_str().unwrap(), "init"],
    )
    .assert()
    .success();

    work_tree
        .child(".trit/branches")
        .assert(predicate::path::is_file());
    repository_dir
        .child(".trit")
        .assert(predicate::path::missing());
}

#[rstest]
fn work_tree_typo_is_not_created(repository_dir: TempDir) {
    let typo = repository_dir.child("typo");

    run_trit_command(
        repository_dir.path(),
        &["-C", typo.path().to_str().unwrap(), "status"],
    )
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::starts_with("ERROR: Not a trit repository"));

    typo.assert(predicate::path::missing());
}

#[rstest]
#[case(&["status"])]
#[case(&["add", "a.txt"])]
#[case(&["log"])]
#[case(&["branch"])]
fn commands_outside_repository_fail(repository_dir: TempDir, #[case] args: &[&str]) {
    run_trit_command(repository_dir.path(), args)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("ERROR: Not a trit repository"));
}
