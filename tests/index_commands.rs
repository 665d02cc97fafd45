use crate::common::command::{init_repository_dir, run_trit_command};
use crate::common::file::{FileSpec, write_file, write_generated_file};
use crate::common::read_metadata;
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

#[rstest]
fn status_of_fresh_repository_is_empty(init_repository_dir: TempDir) {
    run_trit_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout("Tracked files:\n\n\n0 files total\n");
}

#[rstest]
fn added_files_are_listed_in_insertion_order(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    for name in ["zeta.txt", "alpha.txt", "docs/guide.md"] {
        write_file(FileSpec::new(dir.join(name), name.to_string()));
        run_trit_command(dir, &["add", name])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    run_trit_command(dir, &["status"])
        .assert()
        .success()
        .stdout("Tracked files:\n\nzeta.txt\nalpha.txt\ndocs/guide.md\n\n3 files total\n");
    assert_eq!(
        read_metadata(dir, "index"),
        "zeta.txt\nalpha.txt\ndocs/guide.md\n"
    );
}

#[rstest]
fn adding_tracked_file_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "alpha".to_string()));
    run_trit_command(dir, &["add", "a.txt"]).assert().success();

    run_trit_command(dir, &["add", "a.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr("ERROR: File a.txt already added\n");
    assert_eq!(read_metadata(dir, "index"), "a.txt\n");
}

#[rstest]
fn equivalent_spellings_are_the_same_path(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("src/lib.rs"), "//".to_string()));
    run_trit_command(dir, &["add", "./src/lib.rs"])
        .assert()
        .success();

    run_trit_command(dir, &["add", "src//lib.rs"])
        .assert()
        .failure()
        .stderr("ERROR: File src//lib.rs already added\n");
    assert_eq!(read_metadata(dir, "index"), "src/lib.rs\n");
}

#[rstest]
fn errors_name_the_path_as_given(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "alpha".to_string()));
    run_trit_command(dir, &["add", "a.txt"]).assert().success();

    run_trit_command(dir, &["add", "./a.txt"])
        .assert()
        .failure()
        .stderr("ERROR: File ./a.txt already added\n");
    run_trit_command(dir, &["rm", "./ghost.txt"])
        .assert()
        .failure()
        .stderr("ERROR: File ./ghost.txt is not tracked\n");
}

#[rstest]
fn rm_untracks_but_keeps_file(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let file = write_generated_file(dir);
    let name = file.path.file_name().unwrap().to_str().unwrap().to_string();
    run_trit_command(dir, &["add", &name]).assert().success();

    run_trit_command(dir, &["rm", &name])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(file.path.exists());
    run_trit_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("0 files total\n"));
}

#[rstest]
fn rm_untracked_file_fails(init_repository_dir: TempDir) {
    run_trit_command(init_repository_dir.path(), &["rm", "ghost.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr("ERROR: File ghost.txt is not tracked\n");
}

#[rstest]
#[case("../outside.txt")]
#[case("/etc/passwd")]
#[case(".trit/index")]
fn paths_outside_work_tree_are_rejected(init_repository_dir: TempDir, #[case] path: &str) {
    run_trit_command(init_repository_dir.path(), &["add", path])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with(format!(
            "ERROR: Invalid path '{}'",
            path
        )));
    assert_eq!(read_metadata(init_repository_dir.path(), "index"), "");
}
