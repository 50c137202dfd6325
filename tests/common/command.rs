use crate::common::file::{read_file, write_files};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const AUTHOR_NAME: &str = "fake_user";
pub const AUTHOR_DATE: &str = "2024-01-01 12:00:00";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Initialized repository with `1.txt` and `a/2.txt` committed on `main`
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_mygit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_files(repository_dir.path(), &[("1.txt", "one"), ("a/2.txt", "two")]);

    run_mygit_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    mygit_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

pub fn run_mygit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("mygit").expect("Failed to find mygit binary");
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn mygit_commit(dir: &Path, message: &str) -> Command {
    mygit_commit_at(dir, message, AUTHOR_DATE)
}

pub fn mygit_commit_at(dir: &Path, message: &str, date: &str) -> Command {
    let mut cmd = run_mygit_command(dir, &["commit", message]);
    cmd.envs(vec![("MYGIT_AUTHOR_NAME", AUTHOR_NAME), ("MYGIT_AUTHOR_DATE", date)]);
    cmd
}

/// Stage `files` (name, content) and commit them
pub fn commit_files(dir: &Path, files: &[(&str, &str)], message: &str) {
    write_files(dir, files);
    for (name, _) in files {
        run_mygit_command(dir, &["add", name]).assert().success();
    }
    mygit_commit(dir, message).assert().success();
}

pub fn checkout(dir: &Path, target: &str) {
    run_mygit_command(dir, &["checkout", target])
        .assert()
        .success();
}

pub fn create_branch(dir: &Path, name: &str) {
    run_mygit_command(dir, &["branch", name]).assert().success();
}

pub fn read_head(dir: &Path) -> String {
    read_file(&dir.join(".mygit").join("HEAD")).trim().to_string()
}

pub fn read_branch(dir: &Path, name: &str) -> String {
    read_file(&dir.join(".mygit").join("refs").join("heads").join(name))
        .trim()
        .to_string()
}

/// Commit HEAD resolves to, through its branch when symbolic
pub fn read_head_commit(dir: &Path) -> String {
    let head = read_head(dir);
    match head.strip_prefix("ref: refs/heads/") {
        Some(branch) => read_branch(dir, branch),
        None => head,
    }
}

pub fn read_object(dir: &Path, oid: &str) -> String {
    read_file(&dir.join(".mygit").join("objects").join(oid))
}

pub fn read_index(dir: &Path) -> String {
    read_file(&dir.join(".mygit").join("index"))
}

pub fn parent_lines(record: &str) -> Vec<String> {
    record
        .lines()
        .filter_map(|line| line.strip_prefix("parent "))
        .map(str::to_string)
        .collect()
}

pub fn mygit_merge(dir: &Path, branch: &str) -> Command {
    let mut cmd = run_mygit_command(dir, &["merge", branch]);
    cmd.envs(vec![("MYGIT_AUTHOR_NAME", AUTHOR_NAME), ("MYGIT_AUTHOR_DATE", AUTHOR_DATE)]);
    cmd
}
