use crate::common::command::{
    create_branch, init_repository_dir, read_branch, read_head, read_object, repository_dir,
    run_mygit_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

#[rstest]
fn branch_points_at_the_current_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_mygit_command(dir, &["branch", "feature"])
        .assert()
        .success()
        .stdout("Branch 'feature' created successfully.\n");

    assert_eq!(read_branch(dir, "feature"), read_branch(dir, "main"));
    assert_eq!(read_head(dir), "ref: refs/heads/main");
}

#[rstest]
fn branch_without_commits_fails(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_mygit_command(dir, &["init"]).assert().success();

    run_mygit_command(dir, &["branch", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No commits found"));

    assert!(!dir.join(".mygit/refs/heads/feature").exists());
}

#[rstest]
fn duplicate_branch_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    create_branch(dir, "feature");

    run_mygit_command(dir, &["branch", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("branch 'feature' already exists"));
}

#[rstest]
#[case("bad..name")]
#[case(".hidden")]
#[case("trailing/")]
#[case("with space")]
#[case("topic.lock")]
fn invalid_branch_names_are_rejected(init_repository_dir: TempDir, #[case] name: &str) {
    run_mygit_command(init_repository_dir.path(), &["branch", name])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid branch name"));
}

#[rstest]
fn branches_are_listed_with_the_current_one_marked(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    create_branch(dir, "feature/login");
    create_branch(dir, "bugfix");

    assert!(dir.join(".mygit/refs/heads/feature/login").is_file());

    run_mygit_command(dir, &["branch"])
        .assert()
        .success()
        .stdout("  bugfix\n  feature/login\n* main\n");
}

#[rstest]
fn checkout_switches_the_symbolic_head(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    create_branch(dir, "feature");

    run_mygit_command(dir, &["checkout", "feature"])
        .assert()
        .success()
        .stdout("Switched to branch 'feature'.\n");

    assert_eq!(read_head(dir), "ref: refs/heads/feature");
    run_mygit_command(dir, &["current-branch"])
        .assert()
        .success()
        .stdout("Current branch: feature\n");
}

#[rstest]
fn checkout_of_a_missing_branch_leaves_head_alone(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_mygit_command(dir, &["checkout", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Branch 'nowhere' does not exist."));

    assert_eq!(read_head(dir), "ref: refs/heads/main");
}

#[rstest]
fn checkout_of_a_commit_digest_detaches_head(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let commit_oid = read_branch(dir, "main");

    run_mygit_command(dir, &["checkout", &commit_oid])
        .assert()
        .success()
        .stdout(predicate::str::contains("HEAD is now at"));

    assert_eq!(read_head(dir), commit_oid);
    run_mygit_command(dir, &["current-branch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Could not determine the current branch.",
        ));
}

#[rstest]
fn checkout_of_an_unknown_digest_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let unknown = "0123456789abcdef0123456789abcdef01234567";

    run_mygit_command(dir, &["checkout", unknown])
        .assert()
        .failure();

    assert_eq!(read_head(dir), "ref: refs/heads/main");
}

#[rstest]
#[case::blob(true)]
#[case::tree(false)]
fn checkout_of_a_non_commit_digest_leaves_head_alone(
    init_repository_dir: TempDir,
    #[case] pick_blob: bool,
) {
    let dir = init_repository_dir.path();
    let commit_oid = read_branch(dir, "main");
    let record = read_object(dir, &commit_oid);
    let tree_oid = record
        .lines()
        .next()
        .and_then(|line| line.strip_prefix("tree "))
        .unwrap()
        .to_string();
    let target = if pick_blob {
        let tree = read_object(dir, &tree_oid);
        tree.split_whitespace().next().unwrap().to_string()
    } else {
        tree_oid
    };

    run_mygit_command(dir, &["checkout", &target])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!(
            "Branch '{target}' does not exist."
        )));

    assert_eq!(read_head(dir), "ref: refs/heads/main");
    create_branch(dir, "still-on-commit");
    assert_eq!(read_branch(dir, "still-on-commit"), commit_oid);
}
