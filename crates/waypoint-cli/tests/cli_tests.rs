use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn wp_cmd() -> Command {
    let mut cmd = Command::cargo_bin("wp").expect("Failed to find wp binary");
    cmd.arg("--no-color");
    cmd
}

/// Command bound to a database inside `dir`
fn db_cmd(dir: &Path) -> Command {
    let mut cmd = wp_cmd();
    cmd.arg("--database-file").arg(dir.join("cli_test.db"));
    cmd
}

/// Creates plan `name` with steps `ids`, each with an empty description
fn seed_plan(dir: &Path, name: &str, ids: &[&str]) {
    db_cmd(dir)
        .args(["plan", "create", name])
        .assert()
        .success();
    for id in ids {
        db_cmd(dir)
            .args(["step", "add", name, id])
            .assert()
            .success();
    }
}

#[test]
fn test_cli_create_plan_success() {
    let temp_dir = create_cli_test_environment();

    db_cmd(temp_dir.path())
        .args(["plan", "create", "release"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Created plan 'release'"));
}

#[test]
fn test_cli_create_duplicate_plan_fails() {
    let temp_dir = create_cli_test_environment();
    seed_plan(temp_dir.path(), "release", &[]);

    db_cmd(temp_dir.path())
        .args(["plan", "create", "release"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_cli_create_rejects_invalid_name() {
    let temp_dir = create_cli_test_environment();

    db_cmd(temp_dir.path())
        .args(["plan", "create", "a/b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_cli_list_empty_plans() {
    let temp_dir = create_cli_test_environment();

    db_cmd(temp_dir.path())
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_default_command_lists_plans() {
    let temp_dir = create_cli_test_environment();
    seed_plan(temp_dir.path(), "alpha", &["a", "b"]);

    db_cmd(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("## alpha (TODO) (0/2)"));
}

#[test]
fn test_cli_list_plans_json_format() {
    let temp_dir = create_cli_test_environment();
    seed_plan(temp_dir.path(), "alpha", &["a"]);
    db_cmd(temp_dir.path())
        .args(["step", "done", "alpha", "a"])
        .assert()
        .success();

    let output = db_cmd(temp_dir.path())
        .args(["plan", "list", "--json"])
        .output()
        .expect("Failed to run list");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    assert_eq!(
        json,
        serde_json::json!([
            {"name": "alpha", "status": "DONE", "total_tasks": 1, "completed_tasks": 1}
        ])
    );
}

#[test]
fn test_cli_add_and_show_steps() {
    let temp_dir = create_cli_test_environment();
    seed_plan(temp_dir.path(), "p1", &[]);

    db_cmd(temp_dir.path())
        .args(["step", "add", "p1", "a", "-d", "desc-a", "-a", "c1", "-a", "c2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added step 'a' to plan 'p1'"));
    db_cmd(temp_dir.path())
        .args(["step", "add", "p1", "b"])
        .assert()
        .success();

    db_cmd(temp_dir.path())
        .args(["plan", "show", "p1"])
        .assert()
        .success()
        .stdout("### 1. desc-a (TODO)\n\n1. c1\n2. c2\n\n### 2. b (TODO)\n");
}

#[test]
fn test_cli_show_empty_plan() {
    let temp_dir = create_cli_test_environment();
    seed_plan(temp_dir.path(), "empty", &[]);

    db_cmd(temp_dir.path())
        .args(["plan", "show", "empty"])
        .assert()
        .success()
        .stdout("No steps in this plan.\n");
}

#[test]
fn test_cli_show_missing_plan_fails() {
    let temp_dir = create_cli_test_environment();

    db_cmd(temp_dir.path())
        .args(["plan", "show", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan 'ghost' not found"));
}

#[test]
fn test_cli_add_duplicate_step_fails() {
    let temp_dir = create_cli_test_environment();
    seed_plan(temp_dir.path(), "p1", &["a"]);

    db_cmd(temp_dir.path())
        .args(["step", "add", "p1", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Step 'a' already exists"));
}

#[test]
fn test_cli_done_undo_and_next() {
    let temp_dir = create_cli_test_environment();
    seed_plan(temp_dir.path(), "p1", &["a", "b"]);

    db_cmd(temp_dir.path())
        .args(["step", "done", "p1", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("as DONE"));

    db_cmd(temp_dir.path())
        .args(["plan", "next", "p1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### b (TODO)"));

    db_cmd(temp_dir.path())
        .args(["step", "done", "p1", "b"])
        .assert()
        .success();
    db_cmd(temp_dir.path())
        .args(["plan", "next", "p1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All steps in plan 'p1' are complete"));

    db_cmd(temp_dir.path())
        .args(["step", "undo", "p1", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("as TODO"));
    db_cmd(temp_dir.path())
        .args(["plan", "next", "p1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### a (TODO)"));
}

#[test]
fn test_cli_done_missing_step_fails() {
    let temp_dir = create_cli_test_environment();
    seed_plan(temp_dir.path(), "p1", &["a"]);

    db_cmd(temp_dir.path())
        .args(["step", "done", "p1", "zzz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Step 'zzz' not found"));

    db_cmd(temp_dir.path())
        .args(["plan", "show", "p1"])
        .assert()
        .success()
        .stdout("### 1. a (TODO)\n");
}

#[test]
fn test_cli_reorder_steps() {
    let temp_dir = create_cli_test_environment();
    seed_plan(temp_dir.path(), "p1", &["a", "b", "c"]);

    db_cmd(temp_dir.path())
        .args(["step", "reorder", "p1", "c", "a", "b"])
        .assert()
        .success()
        .stdout("### 1. c (TODO)\n\n### 2. a (TODO)\n\n### 3. b (TODO)\n");

    // An incomplete permutation is rejected and nothing changes
    db_cmd(temp_dir.path())
        .args(["step", "reorder", "p1", "a", "b"])
        .assert()
        .failure();
    db_cmd(temp_dir.path())
        .args(["plan", "show", "p1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("### 1. c (TODO)"));
}

#[test]
fn test_cli_remove_steps_ignores_unknown_ids() {
    let temp_dir = create_cli_test_environment();
    seed_plan(temp_dir.path(), "p1", &["a", "b", "c"]);

    db_cmd(temp_dir.path())
        .args(["step", "remove", "p1", "b", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 step(s) from plan 'p1'"));

    db_cmd(temp_dir.path())
        .args(["plan", "show", "p1"])
        .assert()
        .success()
        .stdout("### 1. a (TODO)\n\n### 2. c (TODO)\n");
}

#[test]
fn test_cli_compact_removes_completed_plans() {
    let temp_dir = create_cli_test_environment();
    seed_plan(temp_dir.path(), "finished", &["x"]);
    seed_plan(temp_dir.path(), "pending", &["x"]);
    db_cmd(temp_dir.path())
        .args(["step", "done", "finished", "x"])
        .assert()
        .success();

    db_cmd(temp_dir.path())
        .args(["plan", "compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 completed plan(s): finished"));

    db_cmd(temp_dir.path())
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pending"))
        .stdout(predicate::str::contains("finished").not());

    db_cmd(temp_dir.path())
        .args(["plan", "compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No completed plans to remove"));
}

#[test]
fn test_cli_plan_dir_backend() {
    let temp_dir = create_cli_test_environment();
    let plan_dir = temp_dir.path().join("plans");
    let dir_arg = plan_dir.to_str().unwrap();

    wp_cmd()
        .args(["--plan-dir", dir_arg, "plan", "create", "files"])
        .assert()
        .success();
    wp_cmd()
        .args(["--plan-dir", dir_arg, "step", "add", "files", "a", "-d", "on disk"])
        .assert()
        .success();

    assert!(plan_dir.join("files.json").is_file());

    wp_cmd()
        .args(["--plan-dir", dir_arg, "plan", "show", "files"])
        .assert()
        .success()
        .stdout("### 1. on disk (TODO)\n");
}

#[test]
fn test_cli_malformed_record_is_reported() {
    let temp_dir = create_cli_test_environment();
    let plan_dir = temp_dir.path().join("plans");
    std::fs::create_dir_all(&plan_dir).unwrap();
    std::fs::write(plan_dir.join("broken.json"), "{ not json").unwrap();
    let dir_arg = plan_dir.to_str().unwrap();

    wp_cmd()
        .args(["--plan-dir", dir_arg, "plan", "show", "broken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed record"));

    // Listing skips the broken record instead of failing
    wp_cmd()
        .args(["--plan-dir", dir_arg, "plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_database_and_plan_dir_conflict() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("x.db");
    let plan_dir = temp_dir.path().join("plans");

    wp_cmd()
        .arg("--database-file")
        .arg(&db_path)
        .arg("--plan-dir")
        .arg(&plan_dir)
        .args(["plan", "list"])
        .assert()
        .failure();
}

#[test]
fn test_cli_help_output() {
    wp_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("step"));
}
