use super::*;

#[test]
fn edits_do_not_change_applied_output_until_run() {
    let script = "run\non email\nstate\nshow\nrun\nstate\nquit\n";
    gqlpeek()
        .args(["--format", "human", "shell", "students"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "pending: fields=[id,name,program,gpa,email]\napplied: fields=[id,name,program,gpa]",
        ))
        .stdout(predicate::str::contains(
            "pending: fields=[id,name,program,gpa,email]\napplied: fields=[id,name,program,gpa,email]",
        ))
        .stdout(predicate::str::contains("maria.lopez@example.com"));
}

#[test]
fn show_after_edit_renders_applied_columns_only() {
    gqlpeek()
        .args(["--format", "human", "shell", "students"])
        .write_stdin("run\non email\nshow\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("María López"))
        .stdout(predicate::str::contains("Email").not())
        .stdout(predicate::str::contains("@example.com").not());
}

#[test]
fn preview_follows_pending_edits() {
    let output = gqlpeek()
        .args(["shell", "cats"])
        .write_stdin("off url\non breeds\nlimit 7\nbreed abys\npreview\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    let preview = stdout_json(&output);
    assert_eq!(preview["selectedFields"], serde_json::json!(["id", "breeds"]));
    assert_eq!(preview["params"]["limit"], 7);
    assert_eq!(preview["params"]["breed_ids"], "abys");
}

#[test]
fn unknown_field_and_command_are_reported() {
    gqlpeek()
        .args(["shell", "students"])
        .write_stdin("on whiskers\nfrobnicate\nlimit 3\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown students field 'whiskers'"))
        .stderr(predicate::str::contains("Unknown command 'frobnicate'"))
        .stderr(predicate::str::contains("take no arguments"));
}

#[test]
fn failed_run_keeps_previous_state() {
    gqlpeek()
        .args([
            "--graphql-url",
            "http://127.0.0.1:9/graphql",
            "shell",
            "students",
            "--student-transport",
            "graphql",
        ])
        .write_stdin("toggle age\nrun\nstate\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Error: Network error"))
        .stdout(predicate::str::contains("phase: Failed"))
        .stdout(predicate::str::contains("applied: fields=[id,name,program,gpa]\n"));
}
