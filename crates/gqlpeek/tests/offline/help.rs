use super::*;

#[test]
fn help_flag_shows_commands() {
    gqlpeek()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("cats"))
        .stdout(predicate::str::contains("students"))
        .stdout(predicate::str::contains("shell"));
}

#[test]
fn version_flag_shows_version() {
    gqlpeek()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gqlpeek"));
}

#[test]
fn global_options_are_documented() {
    gqlpeek()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--log-level"))
        .stdout(predicate::str::contains("--graphql-url"))
        .stdout(predicate::str::contains("--cat-api-key"));
}

#[test]
fn fields_lists_cat_catalog() {
    let output = gqlpeek()
        .args(["--format", "json", "fields", "cats"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let rows = stdout_json(&output);
    assert_eq!(rows.as_array().unwrap().len(), 6);
    assert_eq!(rows[4]["key"], "breeds");
    assert_eq!(rows[0]["default"], true);
}

#[test]
fn fields_human_format_prints_table() {
    gqlpeek()
        .args(["--format", "human", "fields", "students"])
        .assert()
        .success()
        .stdout(predicate::str::contains("email"))
        .stdout(predicate::str::contains("label"));
}

#[test]
fn valid_log_level_logs_to_stderr() {
    gqlpeek()
        .args(["--log-level", "debug", "students", "run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("María López"))
        .stderr(predicate::str::contains("local schema"));
}

#[test]
fn invalid_log_level_is_rejected() {
    gqlpeek()
        .args(["--log-level", "loud", "fields", "cats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn invalid_cat_api_url_is_config_error() {
    gqlpeek()
        .args(["--cat-api-url", "not a url", "cats", "preview"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
