use super::*;

#[test]
fn preview_is_graphql_post() {
    let output = gqlpeek()
        .args(["students", "preview", "--fields", "name,email"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let preview = stdout_json(&output);
    assert_eq!(preview["method"], "POST");
    assert_eq!(preview["url"], "/graphql");
    assert_eq!(preview["headers"]["content-type"], "application/json");
    assert_eq!(preview["payload"]["operationName"], "AllStudents");
    assert_eq!(preview["payload"]["variables"], serde_json::json!({}));
    assert_eq!(
        preview["payload"]["query"],
        "query AllStudents {\n  students {\n    name\n    email\n  }\n}"
    );
}

#[test]
fn run_against_local_schema_returns_json_records() {
    let output = gqlpeek()
        .args(["students", "run", "--fields", "id,age"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let records = stdout_json(&output);
    assert_eq!(records.as_array().unwrap().len(), 4);
    assert_eq!(records[1], serde_json::json!({ "id": "2", "age": 22 }));
}

#[test]
fn run_human_format_prints_selected_columns() {
    gqlpeek()
        .args(["--format", "human", "students", "run", "--fields", "name,program"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name"))
        .stdout(predicate::str::contains("Program"))
        .stdout(predicate::str::contains("Samuel Acero"))
        .stdout(predicate::str::contains("Gpa").not());
}

#[test]
fn run_against_unreachable_endpoint_reports_error() {
    gqlpeek()
        .args([
            "--graphql-url",
            "http://127.0.0.1:9/graphql",
            "students",
            "run",
            "--transport",
            "graphql",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Network error"));
}
