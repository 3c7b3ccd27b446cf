use super::*;

#[test]
fn preview_describes_rest_get() {
    let output = gqlpeek()
        .args(["cats", "preview", "--fields", "id,url", "--limit", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let preview = stdout_json(&output);
    assert_eq!(preview["method"], "GET");
    assert_eq!(preview["url"], "https://api.thecatapi.com/v1/images/search");
    assert_eq!(preview["params"]["limit"], 3);
    assert_eq!(preview["selectedFields"], serde_json::json!(["id", "url"]));
    assert_eq!(preview["payload"], serde_json::Value::Null);
}

#[test]
fn preview_masks_api_key() {
    let output = gqlpeek()
        .args(["--cat-api-key", "live_abcdefghijklmnop", "cats", "preview"])
        .output()
        .unwrap();
    let preview = stdout_json(&output);
    assert_eq!(preview["headers"]["x-api-key"], "live_a•••mnop");
}

#[test]
fn preview_clamps_limit_and_keeps_breed() {
    let output = gqlpeek()
        .args(["cats", "preview", "-l", "99", "-b", "abys"])
        .output()
        .unwrap();
    let preview = stdout_json(&output);
    assert_eq!(preview["params"]["limit"], 20);
    assert_eq!(preview["params"]["breed_ids"], "abys");
}

#[test]
fn negative_limit_is_accepted_and_clamped() {
    let output = gqlpeek()
        .args(["cats", "preview", "--limit", "-4"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["params"]["limit"], 1);
}

#[test]
fn graphql_preview_uses_breed_template() {
    let output = gqlpeek()
        .args([
            "--graphql-url",
            "http://localhost:4000/graphql",
            "cats",
            "preview",
            "--transport",
            "graphql",
            "--breed",
            "abys",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let preview = stdout_json(&output);
    assert_eq!(preview["method"], "POST");
    assert_eq!(preview["url"], "http://localhost:4000/graphql");
    assert_eq!(preview["payload"]["variables"]["breedId"], "abys");
    assert!(preview["payload"]["query"]
        .as_str()
        .unwrap()
        .contains("$breedId: String"));
}

#[test]
fn graphql_transport_without_endpoint_fails() {
    gqlpeek()
        .args(["cats", "preview", "--transport", "graphql"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--graphql-url"));
}

#[test]
fn unknown_field_is_rejected() {
    gqlpeek()
        .args(["cats", "preview", "--fields", "id,whiskers"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("whiskers"));
}
