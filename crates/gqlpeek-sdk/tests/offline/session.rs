use super::*;
use gqlpeek_sdk::Phase;

#[tokio::test]
async fn network_failure_leaves_applied_results_in_place() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": "a", "url": "https://cdn/a.jpg" }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let transport = RestTransport::new(server.uri(), None);
    let mut session = Session::new(Section::Cats);
    assert_eq!(session.execute(&transport).await, Phase::Applied);

    session.set_limit("5");
    session.set_field("breeds", true);
    assert_eq!(session.execute(&transport).await, Phase::Failed);

    assert!(!session.is_loading());
    assert_eq!(session.error(), Some("HTTP error 502: bad gateway"));
    assert_eq!(session.records().len(), 1);
    assert_eq!(session.records()[0]["id"], "a");
    assert_eq!(session.applied().limit, "3");
    assert!(!session.applied().fields.contains("breeds"));
}

#[tokio::test]
async fn unreachable_endpoint_is_reported_as_network_error() {
    // Nothing listens on port 9 of localhost.
    let transport = GraphQLTransport::new("http://127.0.0.1:9/graphql");
    let mut session = Session::new(Section::Students);

    assert_eq!(session.execute(&transport).await, Phase::Failed);
    assert!(session.error().unwrap().starts_with("Network error"));
    assert!(session.records().is_empty());
}
