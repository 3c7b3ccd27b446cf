use super::*;

#[tokio::test]
async fn posted_body_matches_preview_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": { "catImages": [] }
        })))
        .mount(&server)
        .await;

    let transport = GraphQLTransport::new(server.uri());
    let query = build_cat_query(&selection(&["id", "breeds"]), "4", "beng");
    transport.execute(&query).await.unwrap();

    let body = single_request_body(&server.received_requests().await.unwrap());
    let preview = serde_json::to_value(transport.preview(&query)).unwrap();
    assert_eq!(body, preview["payload"]);
    assert_eq!(body["operationName"], "CatImages");
    assert_eq!(body["variables"], serde_json::json!({ "limit": 4, "breedId": "beng" }));
}

#[tokio::test]
async fn students_query_sends_empty_variables() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": { "students": [{ "id": "1" }] }
        })))
        .mount(&server)
        .await;

    let transport = GraphQLTransport::new(server.uri());
    let records = transport
        .execute(&build_students_query(&SelectionSet::new()))
        .await
        .unwrap();

    assert_eq!(records, vec![serde_json::json!({ "id": "1" })]);
    let body = single_request_body(&server.received_requests().await.unwrap());
    assert_eq!(body["variables"], serde_json::json!({}));
    assert!(body["query"].as_str().unwrap().contains("students {\n    id\n  }"));
}

#[tokio::test]
async fn each_execution_sends_exactly_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": { "students": [] }
        })))
        .expect(2)
        .mount(&server)
        .await;

    let transport = GraphQLTransport::new(server.uri());
    let query = build_students_query(&SelectionSet::new());
    transport.execute(&query).await.unwrap();
    transport.execute(&query).await.unwrap();
}
