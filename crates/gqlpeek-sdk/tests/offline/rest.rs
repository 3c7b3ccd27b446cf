use super::*;

fn cat_api_response() -> Value {
    serde_json::json!([
        {
            "id": "0XYvRd7oD",
            "url": "https://cdn2.thecatapi.com/images/0XYvRd7oD.jpg",
            "width": 1204,
            "height": 1445,
            "breeds": [{ "id": "abys", "name": "Abyssinian", "origin": "Egypt" }]
        },
        {
            "id": "ozEvzdVM-",
            "url": "https://cdn2.thecatapi.com/images/ozEvzdVM-.jpg",
            "width": 1200,
            "height": 800,
            "breeds": []
        }
    ])
}

#[tokio::test]
async fn sends_get_with_limit_and_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/images/search"))
        .and(query_param("limit", "3"))
        .and(header("x-api-key", "live_test_key_123456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cat_api_response()))
        .mount(&server)
        .await;

    let transport = RestTransport::new(server.uri(), Some("live_test_key_123456".to_string()));
    let records = transport
        .execute(&build_cat_query(&selection(&["id", "url"]), "3", ""))
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0],
        serde_json::json!({
            "id": "0XYvRd7oD",
            "url": "https://cdn2.thecatapi.com/images/0XYvRd7oD.jpg"
        })
    );
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty(), "GET carries no body");
}

#[tokio::test]
async fn breed_id_becomes_breed_ids_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/images/search"))
        .and(query_param("breed_ids", "abys"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cat_api_response()))
        .mount(&server)
        .await;

    let transport = RestTransport::new(server.uri(), None);
    let records = transport
        .execute(&build_cat_query(&selection(&["breeds"]), "1", " abys "))
        .await
        .unwrap();

    assert_eq!(
        records[0],
        serde_json::json!({ "breeds": [{ "id": "abys", "name": "Abyssinian" }] })
    );
}

#[tokio::test]
async fn omits_api_key_header_without_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let transport = RestTransport::new(server.uri(), None);
    let records = transport
        .execute(&build_cat_query(&SelectionSet::new(), "1", ""))
        .await
        .unwrap();

    assert!(records.is_empty());
    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("x-api-key"));
}

#[tokio::test]
async fn limit_is_clamped_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let transport = RestTransport::new(server.uri(), None);
    transport
        .execute(&build_cat_query(&SelectionSet::new(), "500", ""))
        .await
        .unwrap();
}

#[tokio::test]
async fn non_success_status_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let transport = RestTransport::new(server.uri(), None);
    let err = transport
        .execute(&build_cat_query(&SelectionSet::new(), "1", ""))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "HTTP error 500: boom");
}
