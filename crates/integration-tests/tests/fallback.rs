mod harness;

use harness::config::ConfigBuilder;
use harness::server::TestServer;
use serde_json::json;

async fn generic_server() -> TestServer {
    let config = ConfigBuilder::new().with_generic_fallback("something went wrong").build();
    TestServer::start(config).await.unwrap()
}

#[tokio::test]
async fn generic_message_hides_unhandled_text() {
    let server = generic_server().await;

    let reply = server.get("/demo/unhandled?message=db%20password%20rejected").await;

    assert_eq!(reply.status, 500);
    assert_eq!(
        reply.json(),
        json!({"error": "INTERNAL_ERROR", "message": "something went wrong", "detail": null})
    );
}

#[tokio::test]
async fn generic_message_applies_to_panics() {
    let server = generic_server().await;

    let reply = server.get("/demo/panic").await;

    assert_eq!(reply.status, 500);
    assert_eq!(reply.json()["message"], "something went wrong");
}

#[tokio::test]
async fn generic_message_leaves_classified_errors_alone() {
    let server = generic_server().await;

    let reply = server
        .post("/demo/domain/bad_request", &json!({"message": "missing field"}))
        .await;

    assert_eq!(reply.status, 400);
    assert_eq!(
        reply.json(),
        json!({"error": "BAD_REQUEST", "message": "missing field", "detail": null})
    );
}
