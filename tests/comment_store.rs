mod common;

use common::{comment_json, context_for, MockApi, MockResponse};
use serde_json::json;
use taskdeck::store::{ADD_COMMENT_ERROR, DELETE_COMMENT_ERROR, FETCH_COMMENTS_ERROR};

#[tokio::test]
async fn fetch_for_task_hits_task_scoped_path() {
    let api = MockApi::start().await;
    let ctx = context_for(&api, None);
    api.enqueue(MockResponse::json(
        &json!([comment_json("c1", "t1", "first"), comment_json("c2", "t1", "second")])
            .to_string(),
    ))
    .await;

    ctx.comments.fetch_for_task("t1").await.unwrap();

    assert_eq!(api.captured_requests().await[0].path, "/api/comments/t1");
    let state = ctx.comments.state();
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].content, "second");
}

#[tokio::test]
async fn create_posts_content_and_appends() {
    let api = MockApi::start().await;
    let ctx = context_for(&api, None);
    api.enqueue(MockResponse::json(&comment_json("c3", "t1", "looks good").to_string()))
        .await;

    ctx.comments.create("t1", "looks good").await.unwrap();

    let request = &api.captured_requests().await[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/api/comments/t1");
    assert_eq!(request.json(), json!({"content": "looks good"}));
    assert_eq!(ctx.comments.state().items[0].id, "c3");
}

#[tokio::test]
async fn delete_404_surfaces_server_message() {
    let api = MockApi::start().await;
    let ctx = context_for(&api, None);
    api.enqueue(MockResponse::json(&json!([comment_json("c1", "t1", "x")]).to_string()))
        .await;
    ctx.comments.fetch_for_task("t1").await.unwrap();

    api.enqueue(MockResponse::error(404, "Comment not found")).await;
    let err = ctx.comments.delete("c1").await.unwrap_err();

    assert_eq!(err.message, "Comment not found");
    let state = ctx.comments.state();
    assert_eq!(state.error.as_deref(), Some("Comment not found"));
    assert_eq!(state.items.len(), 1);
    assert_eq!(api.captured_requests().await[1].path, "/api/comments/c1");
}

#[tokio::test]
async fn delete_404_without_message_uses_default() {
    let api = MockApi::start().await;
    let ctx = context_for(&api, None);
    api.enqueue(MockResponse::bare_status(404)).await;

    let err = ctx.comments.delete("c1").await.unwrap_err();
    assert_eq!(err.message, DELETE_COMMENT_ERROR);
    assert_eq!(
        ctx.comments.state().error.as_deref(),
        Some("Failed to delete Comment")
    );
}

#[tokio::test]
async fn error_field_is_read_when_message_is_absent() {
    let api = MockApi::start().await;
    let ctx = context_for(&api, None);
    api.enqueue(MockResponse {
        status: 400,
        body: r#"{"error":"Content is required"}"#.to_string(),
        delay_ms: 0,
    })
    .await;

    let err = ctx.comments.create("t1", "x").await.unwrap_err();
    assert_eq!(err.message, "Content is required");
    assert_ne!(err.message, ADD_COMMENT_ERROR);
}

#[tokio::test]
async fn transport_failure_uses_default() {
    // Nothing listens on the mock's address once it is dropped.
    let api = MockApi::start().await;
    let base = api.base_url();
    drop(api);
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let ctx = common::context_with(common::api_config(&base), None);
    let err = ctx.comments.fetch_for_task("t1").await.unwrap_err();
    assert_eq!(err.message, FETCH_COMMENTS_ERROR);
    assert!(!ctx.comments.state().loading());
}
