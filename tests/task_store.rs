mod common;

use common::{context_for, task_json, MockApi, MockResponse};
use serde_json::json;
use taskdeck::model::{Assignee, CreateTask, Priority, Status, UpdateTask};
use taskdeck::store::{DELETE_TASK_ERROR, FETCH_TASKS_ERROR, FETCH_TASK_ERROR};

#[tokio::test]
async fn fetch_all_replaces_items() {
    let api = MockApi::start().await;
    let ctx = context_for(&api, None);
    api.enqueue(MockResponse::json(
        &json!([task_json("t1", "One"), task_json("t2", "Two")]).to_string(),
    ))
    .await;

    let tasks = ctx.tasks.fetch_all().await.unwrap();
    assert_eq!(tasks.len(), 2);

    let state = ctx.tasks.state();
    assert_eq!(state.items, tasks);
    assert!(!state.loading());
    assert!(state.error.is_none());

    let requests = api.captured_requests().await;
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/tasks");
}

#[tokio::test]
async fn unassigned_task_does_not_fail_the_list() {
    let api = MockApi::start().await;
    let ctx = context_for(&api, None);
    let mut orphan = task_json("t2", "Two");
    orphan["assigned_to"] = serde_json::Value::Null;
    api.enqueue(MockResponse::json(
        &json!([task_json("t1", "One"), orphan]).to_string(),
    ))
    .await;

    let tasks = ctx.tasks.fetch_all().await.unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[1].assigned_to, Assignee::Unassigned);
    assert_eq!(tasks[1].assigned_to.label(), "Unassigned");
    assert!(ctx.tasks.state().error.is_none());
}

#[tokio::test]
async fn data_wrapper_is_unwrapped() {
    let api = MockApi::start().await;
    let ctx = context_for(&api, None);
    api.enqueue(MockResponse::json(
        &json!({"data": [task_json("t1", "One")]}).to_string(),
    ))
    .await;

    ctx.tasks.fetch_all().await.unwrap();
    assert_eq!(ctx.tasks.state().items[0].id, "t1");
}

#[tokio::test]
async fn fetch_one_accepts_single_element_array() {
    let api = MockApi::start().await;
    let ctx = context_for(&api, None);
    api.enqueue(MockResponse::json(&json!([task_json("t7", "Seven")]).to_string()))
        .await;

    ctx.tasks.fetch_one("t7").await.unwrap();
    assert_eq!(ctx.tasks.state().current.map(|t| t.title), Some("Seven".into()));
    assert_eq!(api.captured_requests().await[0].path, "/api/tasks/t7");
}

#[tokio::test]
async fn fetch_failure_uses_default_message_and_keeps_items() {
    let api = MockApi::start().await;
    let ctx = context_for(&api, None);
    api.enqueue(MockResponse::json(&json!([task_json("t1", "One")]).to_string()))
        .await;
    ctx.tasks.fetch_all().await.unwrap();

    api.enqueue(MockResponse::bare_status(500)).await;
    let err = ctx.tasks.fetch_all().await.unwrap_err();
    assert_eq!(err.message, FETCH_TASKS_ERROR);

    let state = ctx.tasks.state();
    assert_eq!(state.error.as_deref(), Some(FETCH_TASKS_ERROR));
    assert_eq!(state.items.len(), 1);
    assert!(!state.loading());
}

#[tokio::test]
async fn fetch_one_failure_prefers_server_message() {
    let api = MockApi::start().await;
    let ctx = context_for(&api, None);
    api.enqueue(MockResponse::error(404, "Task not found")).await;

    let err = ctx.tasks.fetch_one("missing").await.unwrap_err();
    assert_eq!(err.message, "Task not found");
    assert_ne!(err.message, FETCH_TASK_ERROR);
    assert!(ctx.tasks.state().current.is_none());
}

#[tokio::test]
async fn create_sends_the_form_fields_and_appends() {
    let api = MockApi::start().await;
    let ctx = context_for(&api, None);
    let mut created = task_json("t9", "T");
    created["description"] = json!("D");
    created["assigned_to"] = json!("a@x.com");
    created["priority"] = json!("High");
    api.enqueue(MockResponse::json(&created.to_string())).await;

    let task = ctx
        .tasks
        .create(CreateTask {
            title: "T".into(),
            description: "D".into(),
            assigned_to: "a@x.com".into(),
            priority: Priority::High,
        })
        .await
        .unwrap();

    let request = &api.captured_requests().await[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/api/tasks");
    assert_eq!(
        request.json(),
        json!({"title": "T", "description": "D", "assigned_to": "a@x.com", "priority": "High"})
    );

    let state = ctx.tasks.state();
    assert_eq!(state.items, vec![task]);
    assert!(!state.submitting());
}

#[tokio::test]
async fn update_replaces_item_and_current() {
    let api = MockApi::start().await;
    let ctx = context_for(&api, None);
    api.enqueue(MockResponse::json(
        &json!([task_json("t1", "One"), task_json("t2", "Two")]).to_string(),
    ))
    .await;
    ctx.tasks.fetch_all().await.unwrap();
    api.enqueue(MockResponse::json(&task_json("t2", "Two").to_string()))
        .await;
    ctx.tasks.fetch_one("t2").await.unwrap();

    let mut updated = task_json("t2", "Two");
    updated["status"] = json!("Done");
    api.enqueue(MockResponse::json(&updated.to_string())).await;
    ctx.tasks
        .update(
            "t2",
            UpdateTask {
                status: Some(Status::Done),
                ..UpdateTask::default()
            },
        )
        .await
        .unwrap();

    let request = api.captured_requests().await.pop().unwrap();
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/api/tasks/t2");
    assert_eq!(request.json(), json!({"status": "Done"}));

    let state = ctx.tasks.state();
    assert_eq!(state.find("t2").map(|t| t.status), Some(Status::Done));
    assert_eq!(state.find("t1").map(|t| t.status), Some(Status::Open));
    assert_eq!(state.current.map(|t| t.status), Some(Status::Done));
}

#[tokio::test]
async fn delete_removes_only_on_success() {
    let api = MockApi::start().await;
    let ctx = context_for(&api, None);
    api.enqueue(MockResponse::json(
        &json!([task_json("t1", "One"), task_json("t2", "Two")]).to_string(),
    ))
    .await;
    ctx.tasks.fetch_all().await.unwrap();

    api.enqueue(MockResponse::bare_status(500)).await;
    assert!(ctx.tasks.delete("t1").await.is_err());
    let state = ctx.tasks.state();
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.error.as_deref(), Some(DELETE_TASK_ERROR));

    api.enqueue(MockResponse::empty()).await;
    ctx.tasks.delete("t1").await.unwrap();
    let state = ctx.tasks.state();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "t2");
    assert!(state.error.is_none());
}

#[tokio::test]
async fn overlapping_creates_keep_submitting_until_both_settle() {
    let api = MockApi::start().await;
    let ctx = context_for(&api, None);
    api.enqueue(MockResponse::json(&task_json("a", "A").to_string()).with_delay(50))
        .await;
    api.enqueue(MockResponse::json(&task_json("b", "B").to_string()).with_delay(300))
        .await;

    let payload = |title: &str| CreateTask {
        title: title.into(),
        description: "d".into(),
        assigned_to: "a@x.com".into(),
        priority: Priority::Low,
    };

    let slow_store = ctx.tasks.clone();
    let fast_store = ctx.tasks.clone();
    let fast = tokio::spawn({
        let p = payload("A");
        async move { fast_store.create(p).await }
    });
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    let slow = tokio::spawn({
        let p = payload("B");
        async move { slow_store.create(p).await }
    });

    fast.await.unwrap().unwrap();
    // The second create is still in flight.
    let state = ctx.tasks.state();
    assert!(state.submitting());
    assert_eq!(state.items.len(), 1);

    slow.await.unwrap().unwrap();
    let state = ctx.tasks.state();
    assert!(!state.submitting());
    assert_eq!(state.items.len(), 2);
}

#[tokio::test]
async fn reset_drops_late_results() {
    let api = MockApi::start().await;
    let ctx = context_for(&api, None);
    api.enqueue(MockResponse::json(&json!([task_json("t1", "One")]).to_string()).with_delay(100))
        .await;

    let store = ctx.tasks.clone();
    let pending = tokio::spawn(async move { store.fetch_all().await });
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    assert!(ctx.tasks.state().loading());

    ctx.reset();
    // The call itself still succeeds; the slice ignores it.
    pending.await.unwrap().unwrap();
    let state = ctx.tasks.state();
    assert!(state.items.is_empty());
    assert!(!state.loading());
}

#[tokio::test]
async fn bearer_token_is_passed_through() {
    let api = MockApi::start().await;
    let mut config = common::api_config(&api.base_url());
    config.auth_token = Some(taskdeck::config::SecureString::new("s3cret"));
    let ctx = common::context_with(config, None);

    ctx.tasks.fetch_all().await.unwrap();
    let request = &api.captured_requests().await[0];
    assert_eq!(request.header("authorization"), Some("Bearer s3cret"));
}
