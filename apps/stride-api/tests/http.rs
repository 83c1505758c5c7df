use axum::{
	Router,
	body::{self, Body},
	http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::util::ServiceExt;

use stride_api::{routes, state::AppState};
use stride_testkit::test_config;

fn app() -> Router {
	routes::router(AppState::new(test_config()))
}

async fn send_json(app: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
	let response = app
		.clone()
		.oneshot(
			Request::builder()
				.method("POST")
				.uri(uri)
				.header("content-type", "application/json")
				.body(Body::from(payload.to_string()))
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call route.");
	let status = response.status();
	let bytes = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");
	let json = if bytes.is_empty() {
		Value::Null
	} else {
		serde_json::from_slice(&bytes).expect("Failed to parse response body.")
	};

	(status, json)
}

async fn send_get(app: &Router, uri: &str) -> (StatusCode, Value) {
	let response = app
		.clone()
		.oneshot(Request::builder().uri(uri).body(Body::empty()).expect("Failed to build request."))
		.await
		.expect("Failed to call route.");
	let status = response.status();
	let bytes = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");
	let json = if bytes.is_empty() {
		Value::Null
	} else {
		serde_json::from_slice(&bytes).expect("Failed to parse response body.")
	};

	(status, json)
}

#[tokio::test]
async fn health_ok() {
	let app = app();
	let response = app
		.oneshot(
			Request::builder().uri("/health").body(Body::empty()).expect("Failed to build request."),
		)
		.await
		.expect("Failed to call /health.");

	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_then_search_round_trip() {
	let app = app();
	let (status, created) = send_json(
		&app,
		"/v1/tasks/create",
		json!({ "name": "Monthly Report", "description": "prepare the usual numbers" }),
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(created["task"]["name"], "Monthly Report");
	assert_eq!(created["task"]["status"], "todo");

	let (status, found) = send_json(&app, "/v1/tasks/search", json!({ "query": "report" })).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(found["items"][0]["name"], "Monthly Report");
}

#[tokio::test]
async fn search_reflects_mutations_through_the_api() {
	let app = app();

	send_json(&app, "/v1/tasks/create", json!({ "name": "Monthly Report" })).await;

	let (_, first) = send_json(&app, "/v1/tasks/search", json!({ "query": "report" })).await;

	assert_eq!(first["items"].as_array().expect("items").len(), 1);

	send_json(&app, "/v1/tasks/create", json!({ "name": "Quarterly Report" })).await;

	let (_, second) = send_json(&app, "/v1/tasks/search", json!({ "query": "report" })).await;

	assert_eq!(second["items"].as_array().expect("items").len(), 2);

	let id = second["items"][0]["id"].as_i64().expect("id");

	send_json(&app, "/v1/tasks/delete", json!({ "id": id })).await;

	let (_, third) = send_json(&app, "/v1/tasks/search", json!({ "query": "report" })).await;

	assert_eq!(third["items"].as_array().expect("items").len(), 1);
}

#[tokio::test]
async fn blank_search_query_is_unprocessable() {
	let app = app();
	let (status, body) = send_json(&app, "/v1/tasks/search", json!({ "query": "   " })).await;

	assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
	assert_eq!(body["error_code"], "invalid_request");
}

#[tokio::test]
async fn duplicate_task_name_conflicts() {
	let app = app();

	send_json(&app, "/v1/tasks/create", json!({ "name": "Deploy" })).await;

	let (status, body) = send_json(&app, "/v1/tasks/create", json!({ "name": "Deploy" })).await;

	assert_eq!(status, StatusCode::CONFLICT);
	assert_eq!(body["error_code"], "conflict");
}

#[tokio::test]
async fn deleting_a_missing_task_is_not_found() {
	let app = app();
	let (status, body) = send_json(&app, "/v1/tasks/delete", json!({ "id": 99 })).await;

	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(body["error_code"], "not_found");
}

#[tokio::test]
async fn list_filters_by_status() {
	let app = app();

	send_json(&app, "/v1/tasks/create", json!({ "name": "Open item", "status": "todo" })).await;
	send_json(&app, "/v1/tasks/create", json!({ "name": "Closed item", "status": "done" })).await;

	let (status, body) = send_get(&app, "/v1/tasks/list?status=done").await;

	assert_eq!(status, StatusCode::OK);

	let items = body["items"].as_array().expect("items");

	assert_eq!(items.len(), 1);
	assert_eq!(items[0]["name"], "Closed item");
}

#[tokio::test]
async fn update_changes_status_through_the_api() {
	let app = app();
	let (_, created) = send_json(&app, "/v1/tasks/create", json!({ "name": "Draft" })).await;
	let id = created["task"]["id"].as_i64().expect("id");
	let (status, updated) =
		send_json(&app, "/v1/tasks/update", json!({ "id": id, "status": "done" })).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(updated["task"]["status"], "done");
	assert_eq!(updated["task"]["name"], "Draft");
}
