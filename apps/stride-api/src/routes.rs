use axum::{
	Json, Router,
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;

use crate::state::AppState;
use stride_service::{
	CreateTaskRequest, CreateTaskResponse, DeleteTaskRequest, DeleteTaskResponse,
	Error as ServiceError, ListRequest, ListResponse, SearchRequest, SearchResponse,
	UpdateTaskRequest, UpdateTaskResponse,
};

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/tasks/create", post(create_task))
		.route("/v1/tasks/update", post(update_task))
		.route("/v1/tasks/delete", post(delete_task))
		.route("/v1/tasks/search", post(search))
		.route("/v1/tasks/list", get(list))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn create_task(
	State(state): State<AppState>,
	Json(payload): Json<CreateTaskRequest>,
) -> Result<Json<CreateTaskResponse>, ApiError> {
	let response = state.service.create_task(payload).await?;

	Ok(Json(response))
}

async fn update_task(
	State(state): State<AppState>,
	Json(payload): Json<UpdateTaskRequest>,
) -> Result<Json<UpdateTaskResponse>, ApiError> {
	let response = state.service.update_task(payload).await?;

	Ok(Json(response))
}

async fn delete_task(
	State(state): State<AppState>,
	Json(payload): Json<DeleteTaskRequest>,
) -> Result<Json<DeleteTaskResponse>, ApiError> {
	let response = state.service.delete_task(payload).await?;

	Ok(Json(response))
}

async fn search(
	State(state): State<AppState>,
	Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
	let response = state.service.search(payload).await?;

	Ok(Json(response))
}

async fn list(
	State(state): State<AppState>,
	Query(params): Query<ListRequest>,
) -> Result<Json<ListResponse>, ApiError> {
	let response = state.service.list(params).await?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}

impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::InvalidRequest { message } =>
				Self::new(StatusCode::UNPROCESSABLE_ENTITY, "invalid_request", message),
			ServiceError::NotFound { message } =>
				Self::new(StatusCode::NOT_FOUND, "not_found", message),
			ServiceError::Conflict { message } =>
				Self::new(StatusCode::CONFLICT, "conflict", message),
			ServiceError::Storage { message } =>
				Self::new(StatusCode::INTERNAL_SERVER_ERROR, "storage_error", message),
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
