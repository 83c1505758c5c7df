use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Result, Service, TaskItem};
use stride_storage::{
	models::{TaskPriority, TaskStatus},
	tasks::NewTask,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateTaskRequest {
	pub name: String,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub project_id: Option<i64>,
	#[serde(default)]
	pub status: TaskStatus,
	#[serde(default)]
	pub priority: TaskPriority,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateTaskResponse {
	pub task: TaskItem,
}

impl Service {
	pub async fn create_task(&self, req: CreateTaskRequest) -> Result<CreateTaskResponse> {
		let now = OffsetDateTime::now_utc();
		let record = self.tasks.insert(
			NewTask {
				name: req.name,
				description: req.description,
				project_id: req.project_id,
				status: req.status,
				priority: req.priority,
			},
			now,
		)?;

		self.invalidate_search().await;

		Ok(CreateTaskResponse { task: record.into() })
	}
}
