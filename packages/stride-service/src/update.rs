use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Result, Service, TaskItem};
use stride_storage::{
	models::{TaskPriority, TaskStatus},
	tasks::TaskPatch,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
	pub id: i64,
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub project_id: Option<i64>,
	#[serde(default)]
	pub status: Option<TaskStatus>,
	#[serde(default)]
	pub priority: Option<TaskPriority>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateTaskResponse {
	pub task: TaskItem,
}

impl Service {
	pub async fn update_task(&self, req: UpdateTaskRequest) -> Result<UpdateTaskResponse> {
		let now = OffsetDateTime::now_utc();
		let record = self.tasks.update(
			req.id,
			TaskPatch {
				name: req.name,
				description: req.description,
				project_id: req.project_id,
				status: req.status,
				priority: req.priority,
			},
			now,
		)?;

		self.invalidate_search().await;

		Ok(UpdateTaskResponse { task: record.into() })
	}
}
