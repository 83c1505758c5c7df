use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub const MAX_TASK_NAME_CHARS: usize = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct TaskRecord {
	pub id: i64,
	pub name: String,
	pub description: Option<String>,
	pub project_id: Option<i64>,
	pub status: TaskStatus,
	pub priority: TaskPriority,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
	#[default]
	Todo,
	Progress,
	Done,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
	Low,
	#[default]
	Medium,
	High,
}
