pub mod create;
pub mod delete;
pub mod list;
pub mod search;
pub mod time_serde;
pub mod update;

mod error;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use create::{CreateTaskRequest, CreateTaskResponse};
pub use delete::{DeleteTaskRequest, DeleteTaskResponse};
pub use error::{Error, Result};
pub use list::{ListRequest, ListResponse};
pub use search::{SearchRequest, SearchResponse};
pub use update::{UpdateTaskRequest, UpdateTaskResponse};

use stride_config::Config;
use stride_storage::{
	cache::ResultCache,
	models::{TaskPriority, TaskRecord, TaskStatus},
	tasks::TaskStore,
};

pub struct Service {
	pub cfg: Config,
	pub tasks: Arc<TaskStore>,
	pub cache: Arc<dyn ResultCache>,
}

impl Service {
	pub fn new(cfg: Config, tasks: Arc<TaskStore>, cache: Arc<dyn ResultCache>) -> Self {
		Self { cfg, tasks, cache }
	}

	/// Invalidation trigger: bumps the search version so every cached result
	/// set becomes unreachable under the new version's keys. Each task
	/// mutation path calls this exactly once, after the mutation commits. A
	/// failed bump is logged rather than propagated; the mutation is already
	/// committed and staleness stays bounded by the cache TTL.
	pub(crate) async fn invalidate_search(&self) {
		match self.cache.bump_version().await {
			Ok(version) => {
				tracing::debug!(version, "Search version bumped.");
			},
			Err(err) => {
				tracing::warn!(
					error = %err,
					"Search version bump failed; cached results may be stale until expiry."
				);
			},
		}
	}
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaskItem {
	pub id: i64,
	pub name: String,
	pub description: Option<String>,
	pub project_id: Option<i64>,
	pub status: TaskStatus,
	pub priority: TaskPriority,
	#[serde(with = "crate::time_serde")]
	pub created_at: time::OffsetDateTime,
	#[serde(with = "crate::time_serde")]
	pub updated_at: time::OffsetDateTime,
}
impl From<TaskRecord> for TaskItem {
	fn from(record: TaskRecord) -> Self {
		Self {
			id: record.id,
			name: record.name,
			description: record.description,
			project_id: record.project_id,
			status: record.status,
			priority: record.priority,
			created_at: record.created_at,
			updated_at: record.updated_at,
		}
	}
}
