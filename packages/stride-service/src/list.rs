use serde::{Deserialize, Serialize};

use crate::{Result, Service, TaskItem};
use stride_storage::{
	models::{TaskPriority, TaskStatus},
	tasks::TaskFilter,
};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ListRequest {
	#[serde(default)]
	pub status: Option<TaskStatus>,
	#[serde(default)]
	pub priority: Option<TaskPriority>,
	#[serde(default)]
	pub project_id: Option<i64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListResponse {
	pub items: Vec<TaskItem>,
}

impl Service {
	/// Lists tasks matching every provided filter, in storage order.
	///
	/// Listing and fuzzy search are deliberately separate operations: the
	/// search cache key embeds only the version and the query, so folding
	/// filters into the search path would let two differently-filtered
	/// requests share a cached result set.
	pub async fn list(&self, req: ListRequest) -> Result<ListResponse> {
		let filter = TaskFilter {
			status: req.status,
			priority: req.priority,
			project_id: req.project_id,
		};
		let items = self.tasks.list(&filter).into_iter().map(TaskItem::from).collect();

		Ok(ListResponse { items })
	}
}
