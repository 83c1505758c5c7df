use std::{
	collections::BTreeMap,
	sync::{Mutex, MutexGuard},
};

use time::OffsetDateTime;

use crate::{
	Error, Result,
	models::{MAX_TASK_NAME_CHARS, TaskPriority, TaskRecord, TaskStatus},
};

#[derive(Clone, Debug, Default)]
pub struct NewTask {
	pub name: String,
	pub description: Option<String>,
	pub project_id: Option<i64>,
	pub status: TaskStatus,
	pub priority: TaskPriority,
}

#[derive(Clone, Debug, Default)]
pub struct TaskPatch {
	pub name: Option<String>,
	pub description: Option<String>,
	pub project_id: Option<i64>,
	pub status: Option<TaskStatus>,
	pub priority: Option<TaskPriority>,
}

#[derive(Clone, Debug, Default)]
pub struct TaskFilter {
	pub status: Option<TaskStatus>,
	pub priority: Option<TaskPriority>,
	pub project_id: Option<i64>,
}

/// In-memory task store. Iteration order is id order, which doubles as the
/// storage order the search prefilter sees.
#[derive(Debug, Default)]
pub struct TaskStore {
	inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
	next_id: i64,
	tasks: BTreeMap<i64, TaskRecord>,
}

impl TaskStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&self, new: NewTask, now: OffsetDateTime) -> Result<TaskRecord> {
		let name = new.name.trim().to_string();

		validate_name(&name)?;

		let mut inner = self.locked();

		if inner.tasks.values().any(|task| task.name == name) {
			return Err(Error::Conflict(format!("Task name {name:?} is already taken.")));
		}

		inner.next_id += 1;

		let record = TaskRecord {
			id: inner.next_id,
			name,
			description: new.description,
			project_id: new.project_id,
			status: new.status,
			priority: new.priority,
			created_at: now,
			updated_at: now,
		};

		inner.tasks.insert(record.id, record.clone());

		Ok(record)
	}

	pub fn update(&self, id: i64, patch: TaskPatch, now: OffsetDateTime) -> Result<TaskRecord> {
		let mut inner = self.locked();
		let name = match patch.name {
			Some(name) => {
				let name = name.trim().to_string();

				validate_name(&name)?;

				if inner.tasks.values().any(|task| task.id != id && task.name == name) {
					return Err(Error::Conflict(format!("Task name {name:?} is already taken.")));
				}

				Some(name)
			},
			None => None,
		};
		let Some(task) = inner.tasks.get_mut(&id) else {
			return Err(Error::NotFound(format!("Task {id} does not exist.")));
		};

		if let Some(name) = name {
			task.name = name;
		}
		if let Some(description) = patch.description {
			task.description = Some(description);
		}
		if let Some(project_id) = patch.project_id {
			task.project_id = Some(project_id);
		}
		if let Some(status) = patch.status {
			task.status = status;
		}
		if let Some(priority) = patch.priority {
			task.priority = priority;
		}

		task.updated_at = now;

		Ok(task.clone())
	}

	pub fn remove(&self, id: i64) -> Result<TaskRecord> {
		self.locked()
			.tasks
			.remove(&id)
			.ok_or_else(|| Error::NotFound(format!("Task {id} does not exist.")))
	}

	pub fn get(&self, id: i64) -> Option<TaskRecord> {
		self.locked().tasks.get(&id).cloned()
	}

	pub fn all(&self) -> Vec<TaskRecord> {
		self.locked().tasks.values().cloned().collect()
	}

	pub fn list(&self, filter: &TaskFilter) -> Vec<TaskRecord> {
		self.locked()
			.tasks
			.values()
			.filter(|task| {
				filter.status.is_none_or(|status| task.status == status)
					&& filter.priority.is_none_or(|priority| task.priority == priority)
					&& filter.project_id.is_none_or(|project_id| {
						task.project_id.is_some_and(|value| value == project_id)
					})
			})
			.cloned()
			.collect()
	}

	/// Resolves ids to records preserving the given order. Ids that no longer
	/// exist are silently dropped.
	pub fn fetch_ordered(&self, ids: &[i64]) -> Vec<TaskRecord> {
		let inner = self.locked();

		ids.iter().filter_map(|id| inner.tasks.get(id).cloned()).collect()
	}

	fn locked(&self) -> MutexGuard<'_, Inner> {
		self.inner.lock().unwrap_or_else(|err| err.into_inner())
	}
}

fn validate_name(name: &str) -> Result<()> {
	if name.is_empty() {
		return Err(Error::InvalidArgument("Task name must be non-empty.".to_string()));
	}
	if name.chars().count() > MAX_TASK_NAME_CHARS {
		return Err(Error::InvalidArgument(format!(
			"Task name must be at most {MAX_TASK_NAME_CHARS} characters."
		)));
	}

	Ok(())
}
