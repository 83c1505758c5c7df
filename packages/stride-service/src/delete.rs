use serde::{Deserialize, Serialize};

use crate::{Result, Service};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteTaskRequest {
	pub id: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteTaskResponse {
	pub id: i64,
}

impl Service {
	pub async fn delete_task(&self, req: DeleteTaskRequest) -> Result<DeleteTaskResponse> {
		let record = self.tasks.remove(req.id)?;

		self.invalidate_search().await;

		Ok(DeleteTaskResponse { id: record.id })
	}
}
