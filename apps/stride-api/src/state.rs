use std::sync::Arc;

use stride_service::Service;
use stride_storage::{cache::MemoryCache, tasks::TaskStore};

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<Service>,
}
impl AppState {
	pub fn new(config: stride_config::Config) -> Self {
		let tasks = Arc::new(TaskStore::new());
		let cache = Arc::new(MemoryCache::new());
		let service = Service::new(config, tasks, cache);

		Self { service: Arc::new(service) }
	}
}
