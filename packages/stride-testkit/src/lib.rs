use time::{Duration, OffsetDateTime};

use stride_config::{Config, Search, Service};
use stride_storage::{
	Error, Result,
	cache::{BoxFuture, ResultCache},
	tasks::{NewTask, TaskStore},
};

pub fn test_config() -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:0".to_string(),
			log_level: "info".to_string(),
		},
		search: Search::default(),
	}
}

pub fn fixed_now() -> OffsetDateTime {
	OffsetDateTime::from_unix_timestamp(1_700_000_000).expect("Timestamp must be valid.")
}

pub fn task(name: &str, description: Option<&str>) -> NewTask {
	NewTask {
		name: name.to_string(),
		description: description.map(str::to_string),
		..NewTask::default()
	}
}

/// Seeds the store directly, bypassing the service layer (and therefore the
/// search-version bump). Returns ids in seed order.
pub fn seed_tasks(store: &TaskStore, specs: &[(&str, Option<&str>)]) -> Vec<i64> {
	specs
		.iter()
		.map(|(name, description)| {
			store.insert(task(name, *description), fixed_now()).expect("Failed to seed task.").id
		})
		.collect()
}

/// Cache double whose every operation fails, for tests of the degraded
/// always-miss path.
#[derive(Debug, Default)]
pub struct FailingCache;
impl FailingCache {
	fn unavailable<T>() -> Result<T> {
		Err(Error::Cache("cache backend unavailable".to_string()))
	}
}
impl ResultCache for FailingCache {
	fn version(&self) -> BoxFuture<'_, Result<u64>> {
		Box::pin(async { Self::unavailable() })
	}

	fn bump_version(&self) -> BoxFuture<'_, Result<u64>> {
		Box::pin(async { Self::unavailable() })
	}

	fn get<'a>(
		&'a self,
		_key: &'a str,
		_now: OffsetDateTime,
	) -> BoxFuture<'a, Result<Option<Vec<i64>>>> {
		Box::pin(async { Self::unavailable() })
	}

	fn put<'a>(
		&'a self,
		_key: &'a str,
		_ids: Vec<i64>,
		_ttl: Duration,
		_now: OffsetDateTime,
	) -> BoxFuture<'a, Result<()>> {
		Box::pin(async { Self::unavailable() })
	}
}
