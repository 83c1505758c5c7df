use std::{
	collections::HashMap,
	future::Future,
	pin::Pin,
	sync::{
		Mutex,
		atomic::{AtomicU64, Ordering},
	},
};

use time::{Duration, OffsetDateTime};

use crate::Result;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Versioned search-result cache.
///
/// Keys embed a monotonic search version; bumping the version strands every
/// previously written entry without touching it, so bulk invalidation is a
/// single atomic increment regardless of how many queries are cached. Stale
/// entries fall out on their own once their TTL elapses.
pub trait ResultCache
where
	Self: Send + Sync,
{
	/// Current search version, initialized to 1 on first access. The
	/// initialization is atomic: the first caller wins and every later caller
	/// observes the same value.
	fn version(&self) -> BoxFuture<'_, Result<u64>>;

	/// Atomically increments the search version by 1 and returns the new
	/// value. Task mutation paths call this exactly once, after the mutation
	/// commits.
	fn bump_version(&self) -> BoxFuture<'_, Result<u64>>;

	/// Looks up an ordered id list; absent and expired entries are both
	/// misses.
	fn get<'a>(
		&'a self,
		key: &'a str,
		now: OffsetDateTime,
	) -> BoxFuture<'a, Result<Option<Vec<i64>>>>;

	/// Stores an ordered id list expiring at `now + ttl`. An empty list is a
	/// legitimate value, distinct from a miss.
	fn put<'a>(
		&'a self,
		key: &'a str,
		ids: Vec<i64>,
		ttl: Duration,
		now: OffsetDateTime,
	) -> BoxFuture<'a, Result<()>>;
}

#[derive(Debug)]
struct CacheEntry {
	ids: Vec<i64>,
	expires_at: OffsetDateTime,
}

#[derive(Debug, Default)]
pub struct MemoryCache {
	// 0 means "never accessed"; the first accessor installs 1.
	version: AtomicU64,
	entries: Mutex<HashMap<String, CacheEntry>>,
}
impl MemoryCache {
	pub fn new() -> Self {
		Self::default()
	}

	fn version_or_init(&self) -> u64 {
		let _ = self.version.compare_exchange(0, 1, Ordering::AcqRel, Ordering::Acquire);

		self.version.load(Ordering::Acquire)
	}
}
impl ResultCache for MemoryCache {
	fn version(&self) -> BoxFuture<'_, Result<u64>> {
		let version = self.version_or_init();

		Box::pin(async move { Ok(version) })
	}

	fn bump_version(&self) -> BoxFuture<'_, Result<u64>> {
		self.version_or_init();

		let version = self.version.fetch_add(1, Ordering::AcqRel) + 1;

		Box::pin(async move { Ok(version) })
	}

	fn get<'a>(
		&'a self,
		key: &'a str,
		now: OffsetDateTime,
	) -> BoxFuture<'a, Result<Option<Vec<i64>>>> {
		Box::pin(async move {
			let mut entries = self.entries.lock().unwrap_or_else(|err| err.into_inner());
			let Some(entry) = entries.get(key) else {
				return Ok(None);
			};

			if entry.expires_at <= now {
				entries.remove(key);

				return Ok(None);
			}

			Ok(Some(entry.ids.clone()))
		})
	}

	fn put<'a>(
		&'a self,
		key: &'a str,
		ids: Vec<i64>,
		ttl: Duration,
		now: OffsetDateTime,
	) -> BoxFuture<'a, Result<()>> {
		Box::pin(async move {
			let mut entries = self.entries.lock().unwrap_or_else(|err| err.into_inner());

			entries.insert(key.to_string(), CacheEntry { ids, expires_at: now + ttl });

			Ok(())
		})
	}
}
