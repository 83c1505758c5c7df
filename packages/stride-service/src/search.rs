mod cache;
mod prefilter;
mod ranking;

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::{info, warn};

use crate::{Error, Result, Service, TaskItem};
use stride_domain::query::normalize_query;

use self::cache::{build_cache_key, cache_key_prefix};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchRequest {
	pub query: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResponse {
	pub items: Vec<TaskItem>,
}

impl Service {
	/// Fuzzy task search: substring prefilter, fuzzy ranking, and a
	/// version-keyed result cache.
	///
	/// The ordered id list is cached under `(search version, normalized
	/// query)`; task mutations bump the version, which strands every entry
	/// written under older versions. Cache failures degrade to always-miss —
	/// caching is an optimization, never a correctness dependency.
	///
	/// There is no locking around read-version / compute / write. Two
	/// concurrent misses both compute and both write the same result. A bump
	/// that lands inside the window leaves the late write under an
	/// already-retired key; a mutation that skips the bump hook leaves the
	/// cached result stale until the TTL expires.
	pub async fn search(&self, req: SearchRequest) -> Result<SearchResponse> {
		let query = normalize_query(&req.query, self.cfg.search.max_query_chars);

		if query.is_empty() {
			return Err(Error::InvalidRequest { message: "query must be non-empty.".to_string() });
		}

		let now = OffsetDateTime::now_utc();
		let cache_cfg = &self.cfg.search.cache;
		let mut cache_key = None;
		let mut cached_ids = None;

		if cache_cfg.enabled {
			match self.cache.version().await {
				Ok(version) => {
					let key = build_cache_key(version, &query);

					match self.cache.get(&key, now).await {
						Ok(Some(ids)) => {
							info!(
								cache_key_prefix = cache_key_prefix(&key),
								hit = true,
								"Cache hit."
							);

							cached_ids = Some(ids);
						},
						Ok(None) => {
							info!(
								cache_key_prefix = cache_key_prefix(&key),
								hit = false,
								"Cache miss."
							);
						},
						Err(err) => {
							warn!(
								error = %err,
								cache_key_prefix = cache_key_prefix(&key),
								"Cache read failed."
							);
						},
					}

					cache_key = Some(key);
				},
				Err(err) => {
					warn!(error = %err, "Search version read failed; skipping cache.");
				},
			}
		}

		let ordered_ids = match cached_ids {
			Some(ids) => ids,
			None => {
				let tasks = self.tasks.all();
				let candidates =
					prefilter::prefilter(&tasks, &query, self.cfg.search.max_candidates);
				let ranked = ranking::rank(&candidates, &query, self.cfg.search.score_threshold);
				let ids: Vec<i64> = ranked.into_iter().map(|task| task.id).collect();

				// An empty list is cached too: "no results" is a valid
				// outcome, distinct from "not cached".
				if let Some(key) = cache_key {
					let ttl = Duration::seconds(cache_cfg.ttl_seconds);

					match self.cache.put(&key, ids.clone(), ttl, now).await {
						Ok(()) => {
							info!(
								cache_key_prefix = cache_key_prefix(&key),
								ttl_seconds = cache_cfg.ttl_seconds,
								result_count = ids.len(),
								"Cache stored."
							);
						},
						Err(err) => {
							warn!(
								error = %err,
								cache_key_prefix = cache_key_prefix(&key),
								"Cache write failed."
							);
						},
					}
				}

				ids
			},
		};
		let items =
			self.tasks.fetch_ordered(&ordered_ids).into_iter().map(TaskItem::from).collect();

		Ok(SearchResponse { items })
	}
}
