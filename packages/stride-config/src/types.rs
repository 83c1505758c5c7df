use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	#[serde(default)]
	pub search: Search,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Search {
	/// Upper bound on candidates kept by the substring prefilter.
	pub max_candidates: usize,
	/// Minimum fuzzy score a candidate needs to appear in results.
	pub score_threshold: f32,
	/// Queries are truncated to this many chars before scoring and caching.
	pub max_query_chars: usize,
	pub cache: SearchCache,
}
impl Default for Search {
	fn default() -> Self {
		Self {
			max_candidates: 300,
			score_threshold: 30.0,
			max_query_chars: 128,
			cache: SearchCache::default(),
		}
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SearchCache {
	pub enabled: bool,
	pub ttl_seconds: i64,
}
impl Default for SearchCache {
	fn default() -> Self {
		Self { enabled: true, ttl_seconds: 300 }
	}
}
