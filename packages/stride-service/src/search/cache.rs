use stride_domain::query::char_prefix;

const CACHE_KEY_NAMESPACE: &str = "task_search";
const LOG_KEY_PREFIX_CHARS: usize = 24;

/// Builds the cache key for an already-normalized query. The key embeds the
/// search version, so bumping the version retires every older entry without
/// deleting anything. The query is length-bounded upstream, which keeps key
/// cardinality bounded as well.
pub(crate) fn build_cache_key(version: u64, normalized_query: &str) -> String {
	format!("{CACHE_KEY_NAMESPACE}:{version}:{normalized_query}")
}

pub(crate) fn cache_key_prefix(key: &str) -> &str {
	char_prefix(key, LOG_KEY_PREFIX_CHARS)
}
