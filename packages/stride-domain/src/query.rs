/// Trims, lowercases, and bounds a raw search query.
///
/// The bounded form is used both for scoring and for cache-key construction,
/// so truncation can never make a cached result diverge from a computed one.
pub fn normalize_query(raw: &str, max_chars: usize) -> String {
	let normalized = raw.trim().to_lowercase();

	char_prefix(&normalized, max_chars).to_string()
}

pub fn char_prefix(value: &str, count: usize) -> &str {
	match value.char_indices().nth(count) {
		Some((index, _)) => &value[..index],
		None => value,
	}
}
