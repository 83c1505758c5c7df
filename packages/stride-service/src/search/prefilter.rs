use stride_domain::query::char_prefix;
use stride_storage::models::TaskRecord;

const NAME_NEEDLE_CHARS: usize = 2;
const DESCRIPTION_NEEDLE_CHARS: usize = 4;

/// Cheap, high-recall narrowing pass ahead of fuzzy scoring. Keeps tasks
/// whose name contains the first 2 chars of the query, or whose description
/// contains the first 4; queries shorter than a needle use the whole query.
/// False positives are expected and removed by ranking. A query whose match
/// sits mid-string past the needle can be missed; that is the accepted
/// trade-off for an index-friendly containment check.
///
/// Output keeps the input (storage) order and is capped at `cap` candidates.
pub(crate) fn prefilter<'a>(
	tasks: &'a [TaskRecord],
	query: &str,
	cap: usize,
) -> Vec<&'a TaskRecord> {
	let name_needle = char_prefix(query, NAME_NEEDLE_CHARS);
	let description_needle = char_prefix(query, DESCRIPTION_NEEDLE_CHARS);

	tasks
		.iter()
		.filter(|task| {
			task.name.to_lowercase().contains(name_needle)
				|| task.description.as_deref().is_some_and(|description| {
					description.to_lowercase().contains(description_needle)
				})
		})
		.take(cap)
		.collect()
}
