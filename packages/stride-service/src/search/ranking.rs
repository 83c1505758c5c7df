use std::cmp::Ordering;

use stride_domain::similarity::partial_ratio;
use stride_storage::models::TaskRecord;

#[derive(Debug)]
pub(crate) struct ScoredTask {
	pub(crate) id: i64,
	pub(crate) score: f32,
}

/// Scores each candidate against the query and orders survivors by score
/// descending. The score is the better of the name and description fields
/// (best field wins, no weighting); a missing description contributes 0.
/// Candidates strictly below `threshold` are discarded. The sort is stable,
/// so candidates with equal scores keep their prefilter (storage) order.
pub(crate) fn rank(candidates: &[&TaskRecord], query: &str, threshold: f32) -> Vec<ScoredTask> {
	let mut scored: Vec<ScoredTask> = candidates
		.iter()
		.filter_map(|task| {
			let name_score = partial_ratio(query, &task.name.to_lowercase());
			let description_score = task
				.description
				.as_deref()
				.map(|description| partial_ratio(query, &description.to_lowercase()))
				.unwrap_or(0.0);
			let score = name_score.max(description_score);

			(score >= threshold).then_some(ScoredTask { id: task.id, score })
		})
		.collect();

	scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

	scored
}
