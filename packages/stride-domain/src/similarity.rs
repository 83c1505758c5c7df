use strsim::normalized_levenshtein;

/// Best-window fuzzy similarity between two strings, in `[0.0, 100.0]`.
///
/// The shorter string slides across every equal-length character window of
/// the longer one; the result is 100 times the best normalized Levenshtein
/// similarity over those windows. A short query therefore scores highly
/// against a long text that contains it (or a lightly misspelled form of it)
/// anywhere, which a whole-string ratio would not.
///
/// An empty query or an empty candidate scores 0.
pub fn partial_ratio(query: &str, candidate: &str) -> f32 {
	if query.is_empty() || candidate.is_empty() {
		return 0.0;
	}

	let (needle, haystack) = if query.chars().count() <= candidate.chars().count() {
		(query, candidate)
	} else {
		(candidate, query)
	};
	let needle_len = needle.chars().count();
	// Char-start byte offsets, plus the end offset so windows can be sliced
	// without allocating per window.
	let mut bounds: Vec<usize> = haystack.char_indices().map(|(index, _)| index).collect();

	bounds.push(haystack.len());

	let window_count = bounds.len() - needle_len;
	let mut best = 0.0_f64;

	for start in 0..window_count {
		let window = &haystack[bounds[start]..bounds[start + needle_len]];
		let similarity = normalized_levenshtein(needle, window);

		if similarity > best {
			best = similarity;
		}
		if best >= 1.0 {
			break;
		}
	}

	(best * 100.0) as f32
}

#[cfg(test)]
mod tests {
	use crate::similarity::partial_ratio;

	#[test]
	fn identical_strings_score_100() {
		assert_eq!(partial_ratio("report", "report"), 100.0);
	}

	#[test]
	fn contained_query_scores_100() {
		assert_eq!(partial_ratio("report", "monthly report"), 100.0);
	}

	#[test]
	fn empty_candidate_scores_0() {
		assert_eq!(partial_ratio("report", ""), 0.0);
		assert_eq!(partial_ratio("", "report"), 0.0);
	}

	#[test]
	fn typo_in_query_still_scores_high() {
		let score = partial_ratio("reprot", "monthly report");

		assert!(score > 30.0, "score was {score}");
		assert!(score < 100.0, "score was {score}");
	}

	#[test]
	fn unrelated_strings_score_low() {
		let score = partial_ratio("xyzqw", "monthly report");

		assert!(score < 30.0, "score was {score}");
	}

	#[test]
	fn longer_query_than_candidate_slides_the_candidate() {
		assert_eq!(partial_ratio("the quarterly report draft", "report"), 100.0);
	}

	#[test]
	fn multibyte_input_is_sliced_on_char_boundaries() {
		assert_eq!(partial_ratio("日本", "東京と日本の地図"), 100.0);
	}
}
