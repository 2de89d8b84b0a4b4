use std::collections::HashMap;

use super::followers::Followers;

/// Empirical next-character model over k-character windows.
///
/// The `FrequencyTable` maps every window of `k` characters observed in the
/// source content (a *seed*) to the multiset of characters that followed it,
/// each with an occurrence count. It is built once, in a single pass, and is
/// read-only afterwards.
///
/// # Responsibilities
/// - Scan the source content once and count, for every k-length window,
///   the character observed immediately after it
/// - Answer seed lookups during generation
///
/// # Invariants
/// - Every stored seed is exactly `k` characters long (for `k > 0`)
/// - Every stored seed has at least one follower, every count is >= 1
/// - The table is empty iff `k == 0` or `content.len() <= k`
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
	/// Window length the table was built with.
	k: usize,

	/// Mapping from a seed (k characters) to its observed followers.
	seeds: HashMap<String, Followers>,
}

impl FrequencyTable {
	/// Builds the table from the source content in a single linear pass.
	///
	/// For each start index `i` in `0..=content.len() - k - 1`, the window
	/// `content[i..i + k]` gains one occurrence of `content[i + k]`.
	/// Overlapping occurrences accumulate into the same count.
	///
	/// # Notes
	/// - Deterministic: the same content and `k` always produce the same table.
	/// - For `k == 0` the uniform generation regime never consults the table,
	///   so the scan is skipped and the table stays empty.
	/// - Likewise empty (and useless to generation) when `content.len() <= k`;
	///   callers validate `k < content.len()` before generating.
	pub fn build(content: &[char], k: usize) -> Self {
		let mut seeds: HashMap<String, Followers> = HashMap::new();

		if k > 0 {
			for window in content.windows(k + 1) {
				let seed: String = window[..k].iter().collect();
				seeds.entry(seed).or_default().record(window[k]);
			}
		}

		Self { k, seeds }
	}

	/// Returns the window length the table was built with.
	pub fn k(&self) -> usize {
		self.k
	}

	/// Returns the number of distinct seeds.
	pub fn seed_count(&self) -> usize {
		self.seeds.len()
	}

	/// Returns `true` when the table holds no seeds.
	pub fn is_empty(&self) -> bool {
		self.seeds.is_empty()
	}

	/// Returns the total number of observed transitions summed over all
	/// seeds: `content.len() - k` for the content the table was built from.
	pub fn observations(&self) -> usize {
		self.seeds.values().map(Followers::total).sum()
	}

	/// Returns `true` if `seed` was observed as a window in the source.
	pub fn contains_seed(&self, seed: &str) -> bool {
		self.seeds.contains_key(seed)
	}

	/// Looks up the followers of a seed, as a read-only view.
	pub fn get(&self, seed: &str) -> Option<&Followers> {
		self.seeds.get(seed)
	}
}
