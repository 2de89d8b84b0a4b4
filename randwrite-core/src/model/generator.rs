use rand::Rng;

use super::frequency_table::FrequencyTable;

/// Generates `length` characters of pseudo-random text imitating `content`.
///
/// # Behavior
/// Two regimes, selected by the model order:
/// - `k == 0`: every output character is a uniform draw over the positions
///   of `content`. Each *occurrence* is equally likely, so this reproduces
///   the empirical character distribution of the source; the table is not
///   consulted at all.
/// - `k > 0`: a uniformly chosen k-character window of `content` starts the
///   output; each further character is a weighted draw among the followers
///   of the current seed, after which the seed slides by one character. A
///   slid seed with no entry in the table (a dead end) is replaced by a
///   fresh random window, which is not appended to the output.
///
/// # Preconditions (validated by the caller, not re-checked here)
/// - `k < content.len()`, strictly: the seed start range `[0, len - k)`
///   must be non-empty
/// - `table` was built from this `content` with this `k`
///
/// # Notes
/// - Returns the empty string when `length == 0`.
/// - When `length < k`, the output is the first `length` characters of the
///   randomly chosen initial seed; the sampling loop never runs.
/// - All randomness flows through `rng`, so a seeded generator makes the
///   output reproducible.
pub fn generate_text<R: Rng>(
	content: &[char],
	table: &FrequencyTable,
	k: usize,
	length: usize,
	rng: &mut R,
) -> String {
	if length == 0 {
		return String::new();
	}

	// Context-free regime: direct indexing, no table
	if k == 0 {
		return (0..length)
			.map(|_| content[rng.random_range(0..content.len())])
			.collect();
	}

	let mut output: Vec<char> = Vec::with_capacity(length);
	let mut seed = random_seed(content, k, rng);
	output.extend(seed.chars().take(length));

	while output.len() < length {
		// Initial seeds and reseeds come straight from the content, and a
		// slid seed is replaced below as soon as it leaves the table, so
		// this lookup succeeds; a mismatched table is still answered with
		// a reseed rather than a panic.
		let Some(next) = table.get(&seed).and_then(|followers| followers.sample(rng)) else {
			seed = random_seed(content, k, rng);
			continue;
		};

		output.push(next);

		// Slide the window: drop the oldest character, append the newest
		seed.remove(0);
		seed.push(next);

		// Dead end: the slid window was never observed in the source
		// (or fell off its end), pick a fresh one to keep generating
		if !table.contains_seed(&seed) {
			seed = random_seed(content, k, rng);
		}
	}

	output.into_iter().collect()
}

/// Picks a uniformly random k-character window of `content`.
///
/// Start indices range over `[0, content.len() - k)`, exactly the set of
/// windows recorded in the table, so the chosen seed always has at least
/// one follower.
fn random_seed<R: Rng>(content: &[char], k: usize, rng: &mut R) -> String {
	let start = rng.random_range(0..content.len() - k);
	content[start..start + k].iter().collect()
}
