use std::collections::BTreeMap;

use rand::Rng;

/// Followers of a single seed in the frequency model.
///
/// A `Followers` value stores, for one fixed k-character window, every
/// character observed immediately after that window in the source content,
/// together with its number of occurrences.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate next-character occurrences during the model build
/// - Draw a next character using weighted random sampling
///
/// ## Invariants
/// - Each occurrence count is strictly positive
/// - Non-empty for every value reachable through a built table
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Followers {
	/// Observed next characters, keyed in code-point order.
	/// The value represents how many times this follower was observed.
	/// Example: { 'e' => 42, 'a' => 3 }
	counts: BTreeMap<char, usize>,
}

impl Followers {
	/// Records an occurrence of `next` after the owning seed.
	///
	/// - If the follower already exists, its occurrence count is increased.
	/// - Otherwise, a new follower is created with an initial count of 1.
	pub(crate) fn record(&mut self, next: char) {
		*self.counts.entry(next).or_insert(0) += 1;
	}

	/// Draws a next character using weighted random sampling.
	///
	/// The probability of selecting a character is exactly its occurrence
	/// count divided by the total count for this seed.
	///
	/// The walk visits followers in code-point order, so under a seeded
	/// `rng` a given draw value always lands on the same character and
	/// generation is reproducible.
	///
	/// Returns `None` if there are no followers.
	pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<char> {
		if self.counts.is_empty() {
			return None;
		}

		// Total number of observations for this seed
		let total: usize = self.counts.values().sum();

		// Pick a bucket in [0, total) and walk the cumulative sum
		let mut r = rng.random_range(0..total);

		let mut fallback = None;
		for (&next, &occurrence) in &self.counts {
			if r < occurrence {
				return Some(next);
			}
			r -= occurrence;
			fallback = Some(next);
		}

		// Unreachable while counts are consistent, kept for safety
		fallback
	}

	/// Returns the occurrence count recorded for `next` (0 if never seen).
	pub fn count(&self, next: char) -> usize {
		self.counts.get(&next).copied().unwrap_or(0)
	}

	/// Returns the number of distinct followers.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	/// Returns `true` when no follower has been recorded yet.
	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Returns the total number of observations across all followers.
	pub fn total(&self) -> usize {
		self.counts.values().sum()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn record_accumulates_overlapping_observations() {
		let mut followers = Followers::default();
		followers.record('a');
		followers.record('b');
		followers.record('a');

		assert_eq!(followers.count('a'), 2);
		assert_eq!(followers.count('b'), 1);
		assert_eq!(followers.count('c'), 0);
		assert_eq!(followers.len(), 2);
		assert_eq!(followers.total(), 3);
	}

	#[test]
	fn sample_of_empty_followers_is_none() {
		let followers = Followers::default();
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(followers.sample(&mut rng), None);
	}

	#[test]
	fn sample_of_a_single_follower_is_that_follower() {
		let mut followers = Followers::default();
		followers.record('x');

		let mut rng = StdRng::seed_from_u64(2);
		for _ in 0..100 {
			assert_eq!(followers.sample(&mut rng), Some('x'));
		}
	}

	#[test]
	fn sample_respects_occurrence_weights() {
		let mut followers = Followers::default();
		followers.record('a');
		for _ in 0..3 {
			followers.record('b');
		}

		let mut rng = StdRng::seed_from_u64(3);
		let draws = 8_000;
		let b_hits = (0..draws)
			.filter(|_| followers.sample(&mut rng) == Some('b'))
			.count();

		// Expected 3/4 of the draws, with a generous band
		assert!((5_600..=6_400).contains(&b_hits), "b drawn {b_hits} times");
	}
}
