//! Top-level module for the Markov text generation system.
//!
//! This module provides an order-k character Markov generator, including:
//! - The empirical next-character model (`FrequencyTable`)
//! - Internal per-seed follower counts (`Followers`)
//! - The generation entry point (`generate_text`)

/// Frequency model over k-character windows.
///
/// Handles the single-pass scan of the source content and exposes
/// read-only queries used by generation and by the surrounding layer.
pub mod frequency_table;

/// Text generation from a content buffer and a frequency table.
///
/// Covers both the uniform regime (k = 0) and the Markov regime (k > 0)
/// with dead-end reseeding.
pub mod generator;

/// Followers of a single seed.
///
/// Tracks next-character counts and supports weighted random sampling.
/// Mutation is crate-private; callers get a read-only view through
/// `FrequencyTable` lookups.
pub mod followers;
