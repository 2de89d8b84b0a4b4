//! Order-k character Markov text generation library.
//!
//! This crate provides the core of a "random writer":
//! - A frequency model mapping each observed k-character window (seed)
//!   to the characters that followed it, with occurrence counts
//! - A stochastic generator producing text of an exact requested length
//!   by repeated weighted sampling and seed sliding
//! - I/O helpers for the surrounding layer (file loading, listing)
//!
//! The model is read-only once built: mutation stays internal to the
//! build pass, and callers only get immutable views of it.

/// Frequency model and generation logic.
///
/// This module exposes the frequency table, read-only follower views,
/// and the generation entry point.
pub mod model;

/// I/O utilities (file loading and writing, directory listing).
///
/// Used by the surrounding layer (CLI, server), never by the model itself.
pub mod io;
