//! `hold-rs` replays how a ship's hold gets filled under two loading strategies:
//! a greedy profit-to-weight ratio strategy (optimal for the fractional knapsack) and a naive
//! first-come strategy that quits at the first cargo that does not fit.
//!
//! Both strategies turn the same frozen [`LoadingInstance`](entities::LoadingInstance) into a
//! [`StepSequence`](entities::StepSequence) of immutable snapshots, which can be navigated step
//! by step and compared afterwards.

/// Entities to model cargo, loaded portions and loading steps
pub mod entities;

/// The loading strategies which generate step sequences
pub mod strategies;

/// Aggregation of the final outcomes of both strategies
pub mod comparison;

/// Stepping through precomputed sequences
pub mod navigator;

/// Editable cargo list and capacity, prior to starting a simulation
pub mod manifest;

/// Importing manifests into and exporting simulations out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
