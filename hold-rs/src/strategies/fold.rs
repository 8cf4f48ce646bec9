use std::sync::Arc;

use log::debug;

use crate::entities::{CargoItem, LoadedPortion, LoadingInstance, LoadingStep, Narration, StepSequence};
use crate::strategies::StrategyId;

/// Running state of a single strategy pass.
/// Every accepted decision appends an immutable snapshot to the sequence under construction.
pub struct LoadingFold {
    remaining: f64,
    total_profit: f64,
    loaded: Vec<LoadedPortion>,
    sequence: StepSequence,
}

impl LoadingFold {
    /// Starts a pass with an empty hold, emitting the initial step
    pub fn start(strategy: StrategyId, instance: &LoadingInstance, narration: Narration) -> Self {
        let capacity = instance.capacity();
        let initial = LoadingStep {
            narration,
            loaded: vec![],
            remaining: capacity,
            total_profit: 0.0,
        };
        Self {
            remaining: capacity,
            total_profit: 0.0,
            loaded: vec![],
            sequence: StepSequence::new(strategy, initial),
        }
    }

    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    /// Number of the next decision, starting from 1
    pub fn next_step_number(&self) -> usize {
        self.sequence.len()
    }

    pub fn fits_whole(&self, item: &CargoItem) -> bool {
        self.remaining >= item.weight
    }

    /// Loads the entire item
    pub fn take_whole(&mut self, item: &Arc<CargoItem>, narration: Narration) {
        debug_assert!(self.fits_whole(item));
        self.remaining -= item.weight;
        self.total_profit += item.profit;
        self.loaded.push(LoadedPortion::whole(item.clone()));
        self.emit(narration);
    }

    /// Loads whatever capacity is left of the item, exhausting the hold
    pub fn take_rest(&mut self, item: &Arc<CargoItem>, narration: Narration) {
        debug_assert!(self.remaining > 0.0 && self.remaining < item.weight);
        let portion = LoadedPortion::partial(item.clone(), self.remaining);
        self.total_profit += portion.profit();
        self.remaining = 0.0;
        self.loaded.push(portion);
        self.emit(narration);
    }

    pub fn finish(self) -> StepSequence {
        self.sequence
    }

    fn emit(&mut self, narration: Narration) {
        debug!(
            "[{}] {} (remaining: {:.3}, profit: {:.3})",
            self.sequence.strategy().to_string().to_uppercase(),
            narration.title,
            self.remaining,
            self.total_profit
        );
        self.sequence.push(LoadingStep {
            narration,
            loaded: self.loaded.clone(),
            remaining: self.remaining,
            total_profit: self.total_profit,
        });
    }
}
