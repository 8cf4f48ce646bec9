use std::ops::Index;

use crate::entities::LoadingStep;
use crate::strategies::StrategyId;

/// Ordered, non-empty replay of a loading strategy.
/// The first step is always the synthetic initial step with an empty hold.
#[derive(Clone, Debug, PartialEq)]
pub struct StepSequence {
    strategy: StrategyId,
    steps: Vec<LoadingStep>,
}

impl StepSequence {
    pub(crate) fn new(strategy: StrategyId, initial: LoadingStep) -> Self {
        Self {
            strategy,
            steps: vec![initial],
        }
    }

    pub(crate) fn push(&mut self, step: LoadingStep) {
        self.steps.push(step);
    }

    /// The strategy which generated this sequence
    pub fn strategy(&self) -> StrategyId {
        self.strategy
    }

    pub fn first(&self) -> &LoadingStep {
        &self.steps[0]
    }

    /// The final outcome of the strategy
    pub fn last(&self) -> &LoadingStep {
        &self.steps[self.steps.len() - 1]
    }

    pub fn get(&self, index: usize) -> Option<&LoadingStep> {
        self.steps.get(index)
    }

    /// Number of steps, including the initial one. Never zero.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoadingStep> {
        self.steps.iter()
    }

    pub fn final_profit(&self) -> f64 {
        self.last().total_profit
    }

    /// Cumulative profit at `index`, holding the final value flat beyond the end of the sequence
    pub fn profit_at(&self, index: usize) -> f64 {
        self.get(index).unwrap_or(self.last()).total_profit
    }
}

impl Index<usize> for StepSequence {
    type Output = LoadingStep;

    fn index(&self, index: usize) -> &Self::Output {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a LoadingStep;
    type IntoIter = std::slice::Iter<'a, LoadingStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
