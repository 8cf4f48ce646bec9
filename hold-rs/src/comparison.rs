use itertools::Itertools;

use crate::entities::StepSequence;
use crate::strategies::StrategyId;

/// Final outcome of both strategies side by side
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub greedy_profit: f64,
    pub naive_profit: f64,
    /// `greedy_profit - naive_profit`
    pub absolute_improvement: f64,
    /// Improvement relative to the naive profit, in percent.
    /// `None` when the naive strategy made no profit, as the ratio is undefined.
    pub percentage_improvement: Option<f64>,
    /// Both cumulative profits on a shared step axis
    pub per_step: Vec<SeriesPoint>,
}

/// Cumulative profit of both strategies after the same number of steps
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesPoint {
    pub step: usize,
    pub greedy: f64,
    pub naive: f64,
}

/// Compares the final snapshots of both sequences.
/// The shorter sequence keeps its final profit for every step beyond its end.
pub fn compare_outcomes(greedy: &StepSequence, naive: &StepSequence) -> Comparison {
    debug_assert_eq!(greedy.strategy(), StrategyId::Greedy);
    debug_assert_eq!(naive.strategy(), StrategyId::Naive);

    let greedy_profit = greedy.final_profit();
    let naive_profit = naive.final_profit();
    let absolute_improvement = greedy_profit - naive_profit;
    let percentage_improvement =
        (naive_profit != 0.0).then(|| absolute_improvement / naive_profit * 100.0);

    let per_step = (0..greedy.len().max(naive.len()))
        .map(|step| SeriesPoint {
            step,
            greedy: greedy.profit_at(step),
            naive: naive.profit_at(step),
        })
        .collect_vec();

    Comparison {
        greedy_profit,
        naive_profit,
        absolute_improvement,
        percentage_improvement,
        per_step,
    }
}

impl Comparison {
    /// Final profit per strategy, as shown in a bar chart
    pub fn final_profits(&self) -> [(StrategyId, f64); 2] {
        [
            (StrategyId::Naive, self.naive_profit),
            (StrategyId::Greedy, self.greedy_profit),
        ]
    }

    /// Percentage improvement formatted with `precision` decimals, or `n/a` when undefined
    pub fn percentage_label(&self, precision: usize) -> String {
        match self.percentage_improvement {
            Some(pct) => format!("{pct:.precision$}%"),
            None => "n/a".to_string(),
        }
    }

    /// Highest cumulative profit in the per-step series
    pub fn max_profit(&self) -> f64 {
        self.greedy_profit.max(self.naive_profit)
    }
}
