use std::cmp::Reverse;
use std::sync::Arc;

use itertools::Itertools;
use log::{trace, warn};
use ordered_float::OrderedFloat;

use crate::entities::{CargoItem, LoadingInstance, Narration, StepSequence};
use crate::strategies::{LoadingFold, LoadingStrategy, StrategyId};

/// Loads cargo in order of decreasing profit-to-weight ratio, splitting the first cargo that does not fit.
/// Optimal for the fractional knapsack: exchanging any loaded ton for a ton of lower ratio can never increase the profit.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyStrategy;

impl LoadingStrategy for GreedyStrategy {
    fn id(&self) -> StrategyId {
        StrategyId::Greedy
    }

    fn compute(&self, instance: &LoadingInstance) -> StepSequence {
        compute_sequence(instance)
    }
}

/// Cargo sorted by decreasing ratio. The sort is stable: cargo with equal ratios keeps its input order.
pub fn ratio_order(instance: &LoadingInstance) -> Vec<&Arc<CargoItem>> {
    instance
        .items()
        .iter()
        .sorted_by_key(|item| Reverse(OrderedFloat(item.ratio())))
        .collect()
}

pub fn compute_sequence(instance: &LoadingInstance) -> StepSequence {
    let capacity = instance.capacity();
    if capacity <= 0.0 {
        warn!("[GREEDY] non-positive capacity ({capacity}), nothing will be loaded");
    }

    let mut fold = LoadingFold::start(
        StrategyId::Greedy,
        instance,
        Narration::new(
            "Initial Setup",
            format!("Ship capacity: {capacity} tons | Calculate profit-to-weight ratios"),
        ),
    );

    let order = ratio_order(instance);
    trace!(
        "[GREEDY] ratio order: [{}]",
        order
            .iter()
            .map(|i| format!("{} ({:.2})", i.name, i.ratio()))
            .join(", ")
    );

    for item in order {
        let step = fold.next_step_number();
        if fold.fits_whole(item) {
            let narration = Narration::new(
                format!("Step {step}: Add {}", item.name),
                format!("Ratio: {:.1} | Adding {} tons", item.ratio(), item.weight),
            );
            fold.take_whole(item, narration);
        } else if fold.remaining() > 0.0 {
            let remaining = fold.remaining();
            let narration = Narration::new(
                format!("Step {step}: Partial {}", item.name),
                format!(
                    "Only {remaining:.1} tons left! Take {:.1}% of {}",
                    remaining / item.weight * 100.0,
                    item.name
                ),
            );
            fold.take_rest(item, narration);
            break;
        } else {
            break;
        }
    }

    let sequence = fold.finish();
    debug_assert!(crate::util::assertions::sequence_is_consistent(&sequence, capacity));
    debug_assert!(crate::util::assertions::greedy_order_respected(&sequence, instance));
    sequence
}
