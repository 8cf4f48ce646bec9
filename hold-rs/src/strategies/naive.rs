use log::{debug, warn};

use crate::entities::{LoadingInstance, Narration, StepSequence};
use crate::strategies::{LoadingFold, LoadingStrategy, StrategyId};

/// Loads whole cargo in the order it was supplied and gives up at the first cargo that does not fit.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaiveStrategy;

impl LoadingStrategy for NaiveStrategy {
    fn id(&self) -> StrategyId {
        StrategyId::Naive
    }

    fn compute(&self, instance: &LoadingInstance) -> StepSequence {
        compute_sequence(instance)
    }
}

pub fn compute_sequence(instance: &LoadingInstance) -> StepSequence {
    let capacity = instance.capacity();
    if capacity <= 0.0 {
        warn!("[NAIVE] non-positive capacity ({capacity}), nothing will be loaded");
    }

    let mut fold = LoadingFold::start(
        StrategyId::Naive,
        instance,
        Narration::new(
            "Initial Setup",
            format!("Ship capacity: {capacity} tons | No calculation, just loading!"),
        ),
    );

    for item in instance.items() {
        if fold.remaining() <= 0.0 {
            break;
        }
        if !fold.fits_whole(item) {
            debug!(
                "[NAIVE] {} ({} tons) does not fit in the remaining {:.3} tons, stopping",
                item.name,
                item.weight,
                fold.remaining()
            );
            break;
        }
        let narration = Narration::new(
            format!("Step {}: Load {}", fold.next_step_number(), item.name),
            format!("Loader picks {} ({} tons)", item.name, item.weight),
        );
        fold.take_whole(item, narration);
    }

    let sequence = fold.finish();
    debug_assert!(crate::util::assertions::sequence_is_consistent(&sequence, capacity));
    debug_assert!(crate::util::assertions::naive_order_respected(&sequence, instance));
    sequence
}
