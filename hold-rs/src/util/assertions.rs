//! Various checks to verify the correctness of generated sequences.
//! Used in `debug_assert!()` blocks and in tests.

use std::sync::Arc;

use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;

use crate::entities::{LoadingInstance, StepSequence};
use crate::util::FPA;

/// Relative tolerance for sums which were accumulated in a different order
const REL_TOLERANCE: f64 = 1e-9;

/// Whether `a` and `b` are equal up to rounding errors on values of magnitude `scale`
pub fn approx_eq_scaled(a: f64, b: f64, scale: f64) -> bool {
    approx_eq!(
        f64,
        a,
        b,
        epsilon = REL_TOLERANCE * scale.abs().max(1.0),
        ulps = 4
    )
}

/// Checks the invariants every sequence must satisfy, regardless of the strategy
pub fn sequence_is_consistent(seq: &StepSequence, capacity: f64) -> bool {
    let weight_scale = capacity.abs().max(seq.last().loaded_weight());
    let profit_scale = seq.last().total_profit;
    let first = seq.first();
    if !first.loaded.is_empty() || first.remaining != capacity || first.total_profit != 0.0 {
        error!("initial step is not empty: {first:?}");
        return false;
    }

    for (i, step) in seq.iter().enumerate() {
        if capacity >= 0.0 && step.remaining < 0.0 {
            error!("step {i} has negative remaining capacity: {}", step.remaining);
            return false;
        }
        if !approx_eq_scaled(step.remaining, capacity - step.loaded_weight(), weight_scale) {
            error!(
                "step {i}: remaining {} does not match capacity {capacity} minus loaded {}",
                step.remaining,
                step.loaded_weight()
            );
            return false;
        }
        let portion_profit = step.loaded.iter().map(|p| p.profit()).sum::<f64>();
        if !approx_eq_scaled(step.total_profit, portion_profit, profit_scale) {
            error!(
                "step {i}: total profit {} does not match profit of portions {portion_profit}",
                step.total_profit
            );
            return false;
        }
    }

    seq.iter().tuple_windows().enumerate().all(|(i, (prev, next))| {
        let append_only = next.loaded.len() == prev.loaded.len() + 1
            && next.loaded[..prev.loaded.len()] == prev.loaded[..];
        let capacity_ok = next.remaining <= prev.remaining
            || approx_eq_scaled(next.remaining, prev.remaining, weight_scale);
        let profit_ok = next.total_profit >= prev.total_profit
            || approx_eq_scaled(next.total_profit, prev.total_profit, profit_scale);
        if !(append_only && capacity_ok && profit_ok) {
            error!(
                "transition {i} -> {} breaks monotonicity (append: {append_only}, capacity: {capacity_ok}, profit: {profit_ok})",
                i + 1
            );
        }
        append_only && capacity_ok && profit_ok
    })
}

/// Checks that the portions of the final step were loaded in order of non-increasing ratio,
/// that only the last one is fractional, and that equal ratios keep their input order
pub fn greedy_order_respected(seq: &StepSequence, instance: &LoadingInstance) -> bool {
    let loaded = &seq.last().loaded;
    let ratios_ok = loaded
        .iter()
        .tuple_windows()
        .all(|(a, b)| FPA(a.item.ratio()) >= FPA(b.item.ratio()));

    let only_last_fractional = loaded
        .iter()
        .rev()
        .skip(1)
        .all(|p| !p.is_fractional());

    let input_pos = |p: &crate::entities::LoadedPortion| {
        instance
            .items()
            .iter()
            .position(|i| Arc::ptr_eq(i, &p.item))
    };
    let ties_stable = loaded.iter().tuple_windows().all(|(a, b)| {
        a.item.ratio() != b.item.ratio() || input_pos(a) < input_pos(b)
    });

    ratios_ok && only_last_fractional && ties_stable
}

/// Checks that the final step holds a prefix of the input order, loaded whole
pub fn naive_order_respected(seq: &StepSequence, instance: &LoadingInstance) -> bool {
    let loaded = &seq.last().loaded;
    loaded.len() <= instance.items().len()
        && loaded
            .iter()
            .zip(instance.items())
            .all(|(p, i)| Arc::ptr_eq(&p.item, i) && !p.is_fractional())
}
