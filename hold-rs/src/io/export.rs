use itertools::Itertools;

use crate::comparison::Comparison;
use crate::entities::{LoadedPortion, LoadingInstance, LoadingStep, StepSequence};
use crate::io::ext_repr::{
    ExtCargoItem, ExtComparison, ExtLoadedPortion, ExtLoadingStep, ExtManifest, ExtSeriesPoint,
    ExtSimulation,
};
use crate::navigator::SimulationSession;
use crate::strategies::StrategyId;

/// Exports the instance of a simulation back into a manifest
pub fn export_manifest(instance: &LoadingInstance, name: Option<String>) -> ExtManifest {
    ExtManifest {
        name,
        capacity: instance.capacity(),
        cargo: instance
            .items()
            .iter()
            .map(|item| ExtCargoItem {
                name: item.name.clone(),
                weight: item.weight,
                profit: item.profit,
                color: Some(item.color()),
            })
            .collect(),
    }
}

pub fn export_sequence(sequence: &StepSequence) -> Vec<ExtLoadingStep> {
    sequence.into_iter().map(export_step).collect()
}

pub fn export_comparison(comparison: &Comparison) -> ExtComparison {
    ExtComparison {
        greedy_profit: comparison.greedy_profit,
        naive_profit: comparison.naive_profit,
        absolute_improvement: comparison.absolute_improvement,
        percentage_improvement: comparison.percentage_improvement,
        per_step: comparison
            .per_step
            .iter()
            .map(|p| ExtSeriesPoint {
                step: p.step,
                greedy: p.greedy,
                naive: p.naive,
            })
            .collect(),
    }
}

/// Exports both sequences and their comparison
pub fn export_session(session: &SimulationSession, name: Option<String>) -> ExtSimulation {
    ExtSimulation {
        manifest: export_manifest(session.instance(), name),
        greedy: export_sequence(session.sequence(StrategyId::Greedy)),
        naive: export_sequence(session.sequence(StrategyId::Naive)),
        comparison: export_comparison(&session.comparison()),
    }
}

fn export_step(step: &LoadingStep) -> ExtLoadingStep {
    ExtLoadingStep {
        title: step.narration.title.clone(),
        description: step.narration.description.clone(),
        loaded: step.loaded.iter().map(export_portion).collect_vec(),
        remaining: step.remaining,
        total_profit: step.total_profit,
    }
}

fn export_portion(portion: &LoadedPortion) -> ExtLoadedPortion {
    ExtLoadedPortion {
        name: portion.item.name.clone(),
        weight: portion.item.weight,
        profit: portion.item.profit,
        amount: portion.amount,
        fractional: portion.is_fractional(),
        fraction: portion.fraction_label(),
        profit_contribution: portion.profit(),
        color: portion.item.color(),
    }
}
