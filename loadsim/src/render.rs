//! Plain-text rendering of manifests, steps and comparisons.

use std::fmt::Write;

use hold_rs::comparison::Comparison;
use hold_rs::entities::LoadingStep;
use hold_rs::manifest::CargoManifest;
use hold_rs::navigator::SimulationSession;
use hold_rs::strategies::StrategyId;
use itertools::Itertools;
use thousands::Separable;

use crate::config::LoadSimConfig;
use crate::io::svg_util::strategy_label;

/// Table of the cargo, by position, with its profit-to-weight ratio
pub fn cargo_table(manifest: &CargoManifest) -> String {
    let mut out = format!(
        "{:>3}  {:<20} {:>10} {:>10} {:>10}  {}\n",
        "#", "cargo", "weight", "profit", "ratio", "color"
    );
    for (i, (item, (name, ratio))) in manifest.items().iter().zip(manifest.ratios()).enumerate() {
        let _ = writeln!(
            out,
            "{i:>3}  {name:<20} {:>10} {:>10} {ratio:>10.2}  {}",
            item.weight,
            item.profit,
            item.color()
        );
    }
    let _ = write!(
        out,
        "{} cargo items, ship capacity: {} tons",
        manifest.len(),
        manifest.capacity()
    );
    out
}

/// `[####------]`, `fill` is clamped to `[0, 1]`
pub fn progress_bar(fill: f64, width: usize) -> String {
    let filled = ((fill.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn strategy_banner(strategy: StrategyId) -> String {
    format!("== {} : {} ==", strategy_label(strategy), strategy.summary())
}

/// The current step of the session, as a block of text
pub fn session_view(session: &SimulationSession, config: &LoadSimConfig) -> String {
    let nav = session.navigator();
    format!(
        "{}\n[{}/{}] {}",
        strategy_banner(nav.active()),
        nav.index(),
        nav.len() - 1,
        step_view(session.current_step(), session.instance().capacity(), config)
    )
}

pub fn step_view(step: &LoadingStep, capacity: f64, config: &LoadSimConfig) -> String {
    let p = config.display_precision;
    let loaded_weight = capacity - step.remaining;

    let mut out = format!("{}\n  {}\n", step.title(), step.description());
    let _ = writeln!(
        out,
        "  {} {loaded_weight:.p$}/{capacity} tons loaded",
        progress_bar(
            step.fill_fraction(capacity).unwrap_or(0.0),
            config.progress_bar_width
        ),
    );

    if step.loaded.is_empty() {
        let _ = writeln!(out, "  (hold is empty)");
    }
    for portion in &step.loaded {
        let fraction = portion
            .fraction_label()
            .map(|f| format!(" (fraction: {f})"))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "  {} {:<20} {:>8.p$} tons  +{:.p$}{fraction}",
            portion.item.color(),
            portion.item.name,
            portion.amount,
            portion.profit(),
        );
    }

    let _ = write!(
        out,
        "  profit: {:.p$} | loaded: {loaded_weight:.p$} tons | remaining: {:.p$} tons",
        step.total_profit, step.remaining
    );
    out
}

pub fn comparison_view(cmp: &Comparison, config: &LoadSimConfig) -> String {
    let p = config.display_precision;
    let rows = cmp
        .final_profits()
        .into_iter()
        .map(|(strategy, profit)| {
            format!(
                "  {:<20} {:>12}",
                strategy_label(strategy),
                format!("{profit:.p$}").separate_with_commas()
            )
        })
        .join("\n");

    format!(
        "Final comparison\n{rows}\n  improvement: +{} ({})",
        format!("{:.p$}", cmp.absolute_improvement).separate_with_commas(),
        cmp.percentage_label(p)
    )
}
