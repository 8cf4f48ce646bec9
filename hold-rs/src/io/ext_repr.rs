use serde::{Deserialize, Serialize};

use crate::util::Color;

/// External representation of a [`CargoManifest`](crate::manifest::CargoManifest).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtManifest {
    /// Name of the scenario
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    /// Capacity of the ship in tons
    pub capacity: f64,
    /// Cargo, in the order in which it is offered for loading
    #[serde(default)]
    pub cargo: Vec<ExtCargoItem>,
}

/// External representation of a [`CargoItem`](crate::entities::CargoItem).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCargoItem {
    pub name: String,
    pub weight: f64,
    pub profit: f64,
    /// Display colour, assigned from the palette if not specified
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<Color>,
}

/// External representation of a [`LoadedPortion`](crate::entities::LoadedPortion).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLoadedPortion {
    pub name: String,
    pub weight: f64,
    pub profit: f64,
    /// Tons loaded
    pub amount: f64,
    pub fractional: bool,
    /// E.g. `5.0/30`, only for fractional portions
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fraction: Option<String>,
    pub profit_contribution: f64,
    pub color: Color,
}

/// External representation of a [`LoadingStep`](crate::entities::LoadingStep).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLoadingStep {
    pub title: String,
    pub description: String,
    pub loaded: Vec<ExtLoadedPortion>,
    pub remaining: f64,
    pub total_profit: f64,
}

/// External representation of a [`Comparison`](crate::comparison::Comparison).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtComparison {
    pub greedy_profit: f64,
    pub naive_profit: f64,
    pub absolute_improvement: f64,
    /// `null` when the naive strategy made no profit
    pub percentage_improvement: Option<f64>,
    pub per_step: Vec<ExtSeriesPoint>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtSeriesPoint {
    pub step: usize,
    pub greedy: f64,
    pub naive: f64,
}

/// External representation of a complete [`SimulationSession`](crate::navigator::SimulationSession).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSimulation {
    pub manifest: ExtManifest,
    pub greedy: Vec<ExtLoadingStep>,
    pub naive: Vec<ExtLoadingStep>,
    pub comparison: ExtComparison,
}
