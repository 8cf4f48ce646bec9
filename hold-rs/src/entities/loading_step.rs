use crate::entities::LoadedPortion;

/// Snapshot of the ship after zero or more loading decisions.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadingStep {
    /// Human-readable account of the decision, not used by any computation
    pub narration: Narration,
    /// Portions aboard, in the order they were accepted
    pub loaded: Vec<LoadedPortion>,
    /// Capacity left after this step, in tons
    pub remaining: f64,
    /// Profit of all portions aboard
    pub total_profit: f64,
}

/// Title and description of a [`LoadingStep`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Narration {
    pub title: String,
    pub description: String,
}

impl Narration {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl LoadingStep {
    /// Tons aboard
    pub fn loaded_weight(&self) -> f64 {
        self.loaded.iter().map(|p| p.amount).sum()
    }

    /// Share of `capacity` which is occupied, `None` if the capacity is not positive
    pub fn fill_fraction(&self, capacity: f64) -> Option<f64> {
        (capacity > 0.0).then(|| (capacity - self.remaining) / capacity)
    }

    pub fn title(&self) -> &str {
        &self.narration.title
    }

    pub fn description(&self) -> &str {
        &self.narration.description
    }
}
