use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

use crate::entities::{LoadingInstance, StepSequence};

mod fold;

/// Sorts by profit-to-weight ratio and splits the last cargo that does not fit whole
pub mod greedy;

/// Loads in input order and quits at the first cargo that does not fit
pub mod naive;

#[doc(inline)]
pub use fold::LoadingFold;

/// Identifies one of the loading strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyId {
    Greedy,
    Naive,
}

impl StrategyId {
    pub const ALL: [StrategyId; 2] = [StrategyId::Greedy, StrategyId::Naive];

    /// Short description of how the strategy picks cargo
    pub fn summary(&self) -> &'static str {
        match self {
            StrategyId::Greedy => "sorts by profit/weight ratio, picks highest first",
            StrategyId::Naive => "loads cargo as it comes, without calculation or planning",
        }
    }

    pub fn strategy(&self) -> &'static dyn LoadingStrategy {
        match self {
            StrategyId::Greedy => &greedy::GreedyStrategy,
            StrategyId::Naive => &naive::NaiveStrategy,
        }
    }
}

impl Display for StrategyId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyId::Greedy => write!(f, "greedy"),
            StrategyId::Naive => write!(f, "naive"),
        }
    }
}

impl FromStr for StrategyId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" | "g" => Ok(StrategyId::Greedy),
            "naive" | "random" | "v" => Ok(StrategyId::Naive),
            other => bail!("unknown strategy: '{other}'"),
        }
    }
}

/// A policy which turns a [`LoadingInstance`] into a replayable [`StepSequence`].
/// Implementations are pure: the same instance always yields the same sequence.
pub trait LoadingStrategy: Sync {
    fn id(&self) -> StrategyId;

    fn compute(&self, instance: &LoadingInstance) -> StepSequence;
}

/// Computes the sequence of the strategy identified by `id`
pub fn compute_sequence(id: StrategyId, instance: &LoadingInstance) -> StepSequence {
    id.strategy().compute(instance)
}
