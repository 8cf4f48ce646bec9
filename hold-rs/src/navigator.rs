use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Result, bail, ensure};
use log::info;

use crate::comparison::{Comparison, compare_outcomes};
use crate::entities::{LoadingInstance, LoadingStep, StepSequence};
use crate::manifest::CargoManifest;
use crate::strategies::{StrategyId, greedy, naive};

/// Cursor into one of two precomputed sequences.
/// Moving past either end is silently ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepNavigator {
    active: StrategyId,
    index: usize,
    greedy_len: usize,
    naive_len: usize,
}

impl StepNavigator {
    pub fn new(greedy: &StepSequence, naive: &StepSequence) -> Self {
        Self {
            active: StrategyId::Greedy,
            index: 0,
            greedy_len: greedy.len(),
            naive_len: naive.len(),
        }
    }

    pub fn active(&self) -> StrategyId {
        self.active
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of steps in the active sequence
    pub fn len(&self) -> usize {
        match self.active {
            StrategyId::Greedy => self.greedy_len,
            StrategyId::Naive => self.naive_len,
        }
    }

    pub fn is_at_start(&self) -> bool {
        self.index == 0
    }

    /// Whether the final outcome of the active sequence is shown
    pub fn is_at_end(&self) -> bool {
        self.index + 1 >= self.len()
    }

    /// Moves one step forward, returns whether the index changed
    pub fn advance(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Moves one step back, returns whether the index changed
    pub fn retreat(&mut self) -> bool {
        if self.is_at_start() {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn reset_to_start(&mut self) {
        self.index = 0;
    }

    /// Activates the sequence of another strategy, starting over from its initial step
    pub fn switch_strategy(&mut self, strategy: StrategyId) {
        self.active = strategy;
        self.index = 0;
    }
}

/// A navigation command, as typed by a user
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Prev,
    Reset,
    Switch(StrategyId),
    Compare,
    /// Leave the simulation and return to editing the cargo
    Back,
    Quit,
}

impl FromStr for NavCommand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let cmd = match s.trim().to_ascii_lowercase().as_str() {
            "next" | "n" | "" => NavCommand::Next,
            "prev" | "p" => NavCommand::Prev,
            "reset" | "r" => NavCommand::Reset,
            "compare" | "c" => NavCommand::Compare,
            "back" | "b" => NavCommand::Back,
            "quit" | "q" => NavCommand::Quit,
            other => match StrategyId::from_str(other) {
                Ok(strategy) => NavCommand::Switch(strategy),
                Err(_) => bail!(
                    "unknown command '{other}' (next, prev, reset, greedy, naive, compare, back, quit)"
                ),
            },
        };
        Ok(cmd)
    }
}

impl Display for NavCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NavCommand::Next => write!(f, "next"),
            NavCommand::Prev => write!(f, "prev"),
            NavCommand::Reset => write!(f, "reset"),
            NavCommand::Switch(s) => write!(f, "{s}"),
            NavCommand::Compare => write!(f, "compare"),
            NavCommand::Back => write!(f, "back"),
            NavCommand::Quit => write!(f, "quit"),
        }
    }
}

/// A simulation of both strategies on a frozen instance.
/// Dropping the session discards both sequences, a new one is computed from scratch on the next start.
#[derive(Clone, Debug)]
pub struct SimulationSession {
    instance: LoadingInstance,
    greedy: StepSequence,
    naive: StepSequence,
    navigator: StepNavigator,
}

impl SimulationSession {
    /// Starts a simulation from the manifest, provided there is cargo and a positive, finite capacity
    pub fn start(manifest: &CargoManifest) -> Result<Self> {
        ensure!(!manifest.is_empty(), "cannot start a simulation without cargo");
        ensure!(
            manifest.capacity() > 0.0 && manifest.capacity().is_finite(),
            "cannot start a simulation with capacity {}, it must be positive and finite",
            manifest.capacity()
        );
        Ok(Self::from_instance(manifest.freeze()))
    }

    /// Computes both sequences for the instance, without any validation of its capacity or cargo
    pub fn from_instance(instance: LoadingInstance) -> Self {
        let greedy = greedy::compute_sequence(&instance);
        let naive = naive::compute_sequence(&instance);
        let navigator = StepNavigator::new(&greedy, &naive);
        info!(
            "[SIM] started with {} cargo items ({} tons, {} profit) and capacity {} ({} greedy steps, {} naive steps)",
            instance.items().len(),
            instance.total_weight(),
            instance.total_profit(),
            instance.capacity(),
            greedy.len(),
            naive.len()
        );
        Self {
            instance,
            greedy,
            naive,
            navigator,
        }
    }

    pub fn instance(&self) -> &LoadingInstance {
        &self.instance
    }

    pub fn sequence(&self, strategy: StrategyId) -> &StepSequence {
        match strategy {
            StrategyId::Greedy => &self.greedy,
            StrategyId::Naive => &self.naive,
        }
    }

    pub fn active_sequence(&self) -> &StepSequence {
        self.sequence(self.navigator.active())
    }

    pub fn navigator(&self) -> &StepNavigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut StepNavigator {
        &mut self.navigator
    }

    pub fn current_step(&self) -> &LoadingStep {
        &self.active_sequence()[self.navigator.index()]
    }

    /// Applies a command, returns `false` once the user asks to leave the simulation (`back` or `quit`)
    pub fn apply(&mut self, command: NavCommand) -> bool {
        match command {
            NavCommand::Next => {
                self.navigator.advance();
            }
            NavCommand::Prev => {
                self.navigator.retreat();
            }
            NavCommand::Reset => self.navigator.reset_to_start(),
            NavCommand::Switch(s) => self.navigator.switch_strategy(s),
            NavCommand::Compare => {}
            NavCommand::Back | NavCommand::Quit => return false,
        }
        true
    }

    /// Compares the final outcomes, regardless of which sequence is navigated
    pub fn comparison(&self) -> Comparison {
        compare_outcomes(&self.greedy, &self.naive)
    }
}
