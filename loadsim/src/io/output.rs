use hold_rs::io::ext_repr::ExtSimulation;
use serde::{Deserialize, Serialize};

use crate::config::LoadSimConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct SimOutput {
    #[serde(flatten)]
    pub simulation: ExtSimulation,
    pub config: LoadSimConfig,
}
