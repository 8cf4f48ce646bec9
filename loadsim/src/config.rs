use serde::{Deserialize, Serialize};

use crate::io::svg_util::ChartOptions;

/// Configuration of the cargo loading simulator
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct LoadSimConfig {
    /// Number of decimals used when displaying tons and profits
    pub display_precision: usize,
    /// Width (in characters) of the progress bar showing how full the hold is
    pub progress_bar_width: usize,
    /// Write the comparison charts as SVG next to the JSON output
    pub write_svg: bool,
    /// Layout and colours of the comparison charts
    pub chart: ChartOptions,
}

impl Default for LoadSimConfig {
    fn default() -> Self {
        Self {
            display_precision: 1,
            progress_bar_width: 40,
            write_svg: true,
            chart: ChartOptions::default(),
        }
    }
}
