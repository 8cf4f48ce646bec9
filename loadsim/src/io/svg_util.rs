use hold_rs::strategies::StrategyId;
use hold_rs::util::Color;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
#[serde(default)]
pub struct ChartOptions {
    /// Width of the drawing, both charts share it
    pub width: f32,
    /// Height of each of the two charts
    pub height: f32,
    /// The theme to use for the charts
    pub theme: ThemePreset,
    /// Draw a dot on every step of the line chart
    pub step_dots: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 300.0,
            theme: ThemePreset::default(),
            step_dots: true,
        }
    }
}

/// Named themes, selectable from the config as `"harbour"` or `"gray"`
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreset {
    #[default]
    Harbour,
    Gray,
}

impl ThemePreset {
    pub fn theme(&self) -> ChartTheme {
        match self {
            ThemePreset::Harbour => ChartTheme::HARBOUR,
            ThemePreset::Gray => ChartTheme::GRAY,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Copy)]
pub struct ChartTheme {
    pub stroke_width: f32,
    pub background: Color,
    pub grid: Color,
    pub text: Color,
    pub bar_fill: Color,
    pub greedy_line: Color,
    pub naive_line: Color,
}

impl ChartTheme {
    pub const HARBOUR: ChartTheme = ChartTheme {
        stroke_width: 3.0,
        background: Color(0xFF, 0xFF, 0xFF), // WHITE
        grid: Color(0xD1, 0xD5, 0xDB),       // LIGHT GRAY
        text: Color(0x1F, 0x29, 0x37),       // SLATE
        bar_fill: Color(0x3B, 0x82, 0xF6),   // BLUE
        greedy_line: Color(0x10, 0xB9, 0x81), // EMERALD
        naive_line: Color(0xF9, 0x73, 0x16), // ORANGE
    };

    pub const GRAY: ChartTheme = ChartTheme {
        stroke_width: 2.5,
        background: Color(0xFF, 0xFF, 0xFF), // WHITE
        grid: Color(0xD3, 0xD3, 0xD3),       // LIGHT GRAY
        text: Color(0x2D, 0x2D, 0x2D),       // DARK GRAY
        bar_fill: Color(0x7A, 0x7A, 0x7A),   // GRAY
        greedy_line: Color(0x2D, 0x2D, 0x2D), // DARK GRAY
        naive_line: Color(0x9A, 0x9A, 0x9A), // MID GRAY
    };

    pub fn line_color(&self, strategy: StrategyId) -> Color {
        match strategy {
            StrategyId::Greedy => self.greedy_line,
            StrategyId::Naive => self.naive_line,
        }
    }
}

/// Label of a strategy in a legend or on an axis
pub fn strategy_label(strategy: StrategyId) -> &'static str {
    match strategy {
        StrategyId::Greedy => "Greedy (ratio)",
        StrategyId::Naive => "Naive (first come)",
    }
}

/// Round upper bound for an axis which has to fit `max`, never zero
pub fn nice_axis_max(max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .map(|f| f * magnitude)
        .find(|m| *m >= max)
        .unwrap_or(10.0 * magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, 1.0; "zero")]
    #[test_case(255.0, 500.0; "sample greedy profit")]
    #[test_case(200.0, 200.0; "already round")]
    #[test_case(7.3, 10.0; "single digit")]
    #[test_case(0.42, 0.5; "below one")]
    fn axis_max_is_round(max: f64, expected: f64) {
        assert!(float_cmp::approx_eq!(f64, nice_axis_max(max), expected, epsilon = 1e-9));
    }
}
