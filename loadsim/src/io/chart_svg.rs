use hold_rs::comparison::{Comparison, SeriesPoint};
use hold_rs::strategies::StrategyId;
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Line, Path, Rectangle, Text, Title};

use crate::io::svg_util::{ChartOptions, ChartTheme, nice_axis_max, strategy_label};

const MARGIN_LEFT: f32 = 70.0;
const MARGIN_RIGHT: f32 = 30.0;
const MARGIN_TOP: f32 = 50.0;
const MARGIN_BOTTOM: f32 = 40.0;
const N_GRID_LINES: usize = 5;
const MAX_STEP_LABELS: usize = 25;

/// Region of a panel in which data is drawn
#[derive(Clone, Copy, Debug)]
struct PlotArea {
    x_min: f32,
    y_min: f32,
    width: f32,
    height: f32,
}

impl PlotArea {
    /// Plot area of the `panel`-th chart, panels are stacked vertically
    fn new(options: &ChartOptions, panel: usize) -> Self {
        Self {
            x_min: MARGIN_LEFT,
            y_min: panel as f32 * options.height + MARGIN_TOP,
            width: (options.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (options.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        }
    }

    fn x_max(&self) -> f32 {
        self.x_min + self.width
    }

    fn y_max(&self) -> f32 {
        self.y_min + self.height
    }

    fn y_of(&self, value: f64, axis_max: f64) -> f32 {
        self.y_max() - (value / axis_max) as f32 * self.height
    }
}

/// Draws the final profits as a bar chart, with the cumulative profit per step as a line chart below it
pub fn comparison_to_svg(cmp: &Comparison, options: ChartOptions, title: &str) -> Document {
    let theme = &options.theme.theme();
    let total_height = 2.0 * options.height;
    let axis_max = nice_axis_max(cmp.max_profit());

    let background = Rectangle::new()
        .set("x", 0.0)
        .set("y", 0.0)
        .set("width", options.width)
        .set("height", total_height)
        .set("fill", theme.background.to_string());

    let header = text(
        format!(
            "{title} | improvement: {:.1} ({})",
            cmp.absolute_improvement,
            cmp.percentage_label(1)
        ),
        MARGIN_LEFT,
        0.4 * MARGIN_TOP,
        theme,
    )
    .set("font-size", 16.0)
    .set("font-weight", "600");

    Document::new()
        .set("viewBox", (0.0_f32, 0.0_f32, options.width, total_height))
        .set("width", options.width)
        .set("height", total_height)
        .add(background)
        .add(header)
        .add(bar_chart(cmp, &options, theme, axis_max))
        .add(line_chart(cmp, &options, theme, axis_max))
}

fn bar_chart(cmp: &Comparison, options: &ChartOptions, theme: &ChartTheme, axis_max: f64) -> Group {
    let area = PlotArea::new(options, 0);
    let mut group = Group::new()
        .set("id", "final_profit")
        .add(grid(&area, axis_max, theme))
        .add(axes(&area, theme));

    let bars = cmp.final_profits();
    let slot_width = area.width / bars.len() as f32;
    for (i, (strategy, profit)) in bars.into_iter().enumerate() {
        let x = area.x_min + slot_width * (i as f32 + 0.25);
        let y = area.y_of(profit, axis_max);
        let bar = Rectangle::new()
            .set("x", x)
            .set("y", y)
            .set("width", 0.5 * slot_width)
            .set("height", area.y_max() - y)
            .set("fill", theme.bar_fill.to_string())
            .set("stroke", theme.line_color(strategy).change_brightness(0.8).to_string())
            .set("stroke-width", theme.stroke_width)
            .add(Title::new(format!("{}: {profit:.1}", strategy_label(strategy))));

        let center = x + 0.25 * slot_width;
        group = group
            .add(bar)
            .add(text(format!("{profit:.1}"), center, y - 6.0, theme).set("text-anchor", "middle"))
            .add(
                text(strategy_label(strategy), center, area.y_max() + 20.0, theme)
                    .set("text-anchor", "middle"),
            );
    }
    group
}

fn line_chart(cmp: &Comparison, options: &ChartOptions, theme: &ChartTheme, axis_max: f64) -> Group {
    let area = PlotArea::new(options, 1);
    let n_steps = cmp.per_step.len();
    let x_of = |step: usize| match n_steps {
        0 | 1 => area.x_min + 0.5 * area.width,
        n => area.x_min + step as f32 / (n - 1) as f32 * area.width,
    };

    let mut group = Group::new()
        .set("id", "profit_per_step")
        .add(grid(&area, axis_max, theme))
        .add(axes(&area, theme));

    if n_steps <= MAX_STEP_LABELS {
        for p in &cmp.per_step {
            group = group.add(
                text(p.step.to_string(), x_of(p.step), area.y_max() + 16.0, theme)
                    .set("text-anchor", "middle"),
            );
        }
    }
    group = group.add(
        text("step", area.x_max(), area.y_max() + 32.0, theme).set("text-anchor", "end"),
    );

    for (i, strategy) in StrategyId::ALL.into_iter().enumerate() {
        let color = theme.line_color(strategy).to_string();
        let value = |p: &SeriesPoint| match strategy {
            StrategyId::Greedy => p.greedy,
            StrategyId::Naive => p.naive,
        };

        let mut data = Data::new();
        for (j, p) in cmp.per_step.iter().enumerate() {
            let point = (x_of(p.step), area.y_of(value(p), axis_max));
            data = match j {
                0 => data.move_to(point),
                _ => data.line_to(point),
            };
        }
        let line = Path::new()
            .set("d", data)
            .set("fill", "none")
            .set("stroke", color.clone())
            .set("stroke-width", theme.stroke_width)
            .set("stroke-linejoin", "round")
            .add(Title::new(strategy_label(strategy).to_string()));
        group = group.add(line);

        if options.step_dots {
            for p in &cmp.per_step {
                group = group.add(
                    Circle::new()
                        .set("cx", x_of(p.step))
                        .set("cy", area.y_of(value(p), axis_max))
                        .set("r", 1.7 * theme.stroke_width)
                        .set("fill", color.clone())
                        .add(Title::new(format!("step {}: {:.1}", p.step, value(p)))),
                );
            }
        }

        // legend, above the top right corner of the plot
        let legend_y = area.y_min - 12.0 - 16.0 * (1 - i) as f32;
        group = group
            .add(
                Line::new()
                    .set("x1", area.x_max() - 160.0)
                    .set("x2", area.x_max() - 140.0)
                    .set("y1", legend_y - 4.0)
                    .set("y2", legend_y - 4.0)
                    .set("stroke", color)
                    .set("stroke-width", theme.stroke_width),
            )
            .add(text(strategy_label(strategy), area.x_max() - 135.0, legend_y, theme));
    }
    group
}

/// Horizontal grid lines with the profit they represent
fn grid(area: &PlotArea, axis_max: f64, theme: &ChartTheme) -> Group {
    let mut group = Group::new();
    for i in 0..=N_GRID_LINES {
        let value = axis_max * i as f64 / N_GRID_LINES as f64;
        let y = area.y_of(value, axis_max);
        group = group
            .add(
                Line::new()
                    .set("x1", area.x_min)
                    .set("x2", area.x_max())
                    .set("y1", y)
                    .set("y2", y)
                    .set("stroke", theme.grid.to_string())
                    .set("stroke-dasharray", "3 3"),
            )
            .add(
                text(format!("{value:.1}"), area.x_min - 8.0, y + 4.0, theme)
                    .set("text-anchor", "end"),
            );
    }
    group
}

fn axes(area: &PlotArea, theme: &ChartTheme) -> Group {
    let axis = |x1: f32, y1: f32, x2: f32, y2: f32| {
        Line::new()
            .set("x1", x1)
            .set("y1", y1)
            .set("x2", x2)
            .set("y2", y2)
            .set("stroke", theme.text.to_string())
            .set("stroke-width", 1.0)
    };
    Group::new()
        .add(axis(area.x_min, area.y_min, area.x_min, area.y_max()))
        .add(axis(area.x_min, area.y_max(), area.x_max(), area.y_max()))
        .add(
            text("profit", 0.2 * MARGIN_LEFT, area.y_min - 12.0, theme)
                .set("font-weight", "500"),
        )
}

fn text(content: impl Into<String>, x: f32, y: f32, theme: &ChartTheme) -> Text {
    Text::new(content.into())
        .set("x", x)
        .set("y", y)
        .set("font-size", 12.0)
        .set("font-family", "monospace")
        .set("fill", theme.text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::svg_util::ThemePreset;
    use hold_rs::navigator::SimulationSession;
    use hold_rs::manifest::CargoManifest;

    #[test]
    fn chart_contains_both_series_and_bars() {
        let session = SimulationSession::start(&CargoManifest::with_sample_data()).unwrap();
        let doc = comparison_to_svg(&session.comparison(), ChartOptions::default(), "sample");
        let rendered = doc.to_string();

        assert!(rendered.contains("improvement: 20.0 (8.5%)"));
        assert!(rendered.contains(strategy_label(StrategyId::Greedy)));
        assert!(rendered.contains(strategy_label(StrategyId::Naive)));
        assert!(rendered.contains("255.0"));
        assert!(rendered.contains("235.0"));
    }

    #[test]
    fn gray_theme_can_be_selected() {
        let session = SimulationSession::start(&CargoManifest::with_sample_data()).unwrap();
        let options = ChartOptions {
            theme: ThemePreset::Gray,
            ..ChartOptions::default()
        };
        let rendered = comparison_to_svg(&session.comparison(), options, "gray").to_string();
        assert!(rendered.contains(&ChartTheme::GRAY.bar_fill.to_string()));
        assert!(!rendered.contains(&ChartTheme::HARBOUR.bar_fill.to_string()));
    }

    #[test]
    fn chart_of_empty_outcome_has_undefined_improvement() {
        let session = SimulationSession::from_instance(CargoManifest::new(0.0).freeze());
        let doc = comparison_to_svg(&session.comparison(), ChartOptions::default(), "empty");
        assert!(doc.to_string().contains("(n/a)"));
    }
}
