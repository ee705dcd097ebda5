//! Cumulative savings chart
//!
//! Renders the chart series as an inline SVG line chart. Points are spaced
//! evenly along the x axis (one per reporting day) and the y axis starts at
//! zero with rounded tick steps.

use crate::savings::ChartPoint;

use super::format::{billions, currency, escape_html, tick_date};

const WIDTH: f64 = 1200.0;
const HEIGHT: f64 = 400.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 60.0;

const LINE_COLOR: &str = "#10B981";
const AXIS_COLOR: &str = "#6b7280";
const GRID_COLOR: &str = "#e5e7eb";

/// Number of intervals on the y axis
const Y_TICK_INTERVALS: u32 = 4;

/// Y axis scale: `max` is the top of the axis, `step` the tick spacing
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct YScale {
    max: f64,
    step: f64,
}

impl YScale {
    /// Scale covering `0..=peak` with rounded steps
    fn for_peak(peak: u64) -> Self {
        if peak == 0 {
            return Self { max: 1.0, step: 0.25 };
        }

        let step = nice_step(peak as f64 / Y_TICK_INTERVALS as f64);
        let intervals = (peak as f64 / step).ceil().max(1.0);
        Self {
            max: step * intervals,
            step,
        }
    }

    /// Tick values from zero to the top of the axis
    fn ticks(&self) -> Vec<f64> {
        let count = (self.max / self.step).round() as u32;
        (0..=count).map(|i| i as f64 * self.step).collect()
    }
}

/// Round a raw step up to 1, 2, 2.5 or 5 times a power of ten
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let normalized = raw / magnitude;

    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}

fn plot_width() -> f64 {
    WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

fn plot_height() -> f64 {
    HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

/// X coordinate of the point at `index` out of `count`
fn x_at(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return MARGIN_LEFT + plot_width() / 2.0;
    }
    MARGIN_LEFT + plot_width() * index as f64 / (count - 1) as f64
}

fn y_at(value: f64, scale: &YScale) -> f64 {
    MARGIN_TOP + plot_height() * (1.0 - value / scale.max)
}

/// Render the series as an SVG document fragment
pub fn render_chart(series: &[ChartPoint]) -> String {
    let peak = series.iter().map(|p| p.amount).max().unwrap_or(0);
    let scale = YScale::for_peak(peak);
    let axis_y = MARGIN_TOP + plot_height();

    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<svg class="chart" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="100%" height="{}" role="img" aria-label="Cumulative savings">"#,
        WIDTH, HEIGHT, HEIGHT
    ));
    svg.push('\n');

    // Y axis grid and labels
    for tick in scale.ticks() {
        let y = y_at(tick, &scale);
        svg.push_str(&format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-dasharray="3,3"/>"#,
            MARGIN_LEFT,
            y,
            WIDTH - MARGIN_RIGHT,
            y,
            GRID_COLOR
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end" dominant-baseline="middle" font-size="12" fill="{}">{}</text>"#,
            MARGIN_LEFT - 8.0,
            y,
            AXIS_COLOR,
            escape_html(&billions(tick.round() as u64))
        ));
        svg.push('\n');
    }

    // Axes
    svg.push_str(&format!(
        r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}"/>"#,
        MARGIN_LEFT,
        MARGIN_TOP,
        MARGIN_LEFT,
        axis_y,
        AXIS_COLOR
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}"/>"#,
        MARGIN_LEFT,
        axis_y,
        WIDTH - MARGIN_RIGHT,
        axis_y,
        AXIS_COLOR
    ));
    svg.push('\n');

    // X axis labels, rotated like a crowded date axis
    for (i, point) in series.iter().enumerate() {
        let x = x_at(i, series.len());
        let y = axis_y + 16.0;
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="12" fill="{}" transform="rotate(-45 {:.1} {:.1})">{}</text>"#,
            x,
            y,
            AXIS_COLOR,
            x,
            y,
            tick_date(point.date)
        ));
        svg.push('\n');
    }

    if !series.is_empty() {
        let path: Vec<String> = series
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let cmd = if i == 0 { 'M' } else { 'L' };
                format!(
                    "{}{:.1},{:.1}",
                    cmd,
                    x_at(i, series.len()),
                    y_at(p.amount as f64, &scale)
                )
            })
            .collect();

        svg.push_str(&format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
            path.join(" "),
            LINE_COLOR
        ));
        svg.push('\n');

        for (i, point) in series.iter().enumerate() {
            svg.push_str(&format!(
                r#"<circle cx="{:.1}" cy="{:.1}" r="3" fill="{}" stroke="{}" stroke-width="2"><title>{}: {}</title></circle>"#,
                x_at(i, series.len()),
                y_at(point.amount as f64, &scale),
                LINE_COLOR,
                LINE_COLOR,
                tick_date(point.date),
                escape_html(&currency(point.amount))
            ));
            svg.push('\n');
        }
    }

    svg.push_str("</svg>");
    svg
}
