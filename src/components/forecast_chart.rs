use dioxus::prelude::*;

use crate::shared::types::{ConfidenceInterval, ForecastPoint};
use crate::utils::format::{format_bookings, format_short_date};

pub const CHART_WIDTH: f64 = 720.0;
pub const CHART_HEIGHT: f64 = 260.0;
pub const CHART_PADDING: f64 = 36.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub date: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BandSample {
    pub date: String,
    pub x: f64,
    pub lower: f64,
    pub upper: f64,
    pub y_lower: f64,
    pub y_upper: f64,
}

/// Screen geometry for the three series on one date axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    /// Axis categories in first-seen order.
    pub dates: Vec<String>,
    pub y_min: f64,
    pub y_max: f64,
    pub observed: Vec<PlotPoint>,
    pub forecast: Vec<PlotPoint>,
    pub band: Vec<BandSample>,
}

impl ChartLayout {
    pub fn build(
        observed: &[ForecastPoint],
        forecast: &[ForecastPoint],
        ci: &[ConfidenceInterval],
        width: f64,
        height: f64,
        padding: f64,
    ) -> Self {
        let mut dates: Vec<String> = Vec::new();
        let all_dates = observed
            .iter()
            .map(|p| &p.date)
            .chain(forecast.iter().map(|p| &p.date))
            .chain(ci.iter().map(|c| &c.date));
        for d in all_dates {
            if !dates.contains(d) {
                dates.push(d.clone());
            }
        }

        let values = observed
            .iter()
            .chain(forecast.iter())
            .map(|p| p.bookings)
            .chain(ci.iter().flat_map(|c| [c.lower, c.upper]));
        let (mut y_min, mut y_max) = (0.0f64, 0.0f64);
        for v in values {
            y_min = y_min.min(v);
            y_max = y_max.max(v);
        }
        if y_max - y_min <= f64::EPSILON {
            y_max = y_min + 1.0;
        }

        let plot_w = width - padding * 2.0;
        let plot_h = height - padding * 2.0;
        let step = if dates.len() > 1 {
            plot_w / (dates.len() - 1) as f64
        } else {
            0.0
        };
        let x_of = |date: &str| -> f64 {
            let i = dates.iter().position(|d| d == date).unwrap_or(0);
            if dates.len() > 1 {
                padding + i as f64 * step
            } else {
                padding + plot_w / 2.0
            }
        };
        let y_of = |v: f64| padding + plot_h - (v - y_min) / (y_max - y_min) * plot_h;

        let plot = |points: &[ForecastPoint]| -> Vec<PlotPoint> {
            points
                .iter()
                .map(|p| PlotPoint {
                    date: p.date.clone(),
                    value: p.bookings,
                    x: x_of(&p.date),
                    y: y_of(p.bookings),
                })
                .collect()
        };
        let observed = plot(observed);
        let forecast = plot(forecast);
        let band = ci
            .iter()
            .map(|c| BandSample {
                date: c.date.clone(),
                x: x_of(&c.date),
                lower: c.lower,
                upper: c.upper,
                y_lower: y_of(c.lower),
                y_upper: y_of(c.upper),
            })
            .collect();

        Self {
            width,
            height,
            padding,
            dates,
            y_min,
            y_max,
            observed,
            forecast,
            band,
        }
    }

    /// Screen y of `y_min`.
    pub fn baseline_y(&self) -> f64 {
        self.height - self.padding
    }

    pub fn x_for_index(&self, i: usize) -> f64 {
        let plot_w = self.width - self.padding * 2.0;
        if self.dates.len() > 1 {
            self.padding + i as f64 * plot_w / (self.dates.len() - 1) as f64
        } else {
            self.padding + plot_w / 2.0
        }
    }

    pub fn polyline(points: &[PlotPoint]) -> String {
        points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Filled region between the baseline and one edge of the band.
    pub fn band_area(&self, upper: bool) -> String {
        if self.band.is_empty() {
            return String::new();
        }
        let base = self.baseline_y();
        let mut d = String::new();
        for (i, s) in self.band.iter().enumerate() {
            let y = if upper { s.y_upper } else { s.y_lower };
            if i == 0 {
                d.push_str(&format!("M {:.2} {:.2} L {:.2} {:.2}", s.x, base, s.x, y));
            } else {
                d.push_str(&format!(" L {:.2} {:.2}", s.x, y));
            }
        }
        if let Some(last) = self.band.last() {
            d.push_str(&format!(" L {:.2} {:.2} Z", last.x, base));
        }
        d
    }

    /// Evenly spaced value ticks for the horizontal gridlines.
    pub fn y_ticks(&self, count: usize) -> Vec<(f64, f64)> {
        let count = count.max(2);
        let plot_h = self.height - self.padding * 2.0;
        (0..count)
            .map(|i| {
                let frac = i as f64 / (count - 1) as f64;
                let v = self.y_min + frac * (self.y_max - self.y_min);
                (v, self.padding + plot_h - frac * plot_h)
            })
            .collect()
    }

    /// Series values at one axis date, for the tooltip.
    pub fn values_at(&self, date: &str) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(p) = self.observed.iter().find(|p| p.date == date) {
            out.push(("Observed", format_bookings(p.value)));
        }
        if let Some(p) = self.forecast.iter().find(|p| p.date == date) {
            out.push(("Forecast", format_bookings(p.value)));
        }
        if let Some(b) = self.band.iter().find(|b| b.date == date) {
            out.push((
                "Confidence",
                format!("{} – {}", format_bookings(b.lower), format_bookings(b.upper)),
            ));
        }
        out
    }
}

#[allow(non_snake_case)]
#[component]
pub fn ForecastChart(
    observed: Vec<ForecastPoint>,
    forecast: Vec<ForecastPoint>,
    ci: Vec<ConfidenceInterval>,
) -> Element {
    let layout = ChartLayout::build(
        &observed,
        &forecast,
        &ci,
        CHART_WIDTH,
        CHART_HEIGHT,
        CHART_PADDING,
    );
    // Hovered date column (for tooltip)
    let mut hovered = use_signal(|| Option::<usize>::None);

    let view_box = format!("0 0 {} {}", layout.width, layout.height);
    let upper_d = layout.band_area(true);
    let lower_d = layout.band_area(false);
    let observed_pts = ChartLayout::polyline(&layout.observed);
    let forecast_pts = ChartLayout::polyline(&layout.forecast);
    let pad = layout.padding;
    let right = layout.width - layout.padding;
    let base = layout.baseline_y();
    let plot_h = layout.height - layout.padding * 2.0;
    let col_w = if layout.dates.len() > 1 {
        (layout.width - pad * 2.0) / (layout.dates.len() - 1) as f64
    } else {
        layout.width - pad * 2.0
    };
    // Label every other date when the axis gets crowded
    let label_every = if layout.dates.len() > 16 { 2 } else { 1 };

    rsx! {
        div { class: "w-full overflow-x-auto",
            svg { class: "block min-w-full", view_box: "{view_box}", width: "100%", height: "{layout.height}",
                for (i, (v, y)) in layout.y_ticks(5).into_iter().enumerate() {
                    g { key: "tick-{i}",
                        line { x1: "{pad}", y1: "{y}", x2: "{right}", y2: "{y}", stroke: "#1f2937", stroke_width: "1" }
                        text { x: "{pad - 6.0}", y: "{y + 3.0}", text_anchor: "end", class: "fill-current text-[10px] text-slate-400", "{format_bookings(v)}" }
                    }
                }
                // Confidence band as two overlaid regions
                path { d: "{upper_d}", fill: "#818CF866", stroke: "#818CF8", stroke_width: "1" }
                path { d: "{lower_d}", fill: "#818CF833", stroke: "#818CF8", stroke_width: "1" }
                polyline { points: "{observed_pts}", fill: "none", stroke: "#22d3ee", stroke_width: "2" }
                polyline { points: "{forecast_pts}", fill: "none", stroke: "#ef4444", stroke_width: "2" }
                for (i, p) in layout.observed.iter().enumerate() {
                    circle { key: "obs-{i}", cx: "{p.x}", cy: "{p.y}", r: "3", fill: "#22d3ee" }
                }
                for (i, p) in layout.forecast.iter().enumerate() {
                    circle { key: "fc-{i}", cx: "{p.x}", cy: "{p.y}", r: "3", fill: "#ef4444" }
                }
                for (i, d) in layout.dates.iter().enumerate() {
                    g { key: "col-{i}",
                        if i % label_every == 0 {
                            text { x: "{layout.x_for_index(i)}", y: "{base + 16.0}", text_anchor: "middle", class: "fill-current text-[10px] text-slate-400", "{format_short_date(d)}" }
                        }
                        rect {
                            x: "{layout.x_for_index(i) - col_w / 2.0}", y: "{pad}", width: "{col_w}", height: "{plot_h}",
                            fill: "transparent",
                            onmouseenter: move |_| *hovered.write() = Some(i),
                            onmouseleave: move |_| *hovered.write() = None,
                            ontouchstart: move |_| *hovered.write() = Some(i),
                            ontouchend: move |_| *hovered.write() = None,
                        }
                    }
                }
                {
                    match *hovered.read() {
                        Some(idx) if idx < layout.dates.len() => {
                            let date = &layout.dates[idx];
                            let rows: Vec<(f64, String)> = layout
                                .values_at(date)
                                .into_iter()
                                .enumerate()
                                .map(|(j, (name, value))| (j as f64, format!("{name}: {value}")))
                                .collect();
                            let x = layout.x_for_index(idx);
                            let tip_w = 150.0f64;
                            let tip_h = 18.0 + 14.0 * rows.len() as f64;
                            let tip_x = (x - tip_w / 2.0).clamp(pad, right - tip_w);
                            let tip_y = pad + 4.0;
                            rsx!{ g { key: "tooltip",
                                line { x1: "{x}", y1: "{pad}", x2: "{x}", y2: "{base}", stroke: "#818CF8", stroke_width: "1", stroke_dasharray: "3 3" }
                                rect { x: "{tip_x}", y: "{tip_y}", width: "{tip_w}", height: "{tip_h}", rx: "6", fill: "#0f172a", stroke: "#334155", stroke_width: "1" }
                                text { x: "{tip_x + 8.0}", y: "{tip_y + 14.0}", class: "fill-current text-[11px] text-slate-300", "{date}" }
                                for (j, line) in rows.into_iter() {
                                    text { key: "row-{j}", x: "{tip_x + 8.0}", y: "{tip_y + 28.0 + 14.0 * j}", class: "fill-current text-[11px] text-slate-200", "{line}" }
                                }
                            }}
                        }
                        _ => rsx!{ Fragment {} }
                    }
                }
            }
        }
        div { class: "mt-3 flex flex-wrap gap-4 text-xs text-slate-300",
            LegendSwatch { color: "#22d3ee", label: "Observed" }
            LegendSwatch { color: "#ef4444", label: "Forecast" }
            LegendSwatch { color: "#818CF866", label: "Confidence Upper" }
            LegendSwatch { color: "#818CF833", label: "Confidence Lower" }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn LegendSwatch(color: &'static str, label: &'static str) -> Element {
    rsx! {
        div { class: "flex items-center gap-2",
            span { class: "inline-block w-3 h-3 rounded-sm", style: "background:{color}" }
            "{label}"
        }
    }
}
