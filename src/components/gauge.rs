use dioxus::prelude::*;

pub const LOW_RISK_BELOW: f64 = 40.0;
pub const HIGH_RISK_FROM: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub fn text_class(self) -> &'static str {
        match self {
            RiskBand::Low => "text-green-300",
            RiskBand::Medium => "text-yellow-300",
            RiskBand::High => "text-red-300",
        }
    }

    pub fn arc_class(self) -> &'static str {
        match self {
            RiskBand::Low => "text-green-500/40",
            RiskBand::Medium => "text-yellow-500/40",
            RiskBand::High => "text-red-500/40",
        }
    }
}

/// Everything the gauge draws, derived from one score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeReading {
    pub score: f64,
    /// Needle rotation from vertical: -90 at 0, +90 at 100.
    pub angle_deg: f64,
    pub band: RiskBand,
}

impl GaugeReading {
    pub fn from_score(score: f64) -> Self {
        let score = if score.is_nan() {
            0.0
        } else {
            score.clamp(0.0, 100.0)
        };
        let band = if score < LOW_RISK_BELOW {
            RiskBand::Low
        } else if score < HIGH_RISK_FROM {
            RiskBand::Medium
        } else {
            RiskBand::High
        };
        Self {
            score,
            angle_deg: score / 100.0 * 180.0 - 90.0,
            band,
        }
    }

    pub fn label(&self) -> String {
        format!("{:.1}%", self.score)
    }
}

fn polar(cx: f64, cy: f64, r: f64, ang: f64) -> (f64, f64) {
    let rad = ang.to_radians();
    (cx + r * rad.cos(), cy + r * rad.sin())
}

fn arc_path(cx: f64, cy: f64, r: f64, a0: f64, a1: f64) -> String {
    let (x0, y0) = polar(cx, cy, r, a0);
    let (x1, y1) = polar(cx, cy, r, a1);
    let large_arc = if (a1 - a0).abs() >= 180.0 { 1 } else { 0 };
    let sweep = if a1 >= a0 { 1 } else { 0 };
    format!("M {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 {large_arc} {sweep} {x1:.3} {y1:.3}")
}

/// Score 0..100 to the SVG angle on the upper half circle (180..360).
fn score_to_svg(score: f64) -> f64 {
    180.0 + score * 1.8
}

#[allow(non_snake_case)]
#[component]
pub fn RiskGauge(score: f64) -> Element {
    let reading = GaugeReading::from_score(score);

    let width = 224.0f64;
    let stroke = 14.0f64;
    let c = width / 2.0;
    let cy = c;
    let r = c - stroke / 2.0 - 1.0;

    let arcs: Vec<(String, &str)> = [
        (0.0, LOW_RISK_BELOW, RiskBand::Low),
        (LOW_RISK_BELOW, HIGH_RISK_FROM, RiskBand::Medium),
        (HIGH_RISK_FROM, 100.0, RiskBand::High),
    ]
    .into_iter()
    .map(|(lo, hi, band)| {
        let d = arc_path(c, cy, r, score_to_svg(lo), score_to_svg(hi));
        (d, band.arc_class())
    })
    .collect();

    // Needle: rotate the vertical by angle_deg
    let needle_len = r - stroke;
    let rad = reading.angle_deg.to_radians();
    let nx = format!("{:.3}", c + needle_len * rad.sin());
    let ny = format!("{:.3}", cy - needle_len * rad.cos());
    let height = cy + 4.0;
    let value_class = reading.band.text_class();

    let view_box = format!("0 0 {width} {height}");
    let label = reading.label();

    rsx! {
        div { class: "glass rounded-xl p-6 flex flex-col items-center",
            svg { width: "{width}", height: "{height}", view_box: "{view_box}",
                for (i, (d, cls)) in arcs.into_iter().enumerate() {
                    path {
                        key: "{i}",
                        class: "{cls}",
                        d: "{d}",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "{stroke}",
                    }
                }
                line {
                    class: "text-indigo-300",
                    x1: "{c}", y1: "{cy}", x2: "{nx}", y2: "{ny}",
                    stroke: "currentColor", stroke_width: "3", stroke_linecap: "round",
                }
                circle { class: "text-indigo-300", cx: "{c}", cy: "{cy}", r: "5", fill: "currentColor" }
            }
            div { class: "mt-4 text-3xl font-semibold tabular-nums {value_class}", "{label}" }
            div { class: "text-slate-300", "Risk Score" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_endpoints() {
        assert_eq!(GaugeReading::from_score(0.0).angle_deg, -90.0);
        assert_eq!(GaugeReading::from_score(50.0).angle_deg, 0.0);
        assert_eq!(GaugeReading::from_score(100.0).angle_deg, 90.0);
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        let lo = GaugeReading::from_score(-12.0);
        assert_eq!(lo.score, 0.0);
        assert_eq!(lo.angle_deg, -90.0);
        let hi = GaugeReading::from_score(250.0);
        assert_eq!(hi.score, 100.0);
        assert_eq!(hi.angle_deg, 90.0);
        assert_eq!(GaugeReading::from_score(f64::NAN).score, 0.0);
        assert_eq!(GaugeReading::from_score(f64::INFINITY).score, 100.0);
    }

    #[test]
    fn angle_is_monotonic() {
        let mut prev = f64::NEG_INFINITY;
        let mut s = -20.0;
        while s <= 120.0 {
            let r = GaugeReading::from_score(s);
            assert!((0.0..=100.0).contains(&r.score));
            assert!(r.angle_deg >= prev, "angle dropped at score {s}");
            prev = r.angle_deg;
            s += 0.25;
        }
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(GaugeReading::from_score(39.9).band, RiskBand::Low);
        assert_eq!(GaugeReading::from_score(40.0).band, RiskBand::Medium);
        assert_eq!(GaugeReading::from_score(69.9).band, RiskBand::Medium);
        assert_eq!(GaugeReading::from_score(70.0).band, RiskBand::High);
    }

    #[test]
    fn high_risk_prediction_reads_as_percent() {
        let r = GaugeReading::from_score(72.3);
        assert_eq!(r.band, RiskBand::High);
        assert_eq!(r.band.text_class(), "text-red-300");
        assert_eq!(r.label(), "72.3%");
    }

    #[test]
    fn arcs_cover_upper_half() {
        assert_eq!(score_to_svg(0.0), 180.0);
        assert_eq!(score_to_svg(100.0), 360.0);
        let d = arc_path(10.0, 10.0, 5.0, 180.0, 360.0);
        assert!(d.starts_with("M 5.000 10.000"));
    }
}
