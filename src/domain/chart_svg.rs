//! Inline SVG rendering for price charts.

use std::fmt::Write;

use crate::domain::chart::{ChartSpec, ChartStyle};

const WIDTH: f64 = 900.0;
const HEIGHT: f64 = 420.0;
const PAD_LEFT: f64 = 70.0;
const PAD_RIGHT: f64 = 20.0;
const PAD_TOP: f64 = 60.0;
const PAD_BOTTOM: f64 = 60.0;
const Y_TICKS: usize = 5;
const MAX_X_LABELS: usize = 8;

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Value range for the y axis. Bars grow from zero.
fn y_domain(spec: &ChartSpec) -> (f64, f64) {
    let values = spec.traces.iter().flat_map(|t| t.values.iter().copied());
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let lo = match spec.style {
        ChartStyle::Bar => lo.min(0.0),
        ChartStyle::Line => lo,
    };
    if hi > lo {
        let margin = match spec.style {
            ChartStyle::Bar => 0.0,
            ChartStyle::Line => (hi - lo) * 0.05,
        };
        (lo - margin, hi + (hi - lo) * 0.05)
    } else {
        (lo - 1.0, hi + 1.0)
    }
}

pub fn render_svg(spec: &ChartSpec) -> String {
    let mut svg = String::new();
    let _ = write!(
        svg,
        r##"<svg xmlns="http://www.w3.org/2000/svg" class="price-chart" viewBox="0 0 {w:.0} {h:.0}" width="100%" role="img" style="font-family: sans-serif; font-size: 12px; background: #fff">"##,
        w = WIDTH,
        h = HEIGHT
    );
    let title = escape_xml(&spec.title);
    let _ = write!(
        svg,
        r##"<title>{title}</title><text x="{x:.1}" y="24" text-anchor="middle" style="font-size: 16px">{title}</text>"##,
        x = WIDTH / 2.0
    );

    if spec.dates.is_empty() {
        let _ = write!(
            svg,
            r##"<text x="{x:.1}" y="{y:.1}" text-anchor="middle" fill="#666">No data in range</text></svg>"##,
            x = WIDTH / 2.0,
            y = HEIGHT / 2.0
        );
        return svg;
    }

    let plot_w = WIDTH - PAD_LEFT - PAD_RIGHT;
    let plot_h = HEIGHT - PAD_TOP - PAD_BOTTOM;
    let baseline = HEIGHT - PAD_BOTTOM;
    let (y_min, y_max) = y_domain(spec);
    let scale_y = plot_h / (y_max - y_min);
    let y_of = |v: f64| baseline - (v - y_min) * scale_y;

    let n = spec.dates.len();
    let band = plot_w / n as f64;
    let x_of = |i: usize| PAD_LEFT + band * (i as f64 + 0.5);

    // axes
    let _ = write!(
        svg,
        r##"<g stroke="#333" stroke-width="1"><line x1="{l:.1}" y1="{t:.1}" x2="{l:.1}" y2="{b:.1}"/><line x1="{l:.1}" y1="{b:.1}" x2="{r:.1}" y2="{b:.1}"/></g>"##,
        l = PAD_LEFT,
        t = PAD_TOP,
        b = baseline,
        r = WIDTH - PAD_RIGHT
    );

    for k in 0..=Y_TICKS {
        let v = y_min + (y_max - y_min) * k as f64 / Y_TICKS as f64;
        let y = y_of(v);
        let _ = write!(
            svg,
            r##"<line x1="{l:.1}" y1="{y:.1}" x2="{r:.1}" y2="{y:.1}" stroke="#eee"/><text x="{tx:.1}" y="{ty:.1}" text-anchor="end">{v:.2}</text>"##,
            l = PAD_LEFT,
            r = WIDTH - PAD_RIGHT,
            tx = PAD_LEFT - 6.0,
            ty = y + 4.0
        );
    }

    let step = n.div_ceil(MAX_X_LABELS).max(1);
    for (i, date) in spec.dates.iter().enumerate().step_by(step) {
        let _ = write!(
            svg,
            r##"<text x="{x:.1}" y="{y:.1}" text-anchor="middle">{d}</text>"##,
            x = x_of(i),
            y = baseline + 18.0,
            d = escape_xml(date)
        );
    }

    match spec.style {
        ChartStyle::Line => {
            for trace in &spec.traces {
                let points: Vec<String> = trace
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| format!("{:.1},{:.1}", x_of(i), y_of(*v)))
                    .collect();
                let _ = write!(
                    svg,
                    r##"<polyline class="trace" data-name="{name}" fill="none" stroke="{color}" stroke-width="1.5" points="{pts}"/>"##,
                    name = trace.name,
                    color = trace.color,
                    pts = points.join(" ")
                );
            }
        }
        ChartStyle::Bar => {
            let group = band * 0.8;
            let bar_w = group / spec.traces.len().max(1) as f64;
            for (k, trace) in spec.traces.iter().enumerate() {
                let _ = write!(
                    svg,
                    r##"<g class="trace" data-name="{name}" fill="{color}">"##,
                    name = trace.name,
                    color = trace.color
                );
                for (i, &v) in trace.values.iter().enumerate() {
                    let x = x_of(i) - group / 2.0 + k as f64 * bar_w;
                    let top = y_of(v.max(y_min));
                    let zero = y_of(0.0_f64.max(y_min));
                    let _ = write!(
                        svg,
                        r##"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}"><title>{name} {date}: {v:.2}</title></rect>"##,
                        y = top.min(zero),
                        w = bar_w,
                        h = (zero - top).abs(),
                        name = trace.name,
                        date = escape_xml(&spec.dates[i])
                    );
                }
                svg.push_str("</g>");
            }
        }
    }

    // legend
    for (k, trace) in spec.traces.iter().enumerate() {
        let x = PAD_LEFT + 10.0 + k as f64 * 80.0;
        let _ = write!(
            svg,
            r##"<rect x="{x:.1}" y="38" width="12" height="12" fill="{color}"/><text x="{tx:.1}" y="48">{name}</text>"##,
            color = trace.color,
            tx = x + 16.0,
            name = trace.name
        );
    }

    svg.push_str("</svg>");
    svg
}
