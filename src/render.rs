use crate::models::{ChartData, ChartKind, ChartSet};
use std::f64::consts::PI;
use std::fmt::Write;

const WIDTH: f64 = 360.0;
const HEIGHT: f64 = 240.0;

/// `$X.XX`, two decimals. Negative zero prints as zero.
pub fn format_currency(value: f64) -> String {
    format!("${:.2}", normalize_zero(value))
}

/// `X.XX%`, two decimals.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", normalize_zero(value))
}

/// Share of `total` as a one-decimal percentage; `0.0%` when there is no total.
pub fn format_share(part: f64, total: f64) -> String {
    if total > 0.0 {
        format!("{:.1}%", normalize_zero(part / total * 100.0))
    } else {
        "0.0%".to_string()
    }
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

pub fn render_chart(kind: ChartKind, data: &ChartData) -> String {
    match kind {
        ChartKind::Pie => render_pie(data),
        ChartKind::Bar => render_bar(data),
    }
}

pub fn render_charts(data: &ChartData) -> ChartSet {
    ChartSet {
        pie: render_pie(data),
        bar: render_bar(data),
    }
}

// Drawing clamps negative and non-finite values to zero.
fn drawable(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

fn open_svg(kind: ChartKind, title: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="chart chart-{kind}" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="{}">"#,
        escape(title)
    )
}

pub fn render_pie(data: &ChartData) -> String {
    let mut svg = open_svg(ChartKind::Pie, data.title);
    let (cx, cy, r) = (110.0, 120.0, 96.0);
    let total: f64 = data.slices.iter().map(|slice| drawable(slice.value)).sum();

    if total <= 0.0 {
        let _ = write!(
            svg,
            r##"<circle cx="{cx}" cy="{cy}" r="{r}" fill="#e5e7eb" /><text class="chart-label" x="{cx}" y="{cy}" text-anchor="middle">No data</text>"##
        );
    } else {
        let mut angle = -PI / 2.0;
        for slice in &data.slices {
            let value = drawable(slice.value);
            if value <= 0.0 {
                continue;
            }
            let sweep = value / total * 2.0 * PI;
            if sweep >= 2.0 * PI - 1e-9 {
                let _ = write!(
                    svg,
                    r##"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{}" stroke="#fff" />"##,
                    slice.color
                );
                break;
            }
            let (x1, y1) = (cx + r * angle.cos(), cy + r * angle.sin());
            let end = angle + sweep;
            let (x2, y2) = (cx + r * end.cos(), cy + r * end.sin());
            let large_arc = u8::from(sweep > PI);
            let _ = write!(
                svg,
                r##"<path d="M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z" fill="{}" stroke="#fff" stroke-width="1" />"##,
                slice.color
            );
            angle = end;
        }
    }

    let legend_x = 232.0;
    for (index, slice) in data.slices.iter().enumerate() {
        let y = 48.0 + index as f64 * 24.0;
        let _ = write!(
            svg,
            r#"<rect x="{legend_x}" y="{}" width="12" height="12" fill="{}" /><text class="chart-label" x="{}" y="{y}">{}</text>"#,
            y - 10.0,
            slice.color,
            legend_x + 18.0,
            escape(slice.label)
        );
    }

    svg.push_str("</svg>");
    svg
}

pub fn render_bar(data: &ChartData) -> String {
    let mut svg = open_svg(ChartKind::Bar, data.title);
    let (left, right, top, bottom) = (40.0, WIDTH - 16.0, 32.0, HEIGHT - 40.0);
    let max = data
        .slices
        .iter()
        .map(|slice| drawable(slice.value))
        .fold(0.0, f64::max);
    let scale_max = if max > 0.0 { max } else { 1.0 };
    let count = data.slices.len().max(1) as f64;
    let slot = (right - left) / count;
    let bar_width = slot * 0.6;

    let _ = write!(
        svg,
        r#"<text class="chart-title" x="{}" y="18" text-anchor="middle">{}</text>"#,
        WIDTH / 2.0,
        escape(data.title)
    );
    let _ = write!(
        svg,
        r##"<line class="chart-axis" x1="{left}" y1="{bottom}" x2="{right}" y2="{bottom}" stroke="#9ca3af" />"##
    );

    for (index, slice) in data.slices.iter().enumerate() {
        let value = drawable(slice.value);
        let height = value / scale_max * (bottom - top);
        let x = left + slot * index as f64 + (slot - bar_width) / 2.0;
        let y = bottom - height;
        let center = x + bar_width / 2.0;
        let _ = write!(
            svg,
            r#"<rect x="{x:.2}" y="{y:.2}" width="{bar_width:.2}" height="{height:.2}" fill="{}" />"#,
            slice.color
        );
        let _ = write!(
            svg,
            r#"<text class="chart-value" x="{center:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
            y - 6.0,
            format_currency(slice.value)
        );
        let _ = write!(
            svg,
            r#"<text class="chart-label" x="{center:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
            bottom + 18.0,
            escape(slice.label)
        );
    }

    svg.push_str("</svg>");
    svg
}

pub(crate) fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
