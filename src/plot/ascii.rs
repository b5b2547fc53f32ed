//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - observed points: `o`
//! - fitted curve: `-` line
//! - histogram buckets: `#` bars

use crate::domain::{FitResult, Histogram, ModelFamily, Samples};

/// Render a scatter + fitted-curve plot.
///
/// The window covers the data and the dense curve. Exponential fits pad it
/// by ±1 in x and ±5 in y beyond the data extent so a sharply diverging
/// curve stays visible near the edges; the other families get a small
/// relative margin.
pub fn render_fit_plot(samples: &Samples, fit: &FitResult, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (mut x_min, mut x_max) = range_of(samples.x.iter().copied()).unwrap_or((0.0, 1.0));
    let (mut y_min, mut y_max) = range_of(
        samples
            .y
            .iter()
            .chain(fit.dense.y.iter().filter(|v| v.is_finite()))
            .copied(),
    )
    .unwrap_or((0.0, 1.0));

    match fit.family {
        ModelFamily::Exponential => {
            let (dy_min, dy_max) = range_of(samples.y.iter().copied()).unwrap_or((y_min, y_max));
            x_min -= 1.0;
            x_max += 1.0;
            y_min = dy_min - 5.0;
            y_max = dy_max + 5.0;
        }
        _ => {
            (x_min, x_max) = pad_range(x_min, x_max, 0.05);
            (y_min, y_max) = pad_range(y_min, y_max, 0.05);
        }
    }

    let mut grid = vec![vec![' '; width]; height];

    // Draw curve first (so points can overlay).
    for (&cx, &cy) in fit.dense.x.iter().zip(fit.dense.y.iter()) {
        if !cy.is_finite() {
            continue;
        }
        if let Some((col, row)) = to_cell(cx, cy, x_min, x_max, y_min, y_max, width, height) {
            grid[row][col] = '-';
        }
    }

    for (&px, &py) in samples.x.iter().zip(samples.y.iter()) {
        if let Some((col, row)) = to_cell(px, py, x_min, x_max, y_min, y_max, width, height) {
            grid[row][col] = 'o';
        }
    }

    let mut out = String::new();
    for (row, cells) in grid.iter().enumerate() {
        let label = if row == 0 {
            format!("{y_max:>10.3}")
        } else if row == height - 1 {
            format!("{y_min:>10.3}")
        } else {
            " ".repeat(10)
        };
        out.push_str(&label);
        out.push_str(" |");
        out.extend(cells.iter());
        out.push('\n');
    }

    out.push_str(&" ".repeat(10));
    out.push_str(" +");
    out.push_str(&"-".repeat(width));
    out.push('\n');
    out.push_str(&format!(
        "{:>12}{:>width$.3}\n",
        format!("{x_min:.3}"),
        x_max,
        width = width
    ));

    out
}

/// Render a histogram as horizontal bars, one row per bucket.
pub fn render_histogram_plot(hist: &Histogram, width: usize) -> String {
    let width = width.max(10);
    let max_count = hist.buckets.iter().map(|b| b.count).max().unwrap_or(0);
    if max_count == 0 {
        return String::new();
    }

    let mut out = String::new();
    for bucket in &hist.buckets {
        let bar_len = (bucket.count * width).div_ceil(max_count);
        out.push_str(&format!(
            "{:<26} {} ({})\n",
            format!("[{:.4}, {:.4})", bucket.lo, bucket.hi),
            "#".repeat(bar_len),
            bucket.count
        ));
    }

    out
}

fn range_of(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if lo.is_finite() && hi.is_finite() {
        Some((lo, hi))
    } else {
        None
    }
}

fn pad_range(lo: f64, hi: f64, frac: f64) -> (f64, f64) {
    let span = hi - lo;
    if span <= 0.0 {
        return (lo - 0.5, hi + 0.5);
    }
    (lo - span * frac, hi + span * frac)
}

fn to_cell(
    x: f64,
    y: f64,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    width: usize,
    height: usize,
) -> Option<(usize, usize)> {
    if x < x_min || x > x_max || y < y_min || y > y_max {
        return None;
    }
    let col = ((x - x_min) / (x_max - x_min) * (width as f64 - 1.0)).round() as usize;
    let row = ((y_max - y) / (y_max - y_min) * (height as f64 - 1.0)).round() as usize;
    Some((col.min(width - 1), row.min(height - 1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::{fit_polynomial, summarize};

    #[test]
    fn fit_plot_has_requested_size_and_marks() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, 3.0, 5.0, 7.0];
        let samples = Samples { x: x.to_vec(), y: y.to_vec() };
        let fit = fit_polynomial(&x, &y, 1).unwrap();

        let plot = render_fit_plot(&samples, &fit, 40, 10);
        let lines: Vec<&str> = plot.lines().collect();
        // 10 grid rows + axis line + x labels.
        assert_eq!(lines.len(), 12);
        assert!(plot.contains('o'));
        assert!(plot.contains('-'));
    }

    #[test]
    fn histogram_plot_scales_to_max_count() {
        let hist = summarize(&[1.0, 1.0, 1.0, 1.0, 5.0]);
        let plot = render_histogram_plot(&hist, 20);
        assert!(plot.contains('#'));
        let longest = plot
            .lines()
            .map(|l| l.chars().filter(|&c| c == '#').count())
            .max()
            .unwrap();
        assert_eq!(longest, 20);
    }

    #[test]
    fn empty_histogram_renders_nothing() {
        let plot = render_histogram_plot(&summarize(&[]), 20);
        assert!(plot.is_empty());
    }
}
