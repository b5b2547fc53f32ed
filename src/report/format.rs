//! Terminal report formatting.

use crate::domain::{FitResult, Histogram, SampleStats};

/// Format the fit summary: dataset stats + the results table.
pub fn format_fit_report(stats: &SampleStats, fit: &FitResult) -> String {
    let mut out = String::new();

    out.push_str("=== cfit - Curve of Best Fit ===\n");
    out.push_str(&format!("Model: {}\n", fit.family.display_name()));
    out.push_str(&format!(
        "Points: n={} | x=[{:.3}, {:.3}] | y=[{:.3}, {:.3}]\n\n",
        stats.n, stats.x_min, stats.x_max, stats.y_min, stats.y_max
    ));

    out.push_str(&format_row("Equation of best fit", &fit.equation));
    out.push_str(&format_row(
        "Root Mean Square Error",
        &format!("{:.6}", fit.stats.rmse),
    ));
    out.push_str(&format_row(
        "Average Error",
        &format!("{:.6}", fit.stats.mean_error),
    ));
    out.push_str(&format_row(
        "Mean Absolute Error",
        &format!("{:.6}", fit.stats.mae),
    ));
    out.push_str(&format_row(
        "Maximum Error",
        &format!("{:.6}", fit.stats.max_error),
    ));

    out
}

/// Format the histogram frequency table.
pub fn format_histogram_report(hist: &Histogram) -> String {
    let mut out = String::new();

    out.push_str("=== cfit - Histogram ===\n");
    out.push_str(&format!(
        "Values: n={} | buckets={}\n\n",
        hist.total_count(),
        hist.buckets.len()
    ));

    if hist.buckets.is_empty() {
        out.push_str("(no data)\n");
        return out;
    }

    out.push_str(&format!("{:<26} {:>8}\n", "range", "count"));
    out.push_str(&format!("{:-<26} {:-<8}\n", "", ""));
    for (i, bucket) in hist.buckets.iter().enumerate() {
        let closer = if i + 1 == hist.buckets.len() { "]" } else { ")" };
        out.push_str(&format!(
            "{:<26} {:>8}\n",
            format!("[{:.4}, {:.4}{closer}", bucket.lo, bucket.hi),
            bucket.count
        ));
    }

    out
}

fn format_row(label: &str, value: &str) -> String {
    format!("{label:<24} {value}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Samples;
    use crate::fit::{fit_polynomial, summarize};

    #[test]
    fn fit_report_contains_table_labels() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [1.0, 4.0, 9.0, 16.0];
        let samples = Samples { x: x.to_vec(), y: y.to_vec() };
        let stats = SampleStats::from_samples(&samples);
        let fit = fit_polynomial(&x, &y, 2).unwrap();

        let report = format_fit_report(&stats, &fit);
        for label in [
            "Equation of best fit",
            "Root Mean Square Error",
            "Average Error",
            "Mean Absolute Error",
            "Maximum Error",
        ] {
            assert!(report.contains(label), "missing '{label}' in:\n{report}");
        }
        assert!(report.contains("1.0x^2"));
    }

    #[test]
    fn histogram_report_handles_empty_input() {
        let report = format_histogram_report(&summarize(&[]));
        assert!(report.contains("n=0"));
        assert!(report.contains("(no data)"));
    }

    #[test]
    fn histogram_report_lists_every_bucket() {
        let hist = summarize(&[1.0, 2.0, 2.0, 3.0, 5.0, 8.0]);
        let report = format_histogram_report(&hist);
        let data_rows = report
            .lines()
            .filter(|l| l.starts_with('['))
            .count();
        assert_eq!(data_rows, hist.buckets.len());
    }
}
