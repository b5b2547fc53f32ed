//! Histogram summarizer for one-dimensional samples.
//!
//! Bin selection follows the standard automatic rule: the larger of the
//! Sturges and Freedman–Diaconis bin counts over the sample range, with
//! Sturges alone when the interquartile range collapses to zero. No
//! equation or error metrics are produced — a histogram summarizes
//! distribution shape only.

use crate::domain::{Bucket, Histogram};

/// Summarize a sample as a bucketed frequency table.
///
/// Permissive by design: an empty sample yields an empty table (not an
/// error), and a zero-range sample yields a single unit-width bucket
/// centered on the value.
pub fn summarize(x: &[f64]) -> Histogram {
    let n = x.len();
    if n == 0 {
        return Histogram::default();
    }

    let (min, max) = x
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    if min == max {
        return Histogram {
            buckets: vec![Bucket {
                lo: min - 0.5,
                hi: min + 0.5,
                count: n,
            }],
        };
    }

    let bins = auto_bin_count(x, min, max);
    let width = (max - min) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in x {
        // The top edge belongs to the last bucket.
        let idx = (((v - min) / (max - min)) * bins as f64) as usize;
        counts[idx.min(bins - 1)] += 1;
    }

    let buckets = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bucket {
            lo: min + width * i as f64,
            hi: min + width * (i + 1) as f64,
            count,
        })
        .collect();

    Histogram { buckets }
}

/// Bin count: max(Sturges, Freedman–Diaconis), Sturges alone on zero IQR.
fn auto_bin_count(x: &[f64], min: f64, max: f64) -> usize {
    let n = x.len();
    let sturges = (n as f64).log2().ceil() as usize + 1;

    let mut sorted = x.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let iqr = percentile(&sorted, 0.75) - percentile(&sorted, 0.25);
    let fd_width = 2.0 * iqr / (n as f64).cbrt();

    if fd_width > 0.0 {
        let fd = ((max - min) / fd_width).ceil() as usize;
        sturges.max(fd)
    } else {
        sturges
    }
    .max(1)
}

/// Linear-interpolated percentile of an already sorted sample.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_table() {
        let hist = summarize(&[]);
        assert!(hist.buckets.is_empty());
        assert_eq!(hist.total_count(), 0);
    }

    #[test]
    fn single_value_yields_unit_bucket() {
        let hist = summarize(&[3.0]);
        assert_eq!(hist.buckets.len(), 1);
        assert_eq!(hist.buckets[0], Bucket { lo: 2.5, hi: 3.5, count: 1 });
    }

    #[test]
    fn constant_sample_yields_single_bucket() {
        let hist = summarize(&[7.0; 12]);
        assert_eq!(hist.buckets.len(), 1);
        assert_eq!(hist.buckets[0].count, 12);
    }

    #[test]
    fn every_value_is_counted() {
        let x: Vec<f64> = (0..100).map(|i| (i as f64 * 0.37).sin() * 10.0).collect();
        let hist = summarize(&x);
        assert_eq!(hist.total_count(), x.len());
        assert!(!hist.buckets.is_empty());
    }

    #[test]
    fn buckets_tile_the_range() {
        let x = [0.0, 1.0, 2.5, 4.0, 7.0, 9.0, 10.0];
        let hist = summarize(&x);

        assert!((hist.buckets.first().unwrap().lo - 0.0).abs() < 1e-12);
        assert!((hist.buckets.last().unwrap().hi - 10.0).abs() < 1e-9);
        for pair in hist.buckets.windows(2) {
            assert!((pair[0].hi - pair[1].lo).abs() < 1e-9);
        }
    }

    #[test]
    fn bimodal_sample_lands_in_outer_buckets() {
        let x = [0.0, 0.0, 0.0, 10.0, 10.0, 10.0];
        let hist = summarize(&x);

        assert_eq!(hist.buckets.first().unwrap().count, 3);
        assert_eq!(hist.buckets.last().unwrap().count, 3);
        let middle: usize = hist.buckets[1..hist.buckets.len() - 1]
            .iter()
            .map(|b| b.count)
            .sum();
        assert_eq!(middle, 0);
    }

    #[test]
    fn max_value_belongs_to_last_bucket() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let hist = summarize(&x);
        assert!(hist.buckets.last().unwrap().count >= 1);
        assert_eq!(hist.total_count(), 5);
    }
}
