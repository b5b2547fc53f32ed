//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which curve family to fit.
///
/// The family is always chosen by the caller; there is no automatic
/// model selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelFamily {
    /// Ordinary least-squares polynomial of caller-chosen degree.
    #[value(name = "poly")]
    Polynomial,
    /// `y = a * e^[b(x - d)] + c`
    #[value(name = "exp")]
    Exponential,
    /// `y = a * ln[b(x - d)] + c`
    #[value(name = "log")]
    Logarithmic,
}

impl ModelFamily {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelFamily::Polynomial => "Polynomial",
            ModelFamily::Exponential => "Exponential",
            ModelFamily::Logarithmic => "Logarithmic",
        }
    }
}

/// A normalized set of (x, y) observations, validated to equal length and
/// finite values by ingest.
#[derive(Debug, Clone)]
pub struct Samples {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Samples {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Summary stats about the samples actually used for fitting.
#[derive(Debug, Clone)]
pub struct SampleStats {
    pub n: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl SampleStats {
    pub fn from_samples(samples: &Samples) -> Self {
        let mut stats = SampleStats {
            n: samples.len(),
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        };
        for (&x, &y) in samples.x.iter().zip(samples.y.iter()) {
            stats.x_min = stats.x_min.min(x);
            stats.x_max = stats.x_max.max(x);
            stats.y_min = stats.y_min.min(y);
            stats.y_max = stats.y_max.max(y);
        }
        stats
    }
}

/// Residual-error statistics for a fit.
///
/// `mean_error` is signed; its convention differs by family (see
/// `fit::metrics::MeanErrorSign`). The other three are magnitudes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitStats {
    pub rmse: f64,
    pub mean_error: f64,
    pub mae: f64,
    pub max_error: f64,
}

/// A finely sampled curve along the fitted model, for smooth rendering.
/// Display data only; never used in any statistic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseCurve {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Output of a single fit. Created fresh on every invocation and never
/// cached; the engine holds no state between calls.
#[derive(Debug, Clone)]
pub struct FitResult {
    pub family: ModelFamily,
    /// Human-readable equation of best fit.
    pub equation: String,
    /// Fitted parameters. Polynomial: coefficients from highest power down.
    /// Exponential/logarithmic: `[a, b, c, d]`.
    pub params: Vec<f64>,
    pub stats: FitStats,
    /// Model evaluated at the original x-values (residual/export data).
    pub y_fit: Vec<f64>,
    /// 500 evenly spaced points across `[min(x), max(x)]`.
    pub dense: DenseCurve,
}

/// One histogram bucket: `[lo, hi)` except the last, which includes `hi`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Bucketed frequency table for a one-dimensional sample.
///
/// Empty input produces an empty table rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Histogram {
    pub buckets: Vec<Bucket>,
}

impl Histogram {
    pub fn total_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }
}

/// A saved curve file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub family: ModelFamily,
    pub equation: String,
    pub params: Vec<f64>,
    pub stats: FitStats,
    pub grid: DenseCurve,
}
