//! Command-line parsing.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the fitting/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::ModelFamily;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "cfit", version, about = "Curve-of-best-fit and histogram tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a curve family to (x, y) samples and print the equation,
    /// error statistics, and optionally a plot.
    Fit(FitArgs),
    /// Summarize a one-column sample as a histogram.
    Hist(HistArgs),
}

/// Options for fitting.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// CSV file with two unlabeled numeric columns: x, y.
    pub csv: PathBuf,

    /// Curve family to fit.
    #[arg(short = 'm', long, value_enum)]
    pub model: ModelFamily,

    /// Polynomial degree (1-10). Ignored by the nonlinear families.
    #[arg(short = 'd', long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub degree: u8,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export per-sample results to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the fitted curve (equation + params + dense grid) to JSON.
    #[arg(long = "export-curve")]
    pub export_curve: Option<PathBuf>,
}

/// Options for histograms.
#[derive(Debug, Parser, Clone)]
pub struct HistArgs {
    /// CSV file with one unlabeled numeric column.
    pub csv: PathBuf,

    /// Render ASCII bars in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal bars.
    #[arg(long)]
    pub no_plot: bool,

    /// Bar width (columns) for the largest bucket.
    #[arg(long, default_value_t = 60)]
    pub width: usize,
}
