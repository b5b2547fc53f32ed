//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads CSV samples
//! - runs the requested fit or histogram
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Cli, Command, FitArgs, HistArgs};
use crate::error::AppError;

/// Entry point for the `cfit` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Hist(args) => handle_hist(args),
    }
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let ingest = crate::io::ingest::load_xy_csv(&args.csv)?;

    let fit = crate::fit::fit_samples(
        args.model,
        &ingest.samples.x,
        &ingest.samples.y,
        args.degree as usize,
    )?;

    println!("{}", crate::report::format_fit_report(&ingest.stats, &fit));

    if args.plot && !args.no_plot {
        let plot =
            crate::plot::render_fit_plot(&ingest.samples, &fit, args.width, args.height);
        println!("{plot}");
    }

    if let Some(path) = &args.export {
        crate::io::export::write_results_csv(path, &ingest.samples, &fit)?;
    }
    if let Some(path) = &args.export_curve {
        crate::io::export::write_curve_json(path, &fit)?;
    }

    Ok(())
}

fn handle_hist(args: HistArgs) -> Result<(), AppError> {
    let x = crate::io::ingest::load_x_csv(&args.csv)?;
    let hist = crate::fit::summarize(&x);

    println!("{}", crate::report::format_histogram_report(&hist));

    if args.plot && !args.no_plot {
        let bars = crate::plot::render_histogram_plot(&hist, args.width);
        if !bars.is_empty() {
            println!("{bars}");
        }
    }

    Ok(())
}
