//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the model-family tag (`ModelFamily`)
//! - normalized sample data (`Samples`, `SampleStats`)
//! - fit outputs (`FitResult`, `FitStats`, `DenseCurve`)
//! - histogram outputs (`Histogram`, `Bucket`)
//! - the curve JSON export schema (`CurveFile`)

pub mod types;

pub use types::*;
