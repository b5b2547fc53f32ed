//! Mathematical utilities: linear least squares, damped nonlinear least
//! squares, and display grids.

pub mod grid;
pub mod lm;
pub mod ols;

pub use grid::*;
pub use lm::*;
pub use ols::*;
