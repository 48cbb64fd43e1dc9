//! plot-rs: viewport and coordinate-transform core for 2-D plots.
//!
//! The crate keeps a strict split between pure numeric state (`core`),
//! gesture bookkeeping (`interaction`), backend-agnostic draw commands
//! (`render`) and the `Plot` facade that ties them together (`api`).

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{Plot, PlotConfig};
pub use error::{PlotError, PlotResult};
