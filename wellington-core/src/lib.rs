//! # Core models for Wellington footprinting
//!
//! This crate holds the plain data shared by the footprinting pipeline and its writers:
//! genomic intervals read from BED files, the `from,to,step` size ranges handed to the
//! footprint scorer, and the footprint calls and per-interval results the pipeline produces.
//!
//! Nothing in here does any heavy lifting; the parallel driver lives in `wellington-footprints`
//! and the file formats in `wellington-io`.
//!
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::*;
pub use models::*;
