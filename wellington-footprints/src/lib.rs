//! # Wellington footprinting at scale
//!
//! Drives a footprint scorer over every region of a DNase-seq experiment:
//!
//! 1. regions are put in chromosome, basepair order and split into chunks,
//! 2. chunks are scored in parallel on a rayon pool, each interval also getting an FDR
//!    cutoff calibrated from randomised null scores,
//! 3. the results are written, in region order, to a wig score track, an FDR bed file and one
//!    bed file per fixed p-value cutoff.
//!
//! The scoring statistic and the read access are supplied by the caller through
//! [FootprintScorer] and [ReadSource].
//!
//! ```rust,ignore
//! use wellington_footprints::{FootprintArgs, footprint_from_args};
//!
//! let mut args = FootprintArgs::new("dhs.bed", "reads.bam", "out/");
//! args.seed = Some(42);
//!
//! let summary = footprint_from_args(&args, &reads, &wellington)?;
//! println!("{} FDR footprints", summary.fdr_calls);
//! ```
//!
pub mod config;
pub mod consts;
pub mod dispatch;
pub mod fdr;
pub mod percentile;
pub mod pipeline;
pub mod scorer;

// re-exports
pub use config::*;
pub use dispatch::*;
pub use fdr::*;
pub use percentile::*;
pub use pipeline::*;
pub use scorer::*;
