//! # Output files for Wellington footprinting
//!
//! This small crate knows where footprinting results go and what they look like on disk:
//!
//! - one WIG score track with a `fixedStep` block per interval,
//! - one BED file of footprints called at the calibrated FDR threshold,
//! - one BED file per fixed p-value cutoff, under `p_value_cutoffs/`.
//!
//! [ResultWriter] opens all of them once and appends records in the order it is given them.
//!
pub mod bed;
pub mod consts;
pub mod layout;
pub mod wig;
pub mod writer;

// re-expose core functions
pub use bed::*;
pub use consts::*;
pub use layout::*;
pub use wig::*;
pub use writer::*;
