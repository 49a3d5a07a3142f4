use std::path::PathBuf;
use std::str::FromStr;

use wellington_core::{SizeRange, WellingtonError};
use wellington_io::{OutputLayout, default_prefix, ensure_empty_dir};

use crate::consts::*;
use crate::fdr::FdrCalibrator;
use crate::scorer::ScoringParams;

///
/// Raw footprinting arguments, as a user would type them.
///
/// [Default] carries the documented defaults. With the `cli` feature this derives
/// [clap::Args] so it can be flattened into a command line parser.
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
pub struct FootprintArgs {
    /// BED file of the regions you want to footprint
    pub regions: PathBuf,

    /// The BAM file containing the DNase-seq reads
    pub reads: PathBuf,

    /// A writeable, empty directory to write the results to
    pub output_dir: PathBuf,

    /// Number of threads
    #[cfg_attr(feature = "cli", arg(short = 't', long, default_value_t = DEFAULT_THREADS))]
    pub threads: usize,

    /// Number of chunks the ordered regions are split into
    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_CHUNKS))]
    pub chunks: usize,

    /// Performs a bonferroni correction
    #[cfg_attr(feature = "cli", arg(short = 'b', long))]
    pub bonferroni: bool,

    /// Range of shoulder sizes to try in format "from,to,step"
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_SHOULDER_SIZES))]
    pub shoulder_sizes: String,

    /// Range of footprint sizes to try in format "from,to,step"
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_FOOTPRINT_SIZES))]
    pub footprint_sizes: String,

    /// Use Wellington 1D instead of Wellington
    #[cfg_attr(feature = "cli", arg(short = 'd', long))]
    pub one_dimension: bool,

    /// Write footprints using the FDR selection method at a specific FDR
    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_FDR_CUTOFF))]
    pub fdr_cutoff: f64,

    /// How many randomisations to use when performing FDR calculations
    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_FDR_ITERATIONS))]
    pub fdr_iterations: usize,

    /// Minimum p-value to be considered significant for FDR calculation
    #[cfg_attr(
        feature = "cli",
        arg(long, default_value_t = DEFAULT_FDR_LIMIT, allow_hyphen_values = true)
    )]
    pub fdr_limit: f64,

    /// Select footprints using a range of p-value cutoffs
    #[cfg_attr(
        feature = "cli",
        arg(long, default_value = DEFAULT_PV_CUTOFFS, allow_hyphen_values = true)
    )]
    pub pv_cutoffs: String,

    /// Disables merging of overlapping footprints called at the FDR cutoff
    #[cfg_attr(feature = "cli", arg(long))]
    pub dont_merge_footprints: bool,

    /// The prefix for results files (default: <reads>.<regions>)
    #[cfg_attr(feature = "cli", arg(short = 'o', long))]
    pub output_prefix: Option<String>,

    /// Seed for the FDR randomisations; without one every run differs
    #[cfg_attr(feature = "cli", arg(long))]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[cfg_attr(feature = "cli", arg(short = 'q', long))]
    pub quiet: bool,
}

impl Default for FootprintArgs {
    fn default() -> Self {
        FootprintArgs {
            regions: PathBuf::new(),
            reads: PathBuf::new(),
            output_dir: PathBuf::new(),
            threads: DEFAULT_THREADS,
            chunks: DEFAULT_CHUNKS,
            bonferroni: false,
            shoulder_sizes: DEFAULT_SHOULDER_SIZES.to_string(),
            footprint_sizes: DEFAULT_FOOTPRINT_SIZES.to_string(),
            one_dimension: false,
            fdr_cutoff: DEFAULT_FDR_CUTOFF,
            fdr_iterations: DEFAULT_FDR_ITERATIONS,
            fdr_limit: DEFAULT_FDR_LIMIT,
            pv_cutoffs: DEFAULT_PV_CUTOFFS.to_string(),
            dont_merge_footprints: false,
            output_prefix: None,
            seed: None,
            quiet: false,
        }
    }
}

///
/// Parse a comma separated list of p-value cutoffs. Repeated cutoffs are kept once, in order
/// of first appearance.
///
pub fn parse_pv_cutoffs(value: &str) -> Result<Vec<f64>, WellingtonError> {
    let invalid = || WellingtonError::InvalidPValueCutoffs(value.to_string());

    let mut cutoffs: Vec<f64> = Vec::new();
    for part in value.split(',') {
        let cutoff = f64::from_str(part.trim()).map_err(|_| invalid())?;
        if !cutoff.is_finite() {
            return Err(invalid());
        }
        if !cutoffs.contains(&cutoff) {
            cutoffs.push(cutoff);
        }
    }
    Ok(cutoffs)
}

///
/// Validated, immutable configuration of a footprinting run. Shared read-only by every worker.
///
#[derive(Debug, Clone, PartialEq)]
pub struct FootprintConfig {
    pub regions: PathBuf,
    pub params: ScoringParams,
    pub fdr: FdrCalibrator,
    pub pv_cutoffs: Vec<f64>,
    pub merge: bool,
    pub threads: usize,
    pub chunks: usize,
    pub seed: Option<u64>,
    pub layout: OutputLayout,
    pub quiet: bool,
}

impl FootprintArgs {
    pub fn new<P: Into<PathBuf>>(regions: P, reads: P, output_dir: P) -> Self {
        FootprintArgs {
            regions: regions.into(),
            reads: reads.into(),
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    ///
    /// Check every argument and build the run configuration. Nothing is computed and no file is
    /// created here; any error means the run must not start.
    ///
    pub fn validate(&self) -> Result<FootprintConfig, WellingtonError> {
        let shoulder_sizes = SizeRange::from_str(&self.shoulder_sizes)?;
        let footprint_sizes = SizeRange::from_str(&self.footprint_sizes)?;
        let pv_cutoffs = parse_pv_cutoffs(&self.pv_cutoffs)?;

        if !(self.fdr_cutoff > 0.0 && self.fdr_cutoff < 1.0) {
            return Err(WellingtonError::FdrCutoffOutOfBounds(self.fdr_cutoff));
        }
        if !(self.fdr_limit < 0.0) {
            return Err(WellingtonError::FdrLimitNotNegative(self.fdr_limit));
        }
        if self.fdr_iterations == 0 {
            return Err(WellingtonError::NoFdrIterations);
        }
        if self.threads == 0 {
            return Err(WellingtonError::NoThreads);
        }
        if self.chunks == 0 {
            return Err(WellingtonError::NoChunks);
        }

        ensure_empty_dir(&self.output_dir)?;

        let prefix = match self.output_prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => prefix.to_string(),
            _ => default_prefix(&self.reads, &self.regions),
        };

        Ok(FootprintConfig {
            regions: self.regions.clone(),
            params: ScoringParams {
                shoulder_sizes,
                footprint_sizes,
                bonferroni: self.bonferroni,
                one_dimension: self.one_dimension,
            },
            fdr: FdrCalibrator::new(self.fdr_cutoff, self.fdr_iterations, self.fdr_limit),
            pv_cutoffs,
            merge: !self.dont_merge_footprints,
            threads: self.threads,
            chunks: self.chunks,
            seed: self.seed,
            layout: OutputLayout::new(&self.output_dir, &prefix),
            quiet: self.quiet,
        })
    }
}
