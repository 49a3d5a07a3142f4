use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

use wellington_core::{FootprintCall, GenomicInterval};

use crate::percentile::percentile_in_place;
use crate::scorer::{FootprintTrack, ReadSource, ScoringParams};

///
/// Turns repeated randomised scoring of an interval into a single score cutoff.
///
/// The null statistic arrays of `iterations` randomisations are pooled and the `fraction`
/// percentile of the pool is the cutoff. Scores live on a log-probability scale, so a cutoff is
/// only used when it is strictly below `limit`.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FdrCalibrator {
    pub fraction: f64,
    pub iterations: usize,
    pub limit: f64,
}

///
/// Outcome of FDR calibration for one interval.
///
#[derive(Debug, Clone, PartialEq)]
pub struct FdrSelection {
    /// `None` when the pooled null sample was empty
    pub threshold: Option<f64>,
    /// the threshold exists and is below the limit
    pub eligible: bool,
    pub calls: Vec<FootprintCall>,
}

impl FdrCalibrator {
    pub fn new(fraction: f64, iterations: usize, limit: f64) -> Self {
        FdrCalibrator {
            fraction,
            iterations,
            limit,
        }
    }

    ///
    /// Concatenated null statistics of exactly `iterations` randomisations. The first failing
    /// randomisation aborts the whole sample.
    ///
    pub fn null_sample<T: FootprintTrack + ?Sized>(
        &self,
        track: &T,
        reads: &dyn ReadSource,
        params: &ScoringParams,
        rng: &mut StdRng,
    ) -> Result<Vec<f64>> {
        let mut pooled: Vec<f64> = Vec::new();
        for i in 0..self.iterations {
            let scores = track.null_scores(reads, params, rng).with_context(|| {
                format!(
                    "Randomisation {} of {} failed for {}",
                    i + 1,
                    self.iterations,
                    track.interval()
                )
            })?;
            pooled.extend(scores);
        }
        Ok(pooled)
    }

    ///
    /// The calibrated cutoff for `track`. Undefined (`NaN`) null values are left out of the
    /// percentile.
    ///
    pub fn threshold<T: FootprintTrack + ?Sized>(
        &self,
        track: &T,
        reads: &dyn ReadSource,
        params: &ScoringParams,
        rng: &mut StdRng,
    ) -> Result<Option<f64>> {
        let mut pooled = self.null_sample(track, reads, params, rng)?;
        pooled.retain(|v| !v.is_nan());
        Ok(percentile_in_place(&mut pooled, self.fraction))
    }

    pub fn is_significant(&self, threshold: f64) -> bool {
        threshold < self.limit
    }

    ///
    /// Calibrate a cutoff for `track` and call its footprints at that cutoff. An interval with
    /// no cutoff, or a cutoff not below the limit, gets no calls.
    ///
    pub fn select<T: FootprintTrack + ?Sized>(
        &self,
        track: &T,
        reads: &dyn ReadSource,
        params: &ScoringParams,
        rng: &mut StdRng,
        merge: bool,
    ) -> Result<FdrSelection> {
        let threshold = self.threshold(track, reads, params, rng)?;

        let eligible = threshold.is_some_and(|cutoff| self.is_significant(cutoff));
        let calls = match threshold {
            Some(cutoff) if eligible => track.footprints(cutoff, merge),
            _ => Vec::new(),
        };

        Ok(FdrSelection {
            threshold,
            eligible,
            calls,
        })
    }
}

///
/// Random number generator for the randomisations of one interval.
///
/// With a seed, the generator depends only on the seed and the interval coordinates, so a run
/// gives the same null distributions however the intervals were chunked or scheduled.
///
pub fn interval_rng(seed: Option<u64>, interval: &GenomicInterval) -> StdRng {
    match seed {
        Some(seed) => {
            let key = (&interval.chr, interval.start, interval.end);
            StdRng::seed_from_u64(seed ^ fxhash::hash64(&key))
        }
        None => StdRng::from_os_rng(),
    }
}
