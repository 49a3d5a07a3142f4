//! The two collaborators the pipeline drives: a source of DNase cut counts and a footprint
//! scorer. Neither is implemented here; anything that can answer these traits can be
//! footprinted at scale by [crate::pipeline].
use anyhow::Result;
use rand::rngs::StdRng;

use wellington_core::{FootprintCall, FootprintResult, GenomicInterval, SizeRange};

///
/// Per-basepair DNase I cut counts over an interval, split by strand. Both vectors have one
/// entry per basepair of the queried interval.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CutCounts {
    pub forward: Vec<u32>,
    pub reverse: Vec<u32>,
}

impl CutCounts {
    pub fn zeros(len: usize) -> Self {
        CutCounts {
            forward: vec![0; len],
            reverse: vec![0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

///
/// Read-only access to aligned reads. Shared by every worker at once.
///
pub trait ReadSource: Sync {
    fn cuts(&self, interval: &GenomicInterval) -> Result<CutCounts>;
}

///
/// Window parameters forwarded untouched to the scorer.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringParams {
    pub shoulder_sizes: SizeRange,
    pub footprint_sizes: SizeRange,
    pub bonferroni: bool,
    pub one_dimension: bool,
}

///
/// The scored footprint track of one interval.
///
pub trait FootprintTrack {
    fn interval(&self) -> &GenomicInterval;

    /// One score per basepair of [FootprintTrack::interval], `NaN` where undefined.
    fn scores(&self) -> &[f64];

    ///
    /// Score the interval once more against randomised reads and return the resulting
    /// statistic array. Called repeatedly to build the null distribution for FDR calibration.
    ///
    fn null_scores(
        &self,
        reads: &dyn ReadSource,
        params: &ScoringParams,
        rng: &mut StdRng,
    ) -> Result<Vec<f64>>;

    /// Footprints scoring below `cutoff`, with overlapping calls merged when `merge` is set.
    fn footprints(&self, cutoff: f64, merge: bool) -> Vec<FootprintCall>;

    fn to_result(&self) -> Result<FootprintResult> {
        Ok(FootprintResult::new(
            self.interval().clone(),
            self.scores().to_vec(),
        )?)
    }
}

///
/// Computes a [FootprintTrack] for an interval, e.g. Wellington or Wellington 1D depending on
/// [ScoringParams::one_dimension].
///
pub trait FootprintScorer: Sync {
    type Track: FootprintTrack;

    fn score(
        &self,
        interval: &GenomicInterval,
        reads: &dyn ReadSource,
        params: &ScoringParams,
    ) -> Result<Self::Track>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_cut_counts() {
        let cuts = CutCounts::zeros(3);
        assert_eq!(cuts.len(), 3);
        assert_eq!(cuts.reverse, vec![0, 0, 0]);
        assert!(!cuts.is_empty());
        assert!(CutCounts::default().is_empty());
    }
}
