use std::fmt::{self, Display};

use crate::errors::WellingtonError;
use crate::models::GenomicInterval;

///
/// A single called footprint. Formats as one line of a BED file:
/// `chr start end name score`, with `.` standing in for a missing name.
///
#[derive(Debug, Clone, PartialEq)]
pub struct FootprintCall {
    pub chr: String,
    pub start: u32,
    pub end: u32,
    pub score: f64,
    pub name: Option<String>,
}

impl FootprintCall {
    pub fn new(chr: &str, start: u32, end: u32, score: f64) -> Self {
        FootprintCall {
            chr: chr.to_string(),
            start,
            end,
            score,
            name: None,
        }
    }

    pub fn as_bed_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.chr,
            self.start,
            self.end,
            self.name.as_deref().unwrap_or("."),
            self.score
        )
    }
}

impl Display for FootprintCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_bed_line())
    }
}

///
/// Per-basepair footprint scores for one interval. `scores[i]` is the score of basepair
/// `interval.start + i`; undefined positions are `NaN`.
///
#[derive(Debug, Clone, PartialEq)]
pub struct FootprintResult {
    pub interval: GenomicInterval,
    pub scores: Vec<f64>,
}

impl FootprintResult {
    ///
    /// Build a result, checking that there is exactly one score per basepair.
    ///
    pub fn new(interval: GenomicInterval, scores: Vec<f64>) -> Result<Self, WellingtonError> {
        let expected = interval.width() as usize;
        if scores.len() != expected {
            return Err(WellingtonError::ScoreLengthMismatch {
                interval: interval.as_string(),
                expected,
                got: scores.len(),
            });
        }
        Ok(FootprintResult { interval, scores })
    }
}

///
/// Everything written for one interval: its score track, the calls made at the calibrated
/// FDR threshold and the calls made at each fixed p-value cutoff (same order as the cutoffs
/// in the run configuration).
///
#[derive(Debug, Clone, PartialEq)]
pub struct FootprintRecord {
    pub result: FootprintResult,
    pub fdr_threshold: Option<f64>,
    pub fdr_calls: Vec<FootprintCall>,
    pub cutoff_calls: Vec<Vec<FootprintCall>>,
}
