use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WellingtonError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Error parsing region: {0}")]
    RegionParseError(String),

    #[error("Corrupted file. 0 regions found in the file: {0}")]
    EmptyIntervalSet(String),

    #[error("Invalid size range '{0}': must be supplied as from,to,step")]
    InvalidSizeRange(String),

    #[error("Invalid p-value cutoffs '{0}': must be a list of numbers separated by commas")]
    InvalidPValueCutoffs(String),

    #[error("FDR cutoff must be between 0 and 1 (exclusive), got {0}")]
    FdrCutoffOutOfBounds(f64),

    #[error("FDR limit must be less than 0, got {0}")]
    FdrLimitNotNegative(f64),

    #[error("FDR iterations must be at least 1")]
    NoFdrIterations,

    #[error("Score track for {interval} has {got} values, expected one per basepair ({expected})")]
    ScoreLengthMismatch {
        interval: String,
        expected: usize,
        got: usize,
    },

    #[error("Number of threads must be at least 1")]
    NoThreads,

    #[error("Number of chunks must be at least 1")]
    NoChunks,

    #[error("Output directory {0:?} does not exist")]
    OutputDirMissing(PathBuf),

    #[error("Output directory {0:?} is not empty!")]
    OutputDirNotEmpty(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
