pub const DEFAULT_THREADS: usize = 2;
pub const DEFAULT_CHUNKS: usize = 32;

pub const DEFAULT_SHOULDER_SIZES: &str = "35,36,1";
pub const DEFAULT_FOOTPRINT_SIZES: &str = "11,26,2";

pub const DEFAULT_FDR_CUTOFF: f64 = 0.01;
pub const DEFAULT_FDR_ITERATIONS: usize = 100;
pub const DEFAULT_FDR_LIMIT: f64 = -20.0;

pub const DEFAULT_PV_CUTOFFS: &str = "-10,-20,-30,-40,-50,-75,-100,-300,-500,-700";
