pub const FOOTPRINT_TAG: &str = "WellingtonFootprints";
pub const WIG_EXT: &str = "wig";
pub const BED_EXT: &str = "bed";
pub const FDR_TAG: &str = "FDR";
pub const PVALUE_CUTOFF_DIR: &str = "p_value_cutoffs";

// required for UCSC upload
pub const WIG_TRACK_HEADER: &str = "track type=wiggle_0";

// token written for basepairs without a score
pub const UNDEFINED_SCORE: &str = "nan";
