pub mod footprint;
pub mod interval;
pub mod interval_set;
pub mod size_range;

// re-export for cleaner imports
pub use self::footprint::{FootprintCall, FootprintRecord, FootprintResult};
pub use self::interval::GenomicInterval;
pub use self::interval_set::IntervalSet;
pub use self::size_range::SizeRange;
