use std::cmp::Ordering;
use std::fmt::{self, Display};

///
/// GenomicInterval struct, one region of a region file that should be footprinted.
///
/// Coordinates are zero-based and half-open, `[start, end)`, exactly as they appear in the BED
/// file. Any columns past the third are kept verbatim in `rest`.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct GenomicInterval {
    pub chr: String,
    pub start: u32,
    pub end: u32,

    pub rest: Option<String>,
}

impl GenomicInterval {
    pub fn new(chr: &str, start: u32, end: u32) -> Self {
        GenomicInterval {
            chr: chr.to_string(),
            start,
            end,
            rest: None,
        }
    }

    ///
    /// Number of basepairs covered by the interval
    ///
    pub fn width(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    ///
    /// Name column (4th BED column) if the region file had one
    ///
    pub fn name(&self) -> Option<&str> {
        self.rest
            .as_deref()
            .and_then(|rest| rest.split('\t').next())
            .filter(|name| !name.is_empty())
    }

    ///
    /// Get file string of the interval
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}{}",
            self.chr,
            self.start,
            self.end,
            self.rest
                .as_deref()
                .map_or(String::new(), |s| format!("\t{}", s)),
        )
    }
}

// chromosome first, then start, then end
impl Ord for GenomicInterval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.chr
            .cmp(&other.chr)
            .then(self.start.cmp(&other.start))
            .then(self.end.cmp(&other.end))
            .then_with(|| self.rest.cmp(&other.rest))
    }
}

impl PartialOrd for GenomicInterval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for GenomicInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_width_and_string() {
        let interval = GenomicInterval {
            chr: "chr1".to_string(),
            start: 100,
            end: 250,
            rest: Some("peak1\t0\t+".to_string()),
        };

        assert_eq!(interval.width(), 150);
        assert_eq!(interval.as_string(), "chr1\t100\t250\tpeak1\t0\t+");
        assert_eq!(interval.name(), Some("peak1"));
    }

    #[rstest]
    fn test_no_name() {
        let interval = GenomicInterval::new("chr2", 5, 10);
        assert_eq!(interval.name(), None);
        assert_eq!(format!("{}", interval), "chr2\t5\t10");
    }

    #[rstest]
    fn test_ordering_is_chromosome_then_start() {
        let mut intervals = vec![
            GenomicInterval::new("chr2", 10, 20),
            GenomicInterval::new("chr1", 500, 600),
            GenomicInterval::new("chr1", 100, 200),
        ];
        intervals.sort();

        let starts: Vec<(&str, u32)> = intervals.iter().map(|i| (i.chr.as_str(), i.start)).collect();
        assert_eq!(starts, vec![("chr1", 100), ("chr1", 500), ("chr2", 10)]);
    }
}
