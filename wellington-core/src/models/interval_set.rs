use anyhow::Result;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::errors::WellingtonError;
use crate::models::GenomicInterval;
use crate::utils::get_dynamic_reader;

///
/// IntervalSet struct, the representation of the region file to footprint, such as a bed file
/// of DNase hypersensitive sites.
///
#[derive(Clone, Debug)]
pub struct IntervalSet {
    pub intervals: Vec<GenomicInterval>,
}

fn parse_coordinate(value: Option<&&str>, what: &str, parts: &[&str]) -> Result<u32> {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .ok_or_else(|| {
            WellingtonError::RegionParseError(format!(
                "Error in parsing {} position: {:?}",
                what, parts
            ))
            .into()
        })
}

impl TryFrom<&Path> for IntervalSet {
    type Error = anyhow::Error;

    ///
    /// Create a new [IntervalSet] from a bed file.
    ///
    /// # Arguments:
    /// - value: path to bed file on disk (optionally gzipped).
    fn try_from(value: &Path) -> Result<Self> {
        let path = value;

        if !path.is_file() {
            return Err(WellingtonError::FileReadError(path.display().to_string()).into());
        }
        let reader = get_dynamic_reader(path)?;

        let mut intervals: Vec<GenomicInterval> = Vec::new();
        let mut first_line: bool = true;

        for line in reader.lines() {
            let string_line = line?;

            if string_line.trim().is_empty() {
                continue;
            }

            if string_line.starts_with("browser")
                | string_line.starts_with("track")
                | string_line.starts_with('#')
            {
                first_line = false;
                continue;
            }

            let parts: Vec<&str> = string_line.split('\t').collect();

            // Handling column headers like `chr start end etc` without #
            if first_line {
                first_line = false;
                if parts.len() >= 3 && parts[1].parse::<u32>().is_err() {
                    continue;
                }
            }

            let start = parse_coordinate(parts.get(1), "start", &parts)?;
            let end = parse_coordinate(parts.get(2), "end", &parts)?;
            if end < start {
                return Err(WellingtonError::RegionParseError(format!(
                    "End position before start position: {:?}",
                    parts
                ))
                .into());
            }

            intervals.push(GenomicInterval {
                chr: parts[0].to_owned(),
                start,
                end,
                rest: Some(parts[3..].join("\t")).filter(|s| !s.is_empty()),
            });
        }

        if intervals.is_empty() {
            return Err(WellingtonError::EmptyIntervalSet(path.display().to_string()).into());
        }

        Ok(IntervalSet { intervals })
    }
}

impl TryFrom<&str> for IntervalSet {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        IntervalSet::try_from(Path::new(value))
    }
}

impl TryFrom<PathBuf> for IntervalSet {
    type Error = anyhow::Error;

    fn try_from(value: PathBuf) -> Result<Self> {
        IntervalSet::try_from(value.as_path())
    }
}

impl From<Vec<GenomicInterval>> for IntervalSet {
    fn from(intervals: Vec<GenomicInterval>) -> Self {
        IntervalSet { intervals }
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a GenomicInterval;
    type IntoIter = std::slice::Iter<'a, GenomicInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl IntervalSet {
    ///
    /// Intervals in chromosome, basepair order: chromosomes sorted by name, intervals within a
    /// chromosome by start position. Intervals with equal keys keep their file order.
    ///
    pub fn ordered(&self) -> Vec<GenomicInterval> {
        let mut ordered = self.intervals.clone();
        ordered.sort_by(|a, b| a.chr.cmp(&b.chr).then(a.start.cmp(&b.start)));
        ordered
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}
