use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::WellingtonError;

///
/// A range of window sizes given as `from,to,step`, e.g. `11,26,2` for footprints of
/// 11, 13, ..., 25 bp. `to` is exclusive. The range is never empty and every size is positive.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeRange {
    pub from: i64,
    pub to: i64,
    pub step: i64,
    sizes: Vec<u32>,
}

impl SizeRange {
    pub fn sizes(&self) -> &[u32] {
        &self.sizes
    }

    pub fn min(&self) -> u32 {
        self.sizes.iter().copied().min().unwrap_or(0)
    }

    pub fn max(&self) -> u32 {
        self.sizes.iter().copied().max().unwrap_or(0)
    }
}

impl FromStr for SizeRange {
    type Err = WellingtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || WellingtonError::InvalidSizeRange(s.to_string());

        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<i64>())
            .collect::<Result<Vec<i64>, _>>()
            .map_err(|_| invalid())?;

        let [from, to, step] = parts[..] else {
            return Err(invalid());
        };
        if step == 0 {
            return Err(invalid());
        }

        let mut sizes = Vec::new();
        let mut current = from;
        while (step > 0 && current < to) || (step < 0 && current > to) {
            let size = u32::try_from(current).map_err(|_| invalid())?;
            if size == 0 {
                return Err(invalid());
            }
            sizes.push(size);
            current += step;
        }

        if sizes.is_empty() {
            return Err(invalid());
        }

        Ok(SizeRange {
            from,
            to,
            step,
            sizes,
        })
    }
}

impl Display for SizeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.from, self.to, self.step)
    }
}
