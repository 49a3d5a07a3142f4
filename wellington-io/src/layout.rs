use std::fs;
use std::path::{Path, PathBuf};

use wellington_core::WellingtonError;
use wellington_core::utils::file_basename;

use crate::consts::*;

///
/// Where every output file of a footprinting run lives.
///
/// ```text
/// <dir>/<prefix>.WellingtonFootprints.wig
/// <dir>/<prefix>.WellingtonFootprints.FDR.<fdr_cutoff>.bed
/// <dir>/p_value_cutoffs/<prefix>.WellingtonFootprints.<cutoff>.bed
/// ```
///
/// Cutoffs are formatted by [cutoff_label].
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub dir: PathBuf,
    pub prefix: String,
}

impl OutputLayout {
    pub fn new<P: AsRef<Path>>(dir: P, prefix: &str) -> Self {
        OutputLayout {
            dir: dir.as_ref().to_path_buf(),
            prefix: prefix.to_string(),
        }
    }

    pub fn wig_path(&self) -> PathBuf {
        self.dir
            .join(format!("{}.{}.{}", self.prefix, FOOTPRINT_TAG, WIG_EXT))
    }

    pub fn fdr_path(&self, fdr_cutoff: f64) -> PathBuf {
        self.dir.join(format!(
            "{}.{}.{}.{}.{}",
            self.prefix,
            FOOTPRINT_TAG,
            FDR_TAG,
            cutoff_label(fdr_cutoff),
            BED_EXT
        ))
    }

    pub fn pvalue_dir(&self) -> PathBuf {
        self.dir.join(PVALUE_CUTOFF_DIR)
    }

    pub fn pvalue_path(&self, cutoff: f64) -> PathBuf {
        self.pvalue_dir().join(format!(
            "{}.{}.{}.{}",
            self.prefix,
            FOOTPRINT_TAG,
            cutoff_label(cutoff),
            BED_EXT
        ))
    }
}

///
/// Cutoff as it appears in a file name: plain decimal notation, switching to `1e-05` style
/// scientific notation (signed, at least two exponent digits) when the decimal exponent is below
/// -4 or at least 16. Integral cutoffs have no fractional part, so `-10.0` gives `-10`.
///
pub fn cutoff_label(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }

    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    match (-4..16).contains(&exponent) {
        true => value.to_string(),
        false => format!(
            "{}e{}{:02}",
            mantissa,
            if exponent < 0 { '-' } else { '+' },
            exponent.abs()
        ),
    }
}

///
/// Default output prefix: `<reads file name>.<regions file name>`.
///
pub fn default_prefix(reads: &Path, regions: &Path) -> String {
    format!("{}.{}", file_basename(reads), file_basename(regions))
}

///
/// Check that `dir` exists and holds nothing but hidden entries (names starting with `.`).
///
pub fn ensure_empty_dir(dir: &Path) -> Result<(), WellingtonError> {
    if !dir.is_dir() {
        return Err(WellingtonError::OutputDirMissing(dir.to_path_buf()));
    }

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_name().to_string_lossy().starts_with('.') {
            return Err(WellingtonError::OutputDirNotEmpty(dir.to_path_buf()));
        }
    }

    Ok(())
}
