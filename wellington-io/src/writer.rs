use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::Path;

use log::debug;
use wellington_core::FootprintRecord;

use crate::bed::BedCallWriter;
use crate::layout::OutputLayout;
use crate::wig::WigWriter;

fn create_buffered(path: &Path) -> io::Result<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        io::Error::new(e.kind(), format!("Failed to create {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

///
/// Owns every output handle of a footprinting run.
///
/// All files are opened once in [ResultWriter::create] and records are appended in the order
/// they are handed over. Dropping the writer closes every handle, so an aborted run never
/// leaves a file open; [ResultWriter::finish] additionally reports flush errors.
///
pub struct ResultWriter {
    wig: WigWriter<BufWriter<File>>,
    fdr: BedCallWriter<BufWriter<File>>,
    cutoffs: Vec<(f64, BedCallWriter<BufWriter<File>>)>,
    intervals: usize,
}

impl ResultWriter {
    ///
    /// Create the `p_value_cutoffs` directory and open the wig file, the FDR bed file and one
    /// bed file per p-value cutoff.
    ///
    pub fn create(layout: &OutputLayout, fdr_cutoff: f64, pv_cutoffs: &[f64]) -> io::Result<Self> {
        fs::create_dir_all(layout.pvalue_dir())?;

        let wig = WigWriter::new(create_buffered(&layout.wig_path())?)?;
        let fdr = BedCallWriter::new(create_buffered(&layout.fdr_path(fdr_cutoff))?);

        let cutoffs = pv_cutoffs
            .iter()
            .map(|&cutoff| {
                let path = layout.pvalue_path(cutoff);
                debug!("Opening p-value cutoff output {}", path.display());
                Ok((cutoff, BedCallWriter::new(create_buffered(&path)?)))
            })
            .collect::<io::Result<Vec<_>>>()?;

        Ok(ResultWriter {
            wig,
            fdr,
            cutoffs,
            intervals: 0,
        })
    }

    ///
    /// Append one interval: its score track, its FDR calls and its calls at every cutoff.
    ///
    pub fn write_record(&mut self, record: &FootprintRecord) -> io::Result<()> {
        if record.cutoff_calls.len() != self.cutoffs.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "Record for {} has calls for {} p-value cutoffs, writer has {}",
                    record.result.interval,
                    record.cutoff_calls.len(),
                    self.cutoffs.len()
                ),
            ));
        }

        self.wig.write_track(&record.result)?;
        self.fdr.write_calls(&record.fdr_calls)?;
        for ((_, writer), calls) in self.cutoffs.iter_mut().zip(&record.cutoff_calls) {
            writer.write_calls(calls)?;
        }

        self.intervals += 1;
        Ok(())
    }

    pub fn intervals_written(&self) -> usize {
        self.intervals
    }

    pub fn fdr_calls_written(&self) -> usize {
        self.fdr.written()
    }

    ///
    /// Calls written per p-value cutoff, in cutoff order.
    ///
    pub fn cutoff_calls_written(&self) -> Vec<(f64, usize)> {
        self.cutoffs
            .iter()
            .map(|(cutoff, writer)| (*cutoff, writer.written()))
            .collect()
    }

    ///
    /// Flush and close every output file.
    ///
    pub fn finish(mut self) -> io::Result<()> {
        self.wig.flush()?;
        self.fdr.flush()?;
        for (_, writer) in self.cutoffs.iter_mut() {
            writer.flush()?;
        }
        Ok(())
    }
}
