use std::io::{self, BufRead, Write};

use wellington_core::FootprintResult;

use crate::consts::{UNDEFINED_SCORE, WIG_TRACK_HEADER};

///
/// Streams footprint score tracks into a single wiggle file, one `fixedStep` block per
/// interval with one value per basepair.
///
pub struct WigWriter<W: Write> {
    inner: W,
}

impl<W: Write> WigWriter<W> {
    ///
    /// Wrap `inner`, writing the track header line straight away.
    ///
    pub fn new(mut inner: W) -> io::Result<Self> {
        writeln!(inner, "{}", WIG_TRACK_HEADER)?;
        Ok(WigWriter { inner })
    }

    pub fn write_track(&mut self, result: &FootprintResult) -> io::Result<()> {
        writeln!(
            self.inner,
            "fixedStep\tchrom={}\tstart={}\tstep=1",
            result.interval.chr, result.interval.start
        )?;
        for score in &result.scores {
            match score.is_nan() {
                true => writeln!(self.inner, "{}", UNDEFINED_SCORE)?,
                false => writeln!(self.inner, "{}", score)?,
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

///
/// One `fixedStep` block read back from a wiggle file.
///
#[derive(Debug, Clone, PartialEq)]
pub struct WigTrack {
    pub chrom: String,
    pub start: u32,
    pub values: Vec<f64>,
}

///
/// Parse the `fixedStep` blocks of a wiggle file. `track` and `#` lines are skipped.
///
pub fn read_wig_tracks<R: BufRead>(reader: R) -> io::Result<Vec<WigTrack>> {
    let invalid = |msg: String| io::Error::new(io::ErrorKind::InvalidData, msg);

    let mut tracks: Vec<WigTrack> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("track") || trimmed.starts_with('#') {
            continue;
        }

        if trimmed.starts_with("fixedStep") {
            let mut chrom = None;
            let mut start = None;
            for field in trimmed.split_whitespace().skip(1) {
                match field.split_once('=') {
                    Some(("chrom", value)) => chrom = Some(value.to_string()),
                    Some(("start", value)) => {
                        start = Some(value.parse::<u32>().map_err(|_| {
                            invalid(format!("Invalid start in wig header: {}", line))
                        })?)
                    }
                    _ => {}
                }
            }
            match (chrom, start) {
                (Some(chrom), Some(start)) => tracks.push(WigTrack {
                    chrom,
                    start,
                    values: Vec::new(),
                }),
                _ => return Err(invalid(format!("Incomplete wig header: {}", line))),
            }
            continue;
        }

        let value = trimmed
            .parse::<f64>()
            .map_err(|_| invalid(format!("Invalid wig value: {}", line)))?;
        match tracks.last_mut() {
            Some(track) => track.values.push(value),
            None => return Err(invalid("Wig value before any fixedStep header".to_string())),
        }
    }

    Ok(tracks)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use wellington_core::GenomicInterval;

    #[rstest]
    fn test_write_track() {
        let result =
            FootprintResult::new(GenomicInterval::new("chr3", 40, 43), vec![-1.5, 0.0, -20.25])
                .unwrap();

        let mut writer = WigWriter::new(Vec::new()).unwrap();
        writer.write_track(&result).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();

        assert_eq!(
            text,
            "track type=wiggle_0\nfixedStep\tchrom=chr3\tstart=40\tstep=1\n-1.5\n0\n-20.25\n"
        );
    }

    #[rstest]
    fn test_scores_survive_a_round_trip() {
        let scores: Vec<f64> = (0..100).map(|i| -(i as f64) / 7.0).collect();
        let result = FootprintResult::new(GenomicInterval::new("chr1", 1000, 1100), scores.clone())
            .unwrap();

        let mut writer = WigWriter::new(Vec::new()).unwrap();
        writer.write_track(&result).unwrap();
        let bytes = writer.into_inner();

        let tracks = read_wig_tracks(Cursor::new(bytes)).unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].chrom, "chr1");
        assert_eq!(tracks[0].start, 1000);
        assert_eq!(tracks[0].values, scores);
    }

    #[rstest]
    fn test_undefined_scores_are_written_as_nan() {
        let result =
            FootprintResult::new(GenomicInterval::new("chr1", 0, 2), vec![f64::NAN, -3.0]).unwrap();

        let mut writer = WigWriter::new(Vec::new()).unwrap();
        writer.write_track(&result).unwrap();

        let bytes = writer.into_inner();
        assert!(String::from_utf8(bytes.clone()).unwrap().ends_with("step=1\nnan\n-3\n"));

        let tracks = read_wig_tracks(Cursor::new(bytes)).unwrap();
        assert!(tracks[0].values[0].is_nan());
        assert_eq!(tracks[0].values[1], -3.0);
    }

    #[rstest]
    #[case("1.0\n")]
    #[case("fixedStep\tstart=1\tstep=1\n")]
    #[case("fixedStep\tchrom=chr1\tstart=1\tstep=1\nabc\n")]
    fn test_malformed_wig(#[case] text: &str) {
        assert!(read_wig_tracks(Cursor::new(text)).is_err());
    }
}
