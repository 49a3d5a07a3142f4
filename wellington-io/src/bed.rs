use std::io::{self, Write};

use wellington_core::FootprintCall;

///
/// Appends footprint calls to a BED stream, one line per call.
///
pub struct BedCallWriter<W: Write> {
    inner: W,
    written: usize,
}

impl<W: Write> BedCallWriter<W> {
    pub fn new(inner: W) -> Self {
        BedCallWriter { inner, written: 0 }
    }

    ///
    /// Write calls in the order given.
    ///
    /// # Arguments
    /// - calls: footprint calls of a single interval
    pub fn write_calls(&mut self, calls: &[FootprintCall]) -> io::Result<()> {
        for call in calls {
            writeln!(self.inner, "{}", call.as_bed_line())?;
        }
        self.written += calls.len();
        Ok(())
    }

    /// Number of calls written so far
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_write_calls_appends() {
        let mut writer = BedCallWriter::new(Vec::new());

        writer
            .write_calls(&[FootprintCall::new("chr1", 10, 21, -31.0)])
            .unwrap();
        writer.write_calls(&[]).unwrap();
        writer
            .write_calls(&[
                FootprintCall::new("chr1", 50, 61, -12.5),
                FootprintCall::new("chr2", 5, 16, -100.0),
            ])
            .unwrap();

        assert_eq!(writer.written(), 3);
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            text,
            "chr1\t10\t21\t.\t-31\nchr1\t50\t61\t.\t-12.5\nchr2\t5\t16\t.\t-100\n"
        );
    }
}
