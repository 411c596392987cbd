use crate::errors::ExportError;
use std::io::{BufWriter, Write};

/// Emitted before any line so spreadsheet tools detect UTF-8.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Streaming delimited-text encoder: a byte-order mark, one header line,
/// then one line per row, each quoted per delimited-text rules (fields
/// containing the separator, a double quote, or a line break are wrapped in
/// double quotes with internal quotes doubled).
///
/// Rows are written in the order given; the encoder never buffers the whole
/// table. Any sink write failure aborts the encode and surfaces unchanged.
pub struct TableEncoder<W: Write> {
    w: csv::Writer<BufWriter<W>>,
}

impl<W: Write> TableEncoder<W> {
    /// Wraps `inner` and emits the BOM immediately.
    ///
    /// # Errors
    /// `InvalidSeparator` if `separator` is not ASCII (a wider char would
    /// land as a raw byte inside UTF-8 output); otherwise any I/O error from
    /// writing the BOM.
    pub fn new(inner: W, separator: char) -> Result<Self, ExportError> {
        if !separator.is_ascii() {
            return Err(ExportError::InvalidSeparator(separator));
        }
        let delimiter = separator as u8;
        let mut buf = BufWriter::new(inner);
        buf.write_all(UTF8_BOM)?;
        let w = csv::WriterBuilder::new().delimiter(delimiter).from_writer(buf);
        Ok(Self { w })
    }

    /// # Errors
    /// Any sink write failure, propagated unchanged.
    pub fn write_header(&mut self, header: &[String]) -> Result<(), ExportError> {
        self.w.write_record(header)?;
        Ok(())
    }

    /// # Errors
    /// Any sink write failure, propagated unchanged.
    pub fn write_row(&mut self, row: &[String]) -> Result<(), ExportError> {
        self.w.write_record(row)?;
        Ok(())
    }

    /// Flushes buffered output through to the destination.
    ///
    /// # Errors
    /// Any sink write or flush failure.
    pub fn finish(mut self) -> Result<(), ExportError> {
        self.w.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(header: &[&str], rows: &[&[&str]], sep: char) -> Vec<u8> {
        let mut out = Vec::new();
        let mut enc = TableEncoder::new(&mut out, sep).unwrap();
        enc.write_header(&header.iter().map(|s| (*s).to_string()).collect::<Vec<_>>()).unwrap();
        for row in rows {
            enc.write_row(&row.iter().map(|s| (*s).to_string()).collect::<Vec<_>>()).unwrap();
        }
        enc.finish().unwrap();
        out
    }

    #[test]
    fn bom_then_lines() {
        let out = encode(&["A", "B"], &[&["1", "2"]], ',');
        assert_eq!(&out[..3], b"\xEF\xBB\xBF");
        assert_eq!(&out[3..], b"A,B\n1,2\n");
    }

    #[test]
    fn quoting_rules() {
        let out = encode(&["A", "B"], &[&["1,2", "x\"y"]], ',');
        let text = String::from_utf8(out[3..].to_vec()).unwrap();
        assert_eq!(text, "A,B\n\"1,2\",\"x\"\"y\"\n");
    }

    #[test]
    fn non_ascii_separator_rejected() {
        // Both a Latin-1 char (fits in one byte but is not valid UTF-8 on
        // its own) and a wider char must be refused.
        for sep in ['é', '€'] {
            let mut out = Vec::new();
            let err = TableEncoder::new(&mut out, sep).map(|_| ()).unwrap_err();
            assert!(matches!(err, ExportError::InvalidSeparator(s) if s == sep));
            assert!(out.is_empty());
        }
    }
}
