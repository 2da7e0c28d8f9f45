//! The finished export handed back to the caller.

/// MIME type of the payload.
pub const MIME_TYPE: &str = "text/csv;charset=utf-8";

/// Suggested file name for the saved report.
pub const DEFAULT_FILE_NAME: &str = "canvas_assignment_submissions.csv";

/// UTF-8 byte-order mark; spreadsheet apps use it to detect the encoding.
pub const UTF8_BOM: &str = "\u{feff}";

/// CSV text plus a few counts for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvPayload {
    text: String,
    pub student_rows: usize,
    pub assignment_columns: usize,
}

impl CsvPayload {
    #[must_use]
    pub const fn new(text: String, student_rows: usize, assignment_columns: usize) -> Self {
        Self {
            text,
            student_rows,
            assignment_columns,
        }
    }

    /// CSV text without the byte-order mark.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Bytes to persist: BOM followed by the CSV text.
    #[must_use]
    pub fn bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(UTF8_BOM.len() + self.text.len());
        bytes.extend_from_slice(UTF8_BOM.as_bytes());
        bytes.extend_from_slice(self.text.as_bytes());
        bytes
    }

    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        MIME_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_start_with_bom() {
        let payload = CsvPayload::new("\"a\"".into(), 0, 0);
        assert_eq!(payload.bytes(), b"\xEF\xBB\xBF\"a\"");
        assert_eq!(payload.text(), "\"a\"");
        assert_eq!(payload.mime_type(), "text/csv;charset=utf-8");
    }
}
