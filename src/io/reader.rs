use std::path::Path;

use lopdf::Document;

use crate::error::{PdfBindError, Result};

/// Loads input PDF documents.
pub struct PdfReader;

impl PdfReader {
    /// Load a single PDF document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`PdfBindError::FailedToLoadPdf`] if the file is missing,
    /// unreadable, or not a valid PDF. This error is fatal to the run.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Document> {
        let path = path.as_ref();
        Document::load(path).map_err(|err| PdfBindError::FailedToLoadPdf {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempdir().unwrap();
        let result = PdfReader::read(dir.path().join("absent.pdf"));
        assert!(matches!(result, Err(PdfBindError::FailedToLoadPdf { .. })));
    }

    #[test]
    fn test_read_non_pdf_content_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.pdf");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"this is not a pdf").unwrap();

        let result = PdfReader::read(&path);

        assert!(matches!(result, Err(PdfBindError::FailedToLoadPdf { .. })));
    }
}
