//! Error types for pdfbind.
//!
//! Errors carry the path they relate to and, where one exists, the
//! underlying I/O error as their `source()`. Everything besides the
//! empty-folder case propagates to the top level and terminates the run.

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfbind operations.
pub type Result<T> = std::result::Result<T, PdfBindError>;

/// Main error type for pdfbind operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfBindError {
    /// Input folder does not exist.
    #[error("Folder not found: {}", path.display())]
    FolderNotFound {
        /// Path to the folder that was not found.
        path: PathBuf,
    },

    /// Input folder path points at something that is not a directory.
    #[error("Not a directory: {}", path.display())]
    NotADirectory {
        /// Path that is not a directory.
        path: PathBuf,
    },

    /// Input folder exists but cannot be listed.
    #[error("Cannot read folder: {}\n  Reason: {}", path.display(), source)]
    FolderNotReadable {
        /// Path to the unreadable folder.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An input file could not be parsed as a PDF.
    #[error("Failed to load PDF: {}\n  Reason: {}", path.display(), reason)]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// No input files were provided to the merger.
    #[error("No PDF files to merge")]
    NoFilesToMerge,

    /// Output file could not be created.
    #[error("Failed to create output file: {}\n  Reason: {}", path.display(), source)]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Output file could not be written.
    #[error("Failed to write to output file: {}\n  Reason: {}", path.display(), source)]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Structural failure while appending pages to the accumulator.
    #[error("Merge operation failed: {reason}")]
    MergeFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<lopdf::Error> for PdfBindError {
    fn from(err: lopdf::Error) -> Self {
        Self::merge_failed(err.to_string())
    }
}

impl PdfBindError {
    /// Create a FolderNotFound error.
    pub fn folder_not_found(path: PathBuf) -> Self {
        Self::FolderNotFound { path }
    }

    /// Create a NotADirectory error.
    pub fn not_a_directory(path: PathBuf) -> Self {
        Self::NotADirectory { path }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_folder_not_found_display() {
        let err = PdfBindError::folder_not_found(PathBuf::from("/tmp/missing"));
        let msg = format!("{err}");
        assert!(msg.contains("Folder not found"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_failed_to_load_pdf_display() {
        let err = PdfBindError::failed_to_load_pdf(PathBuf::from("bad.pdf"), "Invalid PDF header");
        let msg = format!("{err}");
        assert!(msg.contains("Failed to load PDF"));
        assert!(msg.contains("bad.pdf"));
        assert!(msg.contains("Invalid PDF header"));
    }

    #[test]
    fn test_error_source() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = PdfBindError::FolderNotReadable {
            path: PathBuf::from("/tmp/locked"),
            source: io_err,
        };
        assert!(err.source().is_some());

        let err = PdfBindError::NoFilesToMerge;
        assert!(err.source().is_none());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "not found");
        let err: PdfBindError = io_err.into();
        assert!(matches!(err, PdfBindError::Io(_)));
    }

    #[test]
    fn test_from_lopdf_error() {
        let lopdf_err = lopdf::Document::load_mem(b"not a pdf").unwrap_err();
        let err: PdfBindError = lopdf_err.into();
        assert!(matches!(err, PdfBindError::MergeFailed { .. }));
    }
}
