//! pdfbind - Merge a folder of PDF files into a single document.
//!
//! pdfbind lists every `.pdf` file directly inside a folder, sorts them
//! by case-sensitive lexicographic filename order, and concatenates
//! their pages into one output PDF. Page ordering therefore depends on
//! the folder's naming convention: zero-padded numeric suffixes sort
//! correctly, unpadded ones do not (`page_10.pdf` comes before
//! `page_2.pdf`).
//!
//! # Examples
//!
//! ```no_run
//! use pdfbind::cli::Cli;
//! use std::path::PathBuf;
//!
//! # fn example() -> pdfbind::Result<()> {
//! let cli = Cli {
//!     folder: PathBuf::from("scans"),
//!     output: PathBuf::from("book.pdf"),
//! };
//! pdfbind::run(&cli)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod collector;
pub mod error;
pub mod io;
pub mod merge;

pub use error::{PdfBindError, Result};

use crate::cli::Cli;
use crate::io::PdfWriter;
use crate::merge::PdfMerger;

/// Run the whole pipeline: collect, merge, write.
///
/// An empty folder is a clean no-op: a notice is printed, no output file
/// is created, and `Ok(())` is returned. Every other failure propagates.
///
/// # Errors
///
/// Returns an error if the folder cannot be listed, any input fails to
/// load as a PDF, or the output cannot be written.
pub fn run(cli: &Cli) -> Result<()> {
    let inputs = collector::collect(&cli.folder)?;

    if inputs.is_empty() {
        println!("No PDF files found in the specified folder.");
        return Ok(());
    }

    println!("Merging {} PDF files...", inputs.len());

    let mut merged = PdfMerger::merge(&inputs)?;

    PdfWriter::write(&mut merged, &cli.output)?;
    println!("Merged PDF saved to: {}", cli.output.display());

    Ok(())
}
