//! CLI argument parsing for pdfbind.

use clap::Parser;
use std::path::PathBuf;

/// Merge a folder of PDF files into a single document.
///
/// pdfbind lists every `.pdf` file directly inside the given folder,
/// sorts them by filename, and concatenates their pages into one
/// output PDF.
#[derive(Parser, Debug)]
#[command(name = "pdfbind")]
#[command(version)]
#[command(about = "Merge a folder of PDF files into a single document", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Path to the folder containing PDF files
    ///
    /// Only files whose name ends in `.pdf` (case-sensitive) are
    /// merged, in lexicographic filename order. Subdirectories are
    /// not descended into.
    #[arg(short, long, value_name = "PATH")]
    pub folder: PathBuf,

    /// Output file path for the merged PDF
    ///
    /// The file is created if missing and overwritten if it already
    /// exists.
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,
}
