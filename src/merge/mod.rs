//! Page accumulation across input documents.

mod merger;

pub use merger::PdfMerger;
