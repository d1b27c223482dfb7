//! PDF file I/O: loading input documents and serializing the output.

mod reader;
mod writer;

pub use reader::PdfReader;
pub use writer::PdfWriter;
