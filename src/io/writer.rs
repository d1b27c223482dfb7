use std::io::{BufWriter, Write};
use std::path::Path;

use lopdf::Document;

use crate::error::{PdfBindError, Result};

/// Serializes the merged PDF document to a file.
pub struct PdfWriter;

impl PdfWriter {
    /// Write the given PDF [`Document`] to the specified file path.
    ///
    /// Creates the file, overwriting it if it already exists, and
    /// serializes through a buffered writer with an explicit flush.
    /// The containing directory must already exist; it is not created.
    ///
    /// # Errors
    ///
    /// Returns [`PdfBindError::FailedToCreateOutput`] if the file cannot
    /// be created (invalid directory, permission denied) and
    /// [`PdfBindError::FailedToWrite`] if serialization or flushing
    /// fails.
    pub fn write<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        let path = path.as_ref();

        let file =
            std::fs::File::create(path).map_err(|source| PdfBindError::FailedToCreateOutput {
                path: path.to_path_buf(),
                source,
            })?;

        let mut writer = BufWriter::new(file);

        doc.save_to(&mut writer)
            .map_err(|err| PdfBindError::FailedToWrite {
                path: path.to_path_buf(),
                source: std::io::Error::other(err),
            })?;

        writer.flush().map_err(|source| PdfBindError::FailedToWrite {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{Object, dictionary};
    use tempfile::tempdir;

    fn create_test_document() -> Document {
        let mut doc = Document::with_version("1.5");

        let pages_id = doc.new_object_id();
        let page_id = doc.add_object(dictionary! {
            "Type" => Object::Name(b"Page".to_vec()),
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => Object::Array(vec![0.into(), 0.into(), 595.into(), 842.into()]),
        });

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => Object::Name(b"Pages".to_vec()),
                "Kids" => Object::Array(vec![Object::Reference(page_id)]),
                "Count" => Object::Integer(1),
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => Object::Name(b"Catalog".to_vec()),
            "Pages" => Object::Reference(pages_id),
        });
        doc.trailer.set("Root", Object::Reference(catalog_id));

        doc
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.pdf");

        let mut doc = create_test_document();
        PdfWriter::write(&mut doc, &path).unwrap();

        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        std::fs::write(&path, b"stale contents").unwrap();

        let mut doc = create_test_document();
        PdfWriter::write(&mut doc, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.pdf");

        let mut doc = create_test_document();
        let result = PdfWriter::write(&mut doc, &path);

        assert!(matches!(
            result,
            Err(PdfBindError::FailedToCreateOutput { .. })
        ));
    }
}
