use lopdf::{Document, Object, ObjectId};
use std::path::PathBuf;

use crate::error::{PdfBindError, Result};
use crate::io::PdfReader;

/// Merges an ordered list of PDF files into a single document.
pub struct PdfMerger;

impl PdfMerger {
    /// Merge the given PDF files, in order, into one document.
    ///
    /// The first document becomes the accumulator; every subsequent
    /// document is opened, its pages appended in their intrinsic order,
    /// and dropped before the next one is opened. A load failure on any
    /// input aborts the whole merge.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, if any file cannot be
    /// loaded as a PDF, or if a structural error occurs while appending
    /// to the page tree.
    pub fn merge(paths: &[PathBuf]) -> Result<Document> {
        let mut iter = paths.iter();

        let Some(first) = iter.next() else {
            return Err(PdfBindError::NoFilesToMerge);
        };

        let mut merged = PdfReader::read(first)?;

        // Single file: the input passes through unchanged.
        if paths.len() == 1 {
            return Ok(merged);
        }

        let mut max_id = merged.max_id;

        for path in iter {
            let mut doc = PdfReader::read(path)?;

            // Avoid object id collisions by renumbering the incoming document
            doc.renumber_objects_with(max_id + 1);
            max_id = doc.max_id;

            let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
            let page_count = page_ids.len();

            merged.objects.extend(doc.objects);

            Self::append_pages_to_page_tree(&mut merged, page_ids, page_count)?;
        }

        // Final cleanup for the merged document
        merged.renumber_objects();
        merged.compress();

        Ok(merged)
    }

    /// Appends the given page references to the accumulator's main Pages
    /// dictionary, extending `Kids` and patching `Count`.
    fn append_pages_to_page_tree(
        merged: &mut Document,
        page_ids: Vec<ObjectId>,
        page_count: usize,
    ) -> Result<()> {
        let pages_id = merged.catalog_mut()?.get(b"Pages")?.as_reference()?;

        let pages_dict = merged.get_object_mut(pages_id)?.as_dict_mut()?;

        let kids_array = pages_dict.get_mut(b"Kids")?.as_array_mut()?;
        for id in page_ids {
            kids_array.push(Object::Reference(id));
        }

        let current_count = pages_dict.get(b"Count")?.as_i64()?;
        pages_dict.set(b"Count", Object::Integer(current_count + page_count as i64));

        Ok(())
    }
}
