//! Input discovery.
//!
//! Lists the given folder (non-recursive), keeps entries whose name ends
//! in `.pdf`, and sorts them by byte-lexicographic filename order. Page
//! ordering therefore relies on the caller's naming convention: without
//! zero-padding, `page_10.pdf` sorts before `page_2.pdf`. That is the
//! documented contract, not something this module corrects.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PdfBindError, Result};

/// Case-sensitive suffix an entry name must end with to be collected.
const PDF_SUFFIX: &[u8] = b".pdf";

/// Collect the ordered list of PDF paths inside `folder`.
///
/// The filter is purely name-based; subdirectories and files with any
/// other suffix (including `.PDF`) are silently excluded. Returned paths
/// are `folder` joined with each matching name.
///
/// An empty result is not an error at this layer; the driver decides
/// what to do with it.
///
/// # Errors
///
/// Returns an error if `folder` does not exist, is not a directory, or
/// cannot be listed.
pub fn collect(folder: &Path) -> Result<Vec<PathBuf>> {
    let exists = folder
        .try_exists()
        .map_err(|source| PdfBindError::FolderNotReadable {
            path: folder.to_path_buf(),
            source,
        })?;

    if !exists {
        return Err(PdfBindError::folder_not_found(folder.to_path_buf()));
    }

    if !folder.is_dir() {
        return Err(PdfBindError::not_a_directory(folder.to_path_buf()));
    }

    let entries = fs::read_dir(folder).map_err(|source| PdfBindError::FolderNotReadable {
        path: folder.to_path_buf(),
        source,
    })?;

    let mut names: Vec<OsString> = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|source| PdfBindError::FolderNotReadable {
            path: folder.to_path_buf(),
            source,
        })?;

        let name = entry.file_name();
        if name.as_encoded_bytes().ends_with(PDF_SUFFIX) {
            names.push(name);
        }
    }

    // OsString ordering compares encoded bytes, which is the
    // case-sensitive lexicographic order the contract requires.
    names.sort();

    Ok(names.into_iter().map(|name| folder.join(name)).collect())
}
