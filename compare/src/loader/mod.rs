//! Module for loading embedding documents from files.

use std::path::Path;

use tracing::debug;

use crate::{document::EmbeddingDocument, error::CompareError};

/// Reads `path` and decodes its content as JSON.
///
/// The file is read in one go and its handle released before decoding, so
/// nothing stays open past this call whether it succeeds or not.
///
/// # Returns
/// * `Ok(EmbeddingDocument)` - the decoded document.
/// * `Err(CompareError::Io)` - the file is missing or unreadable.
/// * `Err(CompareError::Parse)` - the content is not valid UTF-8 JSON.
pub fn load_document(path: &Path) -> Result<EmbeddingDocument, CompareError> {
    let bytes = std::fs::read(path).map_err(|source| CompareError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value = serde_json::from_slice(&bytes)
        .map_err(|source| CompareError::parse(path.to_path_buf(), source))?;

    let document = EmbeddingDocument::new(path, value);
    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        shape = %document.shape(),
        "Loaded embedding document"
    );
    Ok(document)
}
