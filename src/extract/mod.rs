//! Text extraction from files
//!
//! Plain text and markdown are read as UTF-8; PDF support is behind the
//! optional `pdf` cargo feature. Anything else is rejected up front.

use crate::error::{Error, Result};
use std::path::Path;
use tracing::debug;

/// File extensions always accepted as plain text
const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "markdown", "text"];

/// Check whether a file can be extracted
pub fn is_supported(path: &Path) -> bool {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        Some(ext) if TEXT_EXTENSIONS.contains(&ext) => true,
        #[cfg(feature = "pdf")]
        Some("pdf") => true,
        Some(_) => mime_guess::from_path(path)
            .first()
            .map(|m| m.type_() == mime_guess::mime::TEXT)
            .unwrap_or(false),
        // No extension: treat as plain text only if the guesser agrees
        None => false,
    }
}

/// Extract text content from a file
pub fn extract_text(path: &Path) -> Result<String> {
    if !is_supported(path) {
        let name = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("file without extension");
        return Err(Error::UnsupportedFormat(format!(
            "{} (accepted: text, markdown{})",
            name,
            if cfg!(feature = "pdf") { ", pdf" } else { "" }
        )));
    }

    #[cfg(feature = "pdf")]
    if path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
    {
        debug!("Extracting PDF text from {:?}", path);
        return pdf_extract::extract_text(path)
            .map_err(|e| Error::UnsupportedFormat(format!("pdf extraction failed: {}", e)));
    }

    debug!("Reading text file {:?}", path);
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
