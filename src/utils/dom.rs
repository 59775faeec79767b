//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{
    Blob, BlobPropertyBag, DataTransfer, Document, File, FileList, HtmlAnchorElement,
    HtmlInputElement, Url, Window,
};

use crate::core::error::DomError;
use crate::models::SelectedFile;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document, failing if either the window or document is missing.
pub fn document() -> Result<Document, DomError> {
    window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

// =============================================================================
// File Inputs
// =============================================================================

/// Reads a native `FileList` into selected files, keeping browser order.
pub fn selected_files(list: Option<FileList>) -> Vec<SelectedFile<File>> {
    let Some(list) = list else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| SelectedFile {
            name: file.name(),
            size_bytes: file.size() as u64,
            media_type: file.type_(),
            handle: file,
        })
        .collect()
}

/// Rebuilds a file input's contents from the given files.
///
/// The input is a mirror of the owning set; it is replaced wholesale rather
/// than edited, so its order always matches the set.
pub fn materialize_files(
    input: &HtmlInputElement,
    files: &[SelectedFile<File>],
) -> Result<(), DomError> {
    let transfer = DataTransfer::new().map_err(|_| DomError::FileInput)?;
    let items = transfer.items();
    for file in files {
        items
            .add_with_file(&file.handle)
            .map_err(|_| DomError::FileInput)?;
    }
    input.set_files(transfer.files().as_ref());
    Ok(())
}

// =============================================================================
// Downloads
// =============================================================================

/// A blob object URL, revoked when dropped.
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn new(blob: &Blob) -> Result<Self, DomError> {
        Url::create_object_url_with_blob(blob)
            .map(Self)
            .map_err(|_| DomError::ObjectUrl)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.0);
    }
}

/// Wraps downloaded bytes in a blob with the response's content type.
pub fn bytes_to_blob(bytes: &[u8], content_type: Option<&str>) -> Result<Blob, DomError> {
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    if let Some(content_type) = content_type {
        options.set_type(content_type);
    }
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| DomError::BlobCreation)
}

/// Saves a blob under `filename` through a momentary hidden anchor.
///
/// The anchor is removed right after the click and the object URL is
/// revoked when this function returns, on success or error.
pub fn trigger_download(blob: &Blob, filename: &str) -> Result<(), DomError> {
    let document = document()?;
    let body = document.body().ok_or(DomError::NoDocument)?;
    let url = ObjectUrl::new(blob)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| DomError::CreateElement("a".to_string()))?
        .dyn_into()
        .map_err(|_| DomError::CreateElement("a".to_string()))?;
    anchor.set_href(url.as_str());
    anchor.set_download(filename);
    anchor.set_hidden(true);

    body.append_child(&anchor)
        .map_err(|_| DomError::CreateElement("a".to_string()))?;
    anchor.click();
    anchor.remove();

    drop(url);
    Ok(())
}
