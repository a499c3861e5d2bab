#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Media type a selection must declare to be uploaded.
pub const SUPPORTED_MEDIA_TYPE: &str = "application/pdf";

/// Fixed status line for a selection with any other declared type.
/// No request is made for such a selection.
pub const UNSUPPORTED_TYPE_MESSAGE: &str = "Unsupported file type. Please select a PDF.";

/// Status state for the upload panel.
///
/// A single line reflecting the latest event: selection confirmation,
/// validation error, or the finished request's outcome. Overwritten
/// wholesale on every event; no history is kept.
#[derive(Clone, Debug, Default)]
pub struct UploadState {
    pub message: String,
}

/// True iff the declared media type is exactly the supported one.
pub fn is_supported_media_type(media_type: &str) -> bool {
    media_type == SUPPORTED_MEDIA_TYPE
}

/// Confirmation line written right after a valid selection is dispatched.
pub fn selected_message(name: &str) -> String {
    format!("File selected: {name}")
}
