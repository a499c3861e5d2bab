//! Wire types for the book-digitization service.

use serde::Deserialize;

/// Error body shape of the service's failure responses (`{"detail": "..."}`).
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Terminal outcome of one upload attempt.
///
/// Every attempt ends in exactly one of these; there is no retry. The
/// user starts over by picking a file again.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadOutcome {
    /// Success response; the parsed JSON body, echoed verbatim to the user.
    Accepted(serde_json::Value),
    /// Non-success HTTP status with the server-provided detail text.
    Rejected { detail: String },
    /// The request never completed.
    Unreachable(String),
}

impl UploadOutcome {
    /// Render this outcome as the upload panel's status line.
    pub fn status_message(&self) -> String {
        match self {
            Self::Accepted(value) => format!("Server response: {value}"),
            Self::Rejected { detail } => format!("Upload failed: {detail}"),
            Self::Unreachable(reason) => format!("Upload error: {reason}"),
        }
    }
}
