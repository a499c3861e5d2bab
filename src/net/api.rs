//! REST API helper for communicating with the digitization service.
//!
//! Browser (`csr`): the real multipart POST via `gloo-net`. With the
//! feature off the crate compiles natively for tests, so only the pure
//! response-to-outcome mapping lives outside the gate.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here panics. Browser and HTTP fallibility is absorbed into
//! `UploadOutcome` so the panel always has a status line to show.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::{ErrorBody, UploadOutcome};

/// Fixed upload endpoint of the local digitization service.
pub const SEND_BOOK_URL: &str = "http://localhost:8000/api/send-book";

/// Multipart field name the service expects the PDF under.
pub const FILE_FIELD: &str = "file";

/// Map an HTTP response to an upload outcome.
///
/// A success body is carried as parsed JSON so the UI can echo it
/// verbatim; a non-JSON success body is carried as a JSON string. Error
/// bodies use the service's `{"detail": ...}` shape, falling back to the
/// raw text, or to the status code when the body is empty.
pub fn outcome_for(ok: bool, status: u16, body: &str) -> UploadOutcome {
    if ok {
        let value = serde_json::from_str::<serde_json::Value>(body)
            .unwrap_or_else(|_| serde_json::Value::String(body.to_owned()));
        return UploadOutcome::Accepted(value);
    }

    let detail = serde_json::from_str::<ErrorBody>(body).map_or_else(
        |_| {
            if body.trim().is_empty() {
                format!("HTTP {status}")
            } else {
                body.trim().to_owned()
            }
        },
        |e| e.detail,
    );
    UploadOutcome::Rejected { detail }
}

/// Upload a chosen PDF to the service as a multipart form.
///
/// Exactly one request per call; no retry, timeout, or cancellation.
/// The content type header is left unset so the browser owns the
/// multipart boundary.
#[cfg(feature = "csr")]
pub async fn send_book(file: web_sys::File) -> UploadOutcome {
    let Ok(form) = web_sys::FormData::new() else {
        return UploadOutcome::Unreachable("could not build form data".to_owned());
    };
    if form.append_with_blob(FILE_FIELD, &file).is_err() {
        return UploadOutcome::Unreachable("could not attach file".to_owned());
    }

    log::info!("uploading {} to {SEND_BOOK_URL}", file.name());

    let request = match gloo_net::http::Request::post(SEND_BOOK_URL).body(form) {
        Ok(request) => request,
        Err(e) => return UploadOutcome::Unreachable(e.to_string()),
    };

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("upload request failed: {e}");
            return UploadOutcome::Unreachable(e.to_string());
        }
    };

    let ok = response.ok();
    let status = response.status();
    match response.text().await {
        Ok(body) => outcome_for(ok, status, &body),
        Err(e) => UploadOutcome::Unreachable(e.to_string()),
    }
}
