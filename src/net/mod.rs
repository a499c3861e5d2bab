//! Network layer: the upload call and its outcome model.

pub mod api;
pub mod types;
