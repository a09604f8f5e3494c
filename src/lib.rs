//! Library exports for clipsnap.
//!
//! Exposes the clipboard capture operation and its dependency seams so that
//! host applications (editor extensions, scripts) can embed the capture
//! logic and substitute their own logger or process runner.

pub mod capture;

pub use capture::{CaptureDependencies, CaptureError, CaptureResult, save_clipboard_image};
