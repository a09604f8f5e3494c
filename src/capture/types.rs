//! Data types for clipboard image capture.

use std::path::PathBuf;
use thiserror::Error;

/// Outcome of one capture call.
///
/// Runtime failures are encoded here rather than raised: `success` is the
/// primary discriminator, `no_image_in_clipboard` refines the failure case,
/// and `script_output` carries the helper script's output for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureResult {
    /// Whether an image was written to disk.
    pub success: bool,
    /// Path actually written, present only on success. May differ from the
    /// requested path when the script picked a different extension.
    pub image_path: Option<PathBuf>,
    /// True iff the failure was specifically "clipboard had no image".
    pub no_image_in_clipboard: bool,
    /// Non-empty trimmed output lines from the script, stdout before stderr.
    pub script_output: Vec<String>,
}

impl CaptureResult {
    pub(crate) fn failure(no_image_in_clipboard: bool, script_output: Vec<String>) -> Self {
        Self {
            success: false,
            image_path: None,
            no_image_in_clipboard,
            script_output,
        }
    }
}

/// Setup-time failures that abort a capture before any process is spawned.
///
/// Everything that happens after the spawn attempt is reported through
/// [`CaptureResult`] instead; this enum never covers a runtime failure.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("helper script not found at {0}")]
    ScriptMissing(PathBuf),

    #[error("could not determine the install directory: {0}")]
    InstallDirUnknown(#[from] std::io::Error),
}

/// One event observed from the running helper script.
///
/// Produced by a [`ScriptRunner`](super::runner::ScriptRunner) and folded
/// into the per-call session. Ordering follows real-world arrival.
#[derive(Debug, Clone)]
pub enum ScriptEvent {
    /// A chunk of stdout data (not necessarily whole lines).
    Stdout(String),
    /// A chunk of stderr data.
    Stderr(String),
    /// The process exited; `None` when killed by a signal.
    Exited(Option<i32>),
    /// The process could not be spawned or waited on.
    Failed(String),
}
