//! Clipboard image capture via an external helper script.
//!
//! One operation, [`save_clipboard_image`]: verify the helper script exists,
//! spawn it with the target path, and translate whichever terminal event
//! arrives first (exit, spawn error, timeout) into a single
//! [`CaptureResult`]. The script is an opaque collaborator; this module only
//! owns the process lifecycle and the output parsing.

pub mod logger;
pub mod markers;
pub mod runner;
pub mod script;
pub mod types;

mod session;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use logger::CaptureLogger;
use runner::{ScriptRunner, TokioScriptRunner};
use script::{InstallDirLocator, ScriptLocator};
use session::Session;
use types::ScriptEvent;

pub use types::{CaptureError, CaptureResult};

/// Time budget for one helper-script run.
pub const SCRIPT_TIMEOUT: Duration = Duration::from_secs(10);

/// Bundle of dependencies used by a capture call. Each seam can be swapped
/// out in tests.
#[derive(Clone)]
pub struct CaptureDependencies {
    pub runner: Arc<dyn ScriptRunner>,
    pub locator: Arc<dyn ScriptLocator>,
    pub script_timeout: Duration,
}

impl Default for CaptureDependencies {
    fn default() -> Self {
        Self {
            runner: Arc::new(TokioScriptRunner),
            locator: Arc::new(InstallDirLocator),
            script_timeout: SCRIPT_TIMEOUT,
        }
    }
}

/// Captures the clipboard image into a file at `image_path`.
///
/// Returns `Err` only for setup failures (helper script missing or
/// unlocatable) detected before any process is spawned. Every runtime
/// outcome, including spawn failure and timeout, is reported through the
/// returned [`CaptureResult`]. Exactly one result is produced per call no
/// matter how many process events fire.
pub async fn save_clipboard_image(
    image_path: impl Into<PathBuf>,
    logger: Arc<dyn CaptureLogger>,
    deps: &CaptureDependencies,
) -> Result<CaptureResult, CaptureError> {
    let image_path = image_path.into();

    let script_path = deps.locator.locate()?;
    script::ensure_file_exists(&script_path, logger.as_ref())?;

    log::debug!(
        "running helper script {} for {}",
        script_path.display(),
        image_path.display()
    );

    let runner::ScriptHandle {
        mut events,
        mut kill,
    } = deps.runner.spawn(&script_path, &image_path);
    let mut session = Session::new(image_path);

    let timeout = tokio::time::sleep(deps.script_timeout);
    tokio::pin!(timeout);
    let mut timed_out = false;

    let resolution = loop {
        tokio::select! {
            () = &mut timeout, if !timed_out => {
                timed_out = true;
                logger.log("helper script timeout, killing process");
                kill.fire();
                if let Some(resolution) = session.handle_timeout() {
                    break resolution;
                }
            }
            event = events.recv() => {
                let event = event.unwrap_or_else(|| {
                    ScriptEvent::Failed("script event stream closed unexpectedly".into())
                });
                match &event {
                    ScriptEvent::Stderr(chunk) => {
                        logger.log(&format!("helper script stderr: {}", chunk.trim_end()));
                    }
                    ScriptEvent::Exited(code) => {
                        logger.log(&format!("helper script exited with code {code:?}"));
                    }
                    ScriptEvent::Failed(message) => {
                        logger.log(&format!("helper script error: {message}"));
                    }
                    ScriptEvent::Stdout(_) => {}
                }
                if let Some(resolution) = session.handle_event(event) {
                    break resolution;
                }
            }
        }
    };

    // Idempotent teardown: a no-op when the timeout path already fired the
    // kill switch or the process exited on its own.
    kill.fire();

    if resolution.missing_wl_paste {
        logger
            .show_information_message(markers::WL_PASTE_INSTALL_HINT)
            .await;
    }

    Ok(resolution.result)
}
