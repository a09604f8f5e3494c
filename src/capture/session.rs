//! Per-call session state: output accumulation and exactly-once resolution.
//!
//! A [`Session`] folds [`ScriptEvent`]s (plus the orchestrator's timeout
//! tick) into at most one [`Resolution`]. The `resolved` flag guards the
//! transition: whichever terminal event arrives first wins, and every later
//! event is ignored. All logic here is synchronous and side-effect free so
//! the state machine can be tested without a runtime or a real process.

use std::path::PathBuf;

use super::markers;
use super::types::{CaptureResult, ScriptEvent};

/// The single resolution of a capture session.
#[derive(Debug)]
pub(crate) struct Resolution {
    pub result: CaptureResult,
    /// The combined output mentioned the missing wl-paste tool; the caller
    /// owes the user one informational message.
    pub missing_wl_paste: bool,
}

impl Resolution {
    fn plain_failure(script_output: Vec<String>) -> Self {
        Self {
            result: CaptureResult::failure(false, script_output),
            missing_wl_paste: false,
        }
    }
}

/// Transient state for one in-flight capture call.
pub(crate) struct Session {
    requested_path: PathBuf,
    stdout: String,
    stderr: String,
    resolved: bool,
}

impl Session {
    pub fn new(requested_path: PathBuf) -> Self {
        Self {
            requested_path,
            stdout: String::new(),
            stderr: String::new(),
            resolved: false,
        }
    }

    /// Folds one script event into the session. Returns `Some` exactly once,
    /// on the first terminal event; data events and post-resolution events
    /// return `None`.
    pub fn handle_event(&mut self, event: ScriptEvent) -> Option<Resolution> {
        match event {
            ScriptEvent::Stdout(chunk) => {
                self.stdout.push_str(&chunk);
                None
            }
            ScriptEvent::Stderr(chunk) => {
                self.stderr.push_str(&chunk);
                None
            }
            ScriptEvent::Exited(code) => {
                if self.resolved {
                    return None;
                }
                self.resolved = true;
                Some(self.resolve_exit(code))
            }
            ScriptEvent::Failed(message) => {
                if self.resolved {
                    return None;
                }
                self.resolved = true;
                Some(Resolution::plain_failure(vec![format!("error: {message}")]))
            }
        }
    }

    /// The timeout tick. Terminal like `Exited`/`Failed`, guarded the same way.
    pub fn handle_timeout(&mut self) -> Option<Resolution> {
        if self.resolved {
            return None;
        }
        self.resolved = true;
        Some(Resolution::plain_failure(vec![
            markers::TIMEOUT_OUTPUT.to_string(),
        ]))
    }

    fn resolve_exit(&self, code: Option<i32>) -> Resolution {
        if code == Some(0) {
            let lines = non_empty_lines(&self.stdout);
            let image_path = lines
                .iter()
                .find_map(|line| line.strip_prefix(markers::IMAGE_WRITTEN_PREFIX))
                .map(|rest| PathBuf::from(rest.trim()))
                .unwrap_or_else(|| self.requested_path.clone());

            Resolution {
                result: CaptureResult {
                    success: true,
                    image_path: Some(image_path),
                    no_image_in_clipboard: false,
                    script_output: lines,
                },
                missing_wl_paste: false,
            }
        } else {
            // Substring checks run over the raw combined buffers; the line
            // list keeps stdout before stderr, not arrival order.
            let combined = format!("{}{}", self.stdout, self.stderr);
            let mut script_output = non_empty_lines(&self.stdout);
            script_output.extend(non_empty_lines(&self.stderr));

            Resolution {
                result: CaptureResult::failure(
                    combined.contains(markers::NO_IMAGE_IN_CLIPBOARD),
                    script_output,
                ),
                missing_wl_paste: combined.contains(markers::NO_WL_PASTE),
            }
        }
    }
}

/// Splits accumulated output into trimmed lines, dropping empty ones.
fn non_empty_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
