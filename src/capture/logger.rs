//! Logger capability consumed by the capture operation.

use async_trait::async_trait;

/// Diagnostic sink handed in with each capture request.
///
/// `log` is fire-and-forget; `show_information_message` is awaited and used
/// for the single missing-dependency notice.
#[async_trait]
pub trait CaptureLogger: Send + Sync {
    fn log(&self, line: &str);

    async fn show_information_message(&self, text: &str);
}

/// Default logger backed by the `log` facade. Informational messages also go
/// to stderr so they reach the user when no notification surface exists.
pub struct DiagnosticLogger;

#[async_trait]
impl CaptureLogger for DiagnosticLogger {
    fn log(&self, line: &str) {
        log::info!("{line}");
    }

    async fn show_information_message(&self, text: &str) {
        log::warn!("{text}");
        eprintln!("{text}");
    }
}
