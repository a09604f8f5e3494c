//! Helper-script location and the pre-spawn existence check.

use std::path::{Path, PathBuf};

use super::logger::CaptureLogger;
use super::types::CaptureError;

/// Where the helper script lives, relative to the installed executable.
/// A fixed location, never a search path.
pub const HELPER_SCRIPT_RELATIVE: &str = "res/linux.sh";

/// Resolves the helper script's location next to the running executable.
pub trait ScriptLocator: Send + Sync {
    fn locate(&self) -> Result<PathBuf, CaptureError>;
}

/// Default locator: `<install dir>/res/linux.sh`.
pub struct InstallDirLocator;

impl ScriptLocator for InstallDirLocator {
    fn locate(&self) -> Result<PathBuf, CaptureError> {
        let exe = std::env::current_exe()?;
        let install_dir = exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(install_dir.join(HELPER_SCRIPT_RELATIVE))
    }
}

/// Confirms the helper script exists before anything is spawned. Absence is
/// the one setup failure the capture call surfaces as an error.
pub(crate) fn ensure_file_exists(
    path: &Path,
    logger: &dyn CaptureLogger,
) -> Result<(), CaptureError> {
    if path.is_file() {
        Ok(())
    } else {
        logger.log(&format!("helper script missing: {}", path.display()));
        Err(CaptureError::ScriptMissing(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::logger::DiagnosticLogger;

    #[test]
    fn ensure_file_exists_accepts_real_files() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(ensure_file_exists(file.path(), &DiagnosticLogger).is_ok());
    }

    #[test]
    fn ensure_file_exists_rejects_missing_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.sh");
        let err = ensure_file_exists(&missing, &DiagnosticLogger).unwrap_err();
        assert!(matches!(err, CaptureError::ScriptMissing(p) if p == missing));

        let err = ensure_file_exists(dir.path(), &DiagnosticLogger).unwrap_err();
        assert!(matches!(err, CaptureError::ScriptMissing(_)));
    }
}
