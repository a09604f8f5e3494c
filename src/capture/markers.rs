//! Fixed text markers of the helper-script contract.
//!
//! The helper script communicates through its exit code plus a handful of
//! well-known lines on stdout/stderr. These strings must match the script
//! byte for byte; `IMAGE_WRITTEN_PREFIX` keeps the script's own spelling.

/// Stdout line prefix announcing the path the script actually wrote.
/// The script spells it "writen"; do not correct it here.
pub const IMAGE_WRITTEN_PREFIX: &str = "image writen to:";

/// Emitted when the wl-clipboard tools are not installed.
pub const NO_WL_PASTE: &str = "error: no wl-paste found";

/// Emitted when the clipboard holds no image data.
pub const NO_IMAGE_IN_CLIPBOARD: &str = "warning: no image in clipboard";

/// Synthetic output line used when the script exceeds its time budget.
pub const TIMEOUT_OUTPUT: &str = "error: script timeout";

/// User-facing notice shown when `NO_WL_PASTE` appears in the output.
pub const WL_PASTE_INSTALL_HINT: &str =
    "You need to install \"wl-paste\" (part of the wl-clipboard package) first.";
