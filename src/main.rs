use std::path::PathBuf;
use std::sync::Arc;

use clap::{ArgAction, Parser};

use clipsnap::capture::{CaptureDependencies, logger::DiagnosticLogger, save_clipboard_image};

#[derive(Parser, Debug)]
#[command(name = "clipsnap")]
#[command(version, about = "Save clipboard images to a file on Linux (Wayland)")]
struct Cli {
    /// Destination file for the clipboard image. The helper script may pick
    /// a different extension to match the clipboard's image format.
    image_path: PathBuf,

    /// Suppress script diagnostics on failure
    #[arg(long, short = 'q', action = ArgAction::SetTrue)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if std::env::var("WAYLAND_DISPLAY").is_err() {
        log::warn!("WAYLAND_DISPLAY not set - the helper script relies on wl-paste.");
    }

    let deps = CaptureDependencies::default();
    let result = save_clipboard_image(cli.image_path, Arc::new(DiagnosticLogger), &deps).await?;

    if result.success {
        match result.image_path {
            Some(path) => println!("{}", path.display()),
            None => println!("image written"),
        }
        return Ok(());
    }

    if !cli.quiet {
        for line in &result.script_output {
            eprintln!("{line}");
        }
    }

    if result.no_image_in_clipboard {
        anyhow::bail!("no image in clipboard");
    }
    anyhow::bail!("clipboard capture failed")
}
