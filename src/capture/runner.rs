//! Process-runner seam: spawning the helper script and observing its events.
//!
//! The default implementation drives `tokio::process`; tests swap in a
//! scripted runner through [`CaptureDependencies`](super::CaptureDependencies).

use std::path::Path;
use std::process::Stdio;

use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::sync::{mpsc, oneshot};

use super::types::ScriptEvent;

/// Abstraction over how the helper script is spawned and observed.
pub trait ScriptRunner: Send + Sync {
    /// Spawn `sh <script_path> <image_path>` and return a handle carrying
    /// the event stream and a kill switch. Spawn failures surface as a
    /// [`ScriptEvent::Failed`] on the stream, not as a panic or error here.
    fn spawn(&self, script_path: &Path, image_path: &Path) -> ScriptHandle;
}

/// Handle to one running helper-script invocation. The two halves are
/// separate fields so the caller can wait on events while holding the kill
/// switch.
pub struct ScriptHandle {
    pub events: mpsc::Receiver<ScriptEvent>,
    pub kill: KillSwitch,
}

impl ScriptHandle {
    pub fn new(events: mpsc::Receiver<ScriptEvent>, kill: oneshot::Sender<()>) -> Self {
        Self {
            events,
            kill: KillSwitch { tx: Some(kill) },
        }
    }
}

/// Single-use termination request for the child process. Safe to fire any
/// number of times, including after the process has already exited.
pub struct KillSwitch {
    tx: Option<oneshot::Sender<()>>,
}

impl KillSwitch {
    pub fn fire(&mut self) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Runner backed by `tokio::process::Command`.
pub struct TokioScriptRunner;

impl ScriptRunner for TokioScriptRunner {
    fn spawn(&self, script_path: &Path, image_path: &Path) -> ScriptHandle {
        let (event_tx, event_rx) = mpsc::channel::<ScriptEvent>(16);
        let (kill_tx, kill_rx) = oneshot::channel::<()>();

        let spawned = Command::new("sh")
            .arg(script_path)
            .arg(image_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => {
                // Channel has capacity; this cannot fail on a fresh receiver.
                let _ = event_tx.try_send(ScriptEvent::Failed(e.to_string()));
                return ScriptHandle::new(event_rx, kill_tx);
            }
        };

        let stdout_task = child
            .stdout
            .take()
            .map(|out| tokio::spawn(forward_chunks(out, event_tx.clone(), ScriptEvent::Stdout)));
        let stderr_task = child
            .stderr
            .take()
            .map(|err| tokio::spawn(forward_chunks(err, event_tx.clone(), ScriptEvent::Stderr)));

        tokio::spawn(async move {
            let mut kill_rx = kill_rx;
            tokio::select! {
                status = child.wait() => {
                    // Drain the pipes before announcing the exit so the final
                    // chunks are in the buffers when the session resolves.
                    if let Some(task) = stdout_task {
                        let _ = task.await;
                    }
                    if let Some(task) = stderr_task {
                        let _ = task.await;
                    }
                    let event = match status {
                        Ok(status) => ScriptEvent::Exited(status.code()),
                        Err(e) => ScriptEvent::Failed(format!("wait failed: {e}")),
                    };
                    let _ = event_tx.send(event).await;
                }
                _ = &mut kill_rx => {
                    log::debug!("killing helper script");
                    let _ = child.start_kill();
                    let _ = child.wait().await;
                }
            }
        });

        ScriptHandle::new(event_rx, kill_tx)
    }
}

async fn forward_chunks<R>(
    mut reader: R,
    events: mpsc::Sender<ScriptEvent>,
    wrap: fn(String) -> ScriptEvent,
) where
    R: AsyncReadExt + Unpin,
{
    let mut buf = [0u8; 4096];
    loop {
        match reader.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                let chunk = String::from_utf8_lossy(&buf[..n]).into_owned();
                if events.send(wrap(chunk)).await.is_err() {
                    break;
                }
            }
        }
    }
}
