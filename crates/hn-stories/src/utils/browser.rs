//! Browser utilities
//!
//! Functions for opening URLs in the system's default browser.

use std::io;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// Open a URL in the system's default browser
///
/// Uses platform-specific commands:
/// - macOS: `open`
/// - Linux: `xdg-open`
/// - Windows: `cmd /C start`
pub async fn open_url(url: String) {
    log::info!("Opening {} in browser", url);

    #[cfg(target_os = "macos")]
    let result = run_opener("open", &[url.as_str()]).await;

    #[cfg(target_os = "windows")]
    let result = run_opener("cmd", &["/C", "start", url.as_str()]).await;

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let result = run_opener("xdg-open", &[url.as_str()]).await;

    match result {
        Ok(status) if !status.success() => {
            log::warn!("Browser opener for {} exited with {}", url, status);
        }
        Ok(_) => {}
        Err(e) => log::error!("Failed to open URL in browser: {}", e),
    }
}

/// Run the opener and wait for it, so the child is reaped
///
/// Output is discarded; it would otherwise land on the TUI.
async fn run_opener(program: &str, args: &[&str]) -> io::Result<ExitStatus> {
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?
        .wait()
        .await
}
