use crate::domain::ports::ClipboardProvider;
use crate::utils::error::{LookupError, Result};
use std::process::Command;

/// Reads the system clipboard through the platform's paste helper.
/// - macOS: pbpaste
/// - Linux: wl-paste, then xclip, then xsel
/// - Windows: PowerShell Get-Clipboard
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardProvider for SystemClipboard {
    fn read_text(&self) -> Result<String> {
        #[cfg(target_os = "macos")]
        {
            paste_with(&[("pbpaste", &[])])
        }

        #[cfg(target_os = "linux")]
        {
            paste_with(&[
                ("wl-paste", &["--no-newline"]),
                ("xclip", &["-selection", "clipboard", "-o"]),
                ("xsel", &["--clipboard", "--output"]),
            ])
        }

        #[cfg(target_os = "windows")]
        {
            paste_with(&[("powershell", &["-NoProfile", "-Command", "Get-Clipboard"])])
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            Err(LookupError::ClipboardError {
                message: "Clipboard not supported on this platform".to_string(),
            })
        }
    }
}

/// Runs each helper in turn and returns the first successful output.
fn paste_with(helpers: &[(&str, &[&str])]) -> Result<String> {
    let mut failures = Vec::new();

    for (program, args) in helpers {
        match Command::new(program).args(*args).output() {
            Ok(output) if output.status.success() => {
                tracing::debug!("Read clipboard with {}", program);
                return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
            }
            Ok(output) => failures.push(format!("{} exited with {}", program, output.status)),
            Err(e) => failures.push(format!("{}: {}", program, e)),
        }
    }

    Err(LookupError::ClipboardError {
        message: failures.join("; "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paste_with_reports_every_failed_helper() {
        let err = paste_with(&[
            ("order-lookup-missing-helper-a", &[]),
            ("order-lookup-missing-helper-b", &["-o"]),
        ])
        .unwrap_err();

        match err {
            LookupError::ClipboardError { message } => {
                assert!(message.contains("order-lookup-missing-helper-a"));
                assert!(message.contains("order-lookup-missing-helper-b"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
