use derive_more::{AsRef, Deref, Display, From, Into};
use std::path::Path;
use thiserror::Error;

pub mod applescript;
#[cfg(test)]
pub mod fake;
#[cfg(target_os = "linux")]
pub mod hypr;

pub use applescript::AppleScriptWm;
#[cfg(target_os = "linux")]
pub use hypr::HyprlandWm;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct ProcessName(String);

crate::impl_string_newtype!(ProcessName);

impl ProcessName {
    pub fn matches(&self, other: &ProcessName) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

/// A window as reported by the window manager, in the owning process's stack order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInfo {
    pub title: String,
    /// 1 is the frontmost window of the process.
    pub stack_index: usize,
}

impl WindowInfo {
    pub fn new(title: impl Into<String>, stack_index: usize) -> Self {
        Self {
            title: title.into(),
            stack_index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionResult {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

impl From<WmError> for ExecutionResult {
    fn from(err: WmError) -> Self {
        match err {
            WmError::Script { stdout, stderr } => Self {
                success: false,
                stdout,
                stderr,
            },
            other => Self::failed(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum WmError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("window manager command failed: {stderr}")]
    Script { stdout: String, stderr: String },
    #[error("unexpected window manager output: {output:?}")]
    Malformed { output: String },
    #[cfg(target_os = "linux")]
    #[error(transparent)]
    Hypr(#[from] ::hyprland::error::HyprError),
}

/// Capability the toggler needs from the platform window manager.
///
/// Queries return facts; commands return the captured outcome of the underlying
/// OS call. Neither retries.
pub trait WindowManager {
    fn is_process_running(&self, name: &ProcessName) -> Result<bool, WmError>;

    fn list_windows(&self, name: &ProcessName) -> Result<Vec<WindowInfo>, WmError>;

    /// The application holding input focus, or `None` when nothing is focused.
    fn foreground_process_name(&self) -> Result<Option<ProcessName>, WmError>;

    fn activate(&self, name: &ProcessName) -> Result<ExecutionResult, WmError>;

    /// Starts `executable` detached from this process.
    fn launch(&self, executable: &Path, args: &[String]) -> Result<ExecutionResult, WmError>;

    fn raise_window(
        &self,
        name: &ProcessName,
        stack_index: usize,
    ) -> Result<ExecutionResult, WmError>;

    fn send_hide_keystroke(&self, name: &ProcessName) -> Result<ExecutionResult, WmError>;
}

/// Spawns a detached child with its output discarded.
pub(crate) fn spawn_detached(
    executable: &Path,
    args: &[String],
) -> Result<ExecutionResult, WmError> {
    std::process::Command::new(executable)
        .args(args)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()?;
    Ok(ExecutionResult::ok(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_name_matches_ignoring_case() {
        assert!(ProcessName::from("Comet").matches(&ProcessName::from("comet")));
        assert!(!ProcessName::from("Comet").matches(&ProcessName::from("Safari")));
    }

    #[test]
    fn test_script_error_keeps_captured_output() {
        let result = ExecutionResult::from(WmError::Script {
            stdout: "partial".to_string(),
            stderr: "execution error".to_string(),
        });
        assert!(!result.success);
        assert_eq!(result.stdout, "partial");
        assert_eq!(result.stderr, "execution error");
    }

    #[test]
    fn test_malformed_error_becomes_failed_result() {
        let result = ExecutionResult::from(WmError::Malformed {
            output: "maybe".to_string(),
        });
        assert!(!result.success);
        assert!(result.stderr.contains("maybe"));
    }
}
