use super::{ExecutionResult, ProcessName, WindowInfo, WindowManager, WmError};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Activate(ProcessName),
    Launch(PathBuf, Vec<String>),
    Raise(ProcessName, usize),
    Hide(ProcessName),
}

/// Scripted window manager that records every command it receives.
#[derive(Debug, Default)]
pub struct FakeWm {
    pub running: Vec<ProcessName>,
    pub windows: Vec<String>,
    pub foreground: Option<ProcessName>,
    pub unreachable: bool,
    pub failing_commands: bool,
    pub recorded: Mutex<Vec<Call>>,
}

impl FakeWm {
    pub fn not_running() -> Self {
        Self::default()
    }

    /// `host` running with `titles` front to back.
    pub fn running(host: &str, titles: &[&str], foreground: &str) -> Self {
        Self {
            running: vec![ProcessName::from(host)],
            windows: titles.iter().map(|t| t.to_string()).collect(),
            foreground: Some(ProcessName::from(foreground)),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.recorded.lock().clone()
    }

    fn record(&self, call: Call) -> Result<ExecutionResult, WmError> {
        self.recorded.lock().push(call);
        if self.failing_commands {
            return Err(WmError::Script {
                stdout: String::new(),
                stderr: "command failed".to_string(),
            });
        }
        Ok(ExecutionResult::ok(""))
    }

    fn check_reachable(&self) -> Result<(), WmError> {
        if self.unreachable {
            return Err(WmError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "osascript not found",
            )));
        }
        Ok(())
    }
}

impl WindowManager for FakeWm {
    fn is_process_running(&self, name: &ProcessName) -> Result<bool, WmError> {
        self.check_reachable()?;
        Ok(self.running.iter().any(|p| p.matches(name)))
    }

    fn list_windows(&self, _name: &ProcessName) -> Result<Vec<WindowInfo>, WmError> {
        self.check_reachable()?;
        Ok(self
            .windows
            .iter()
            .enumerate()
            .map(|(i, title)| WindowInfo::new(title.clone(), i + 1))
            .collect())
    }

    fn foreground_process_name(&self) -> Result<Option<ProcessName>, WmError> {
        self.check_reachable()?;
        Ok(self.foreground.clone())
    }

    fn activate(&self, name: &ProcessName) -> Result<ExecutionResult, WmError> {
        self.record(Call::Activate(name.clone()))
    }

    fn launch(&self, executable: &Path, args: &[String]) -> Result<ExecutionResult, WmError> {
        self.record(Call::Launch(executable.to_path_buf(), args.to_vec()))
    }

    fn raise_window(
        &self,
        name: &ProcessName,
        stack_index: usize,
    ) -> Result<ExecutionResult, WmError> {
        self.record(Call::Raise(name.clone(), stack_index))
    }

    fn send_hide_keystroke(&self, name: &ProcessName) -> Result<ExecutionResult, WmError> {
        self.record(Call::Hide(name.clone()))
    }
}
