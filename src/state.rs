use crate::target::TargetSpec;
use crate::wm::{WindowManager, WmError};

/// The target window's place in the host's window stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetWindow {
    /// 1-based; only meaningful within the snapshot it came from.
    pub index: usize,
    pub is_frontmost: bool,
    pub window_count: usize,
}

impl TargetWindow {
    pub fn new(index: usize, window_count: usize) -> Self {
        Self {
            index,
            is_frontmost: index == 1,
            window_count,
        }
    }

    pub fn in_range(&self) -> bool {
        (1..=self.window_count).contains(&self.index)
    }
}

/// Snapshot of the window manager taken once per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    NotRunning,
    NoTargetWindow {
        window_count: usize,
        host_is_frontmost: bool,
    },
    TargetExists {
        target: TargetWindow,
        host_is_frontmost: bool,
    },
}

impl WindowState {
    pub fn host_running(&self) -> bool {
        !matches!(self, Self::NotRunning)
    }

    pub fn target_window(&self) -> Option<&TargetWindow> {
        match self {
            Self::TargetExists { target, .. } => Some(target),
            _ => None,
        }
    }

    pub fn host_is_system_frontmost(&self) -> bool {
        match self {
            Self::NotRunning => false,
            Self::NoTargetWindow {
                host_is_frontmost, ..
            }
            | Self::TargetExists {
                host_is_frontmost, ..
            } => *host_is_frontmost,
        }
    }
}

/// Builds a [`WindowState`] from live queries.
///
/// Never fails: when the window manager cannot be queried the host is reported as
/// not running, so the caller ends up relaunching rather than doing nothing.
pub fn observe(wm: &dyn WindowManager, target: &TargetSpec) -> WindowState {
    match try_observe(wm, target) {
        Ok(state) => state,
        Err(e) => {
            log::warn!("Window query failed, assuming {} is not running: {}", target.host, e);
            WindowState::NotRunning
        }
    }
}

fn try_observe(wm: &dyn WindowManager, target: &TargetSpec) -> Result<WindowState, WmError> {
    if !wm.is_process_running(&target.host)? {
        return Ok(WindowState::NotRunning);
    }

    let windows = wm.list_windows(&target.host)?;
    let window_count = windows.len();
    let found = windows
        .iter()
        .find(|w| target.matches_title(&w.title))
        .map(|w| TargetWindow::new(w.stack_index, window_count));

    let host_is_frontmost = wm
        .foreground_process_name()?
        .is_some_and(|p| p.matches(&target.host));

    Ok(match found {
        Some(target) => WindowState::TargetExists {
            target,
            host_is_frontmost,
        },
        None => WindowState::NoTargetWindow {
            window_count,
            host_is_frontmost,
        },
    })
}
