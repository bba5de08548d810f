use crate::decide::Action;
use crate::state::WindowState;
use crate::target::TargetSpec;
use crate::wm::{ExecutionResult, WindowManager, WmError};

/// Applies `action` through the window manager.
///
/// Failures are folded into the returned result and never retried. Compound
/// actions stop at their first failing step.
pub fn execute(
    wm: &dyn WindowManager,
    target: &TargetSpec,
    state: &WindowState,
    action: Action,
) -> ExecutionResult {
    try_execute(wm, target, state, action).unwrap_or_else(ExecutionResult::from)
}

fn try_execute(
    wm: &dyn WindowManager,
    target: &TargetSpec,
    state: &WindowState,
    action: Action,
) -> Result<ExecutionResult, WmError> {
    let host = &target.host;

    match action {
        Action::LaunchHostWithTarget => wm.launch(&target.executable, &target.launch_args),
        Action::ActivateHostThenCreateTarget => then(wm.activate(host)?, || {
            wm.launch(&target.executable, &target.launch_args)
        }),
        Action::ActivateHostAndRaiseTarget => {
            let activated = wm.activate(host)?;
            match state.target_window().filter(|t| t.in_range()) {
                Some(t) => then(activated, || wm.raise_window(host, t.index)),
                None => Ok(activated),
            }
        }
        Action::SwitchToSiblingWindow { next_index, .. } => wm.raise_window(host, next_index),
        Action::HideHost => wm.send_hide_keystroke(host),
    }
}

fn then(
    first: ExecutionResult,
    next: impl FnOnce() -> Result<ExecutionResult, WmError>,
) -> Result<ExecutionResult, WmError> {
    if !first.success {
        return Ok(first);
    }
    let second = next()?;
    Ok(ExecutionResult {
        success: second.success,
        stdout: join_output(first.stdout, second.stdout),
        stderr: join_output(first.stderr, second.stderr),
    })
}

fn join_output(a: String, b: String) -> String {
    match (a.is_empty(), b.is_empty()) {
        (true, _) => b,
        (_, true) => a,
        _ => format!("{}\n{}", a, b),
    }
}
