use crate::state::{TargetWindow, WindowState};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Action {
    LaunchHostWithTarget,
    ActivateHostThenCreateTarget,
    ActivateHostAndRaiseTarget,
    SwitchToSiblingWindow {
        from_index: usize,
        window_count: usize,
        next_index: usize,
    },
    HideHost,
}

/// Picks the single action for a snapshot.
///
/// Pressing the toggle surfaces the target window first. Once the user is looking
/// at it, further presses cycle to the host's other windows, or hide the host when
/// the target is its only window.
pub fn decide(state: &WindowState) -> Action {
    match state {
        WindowState::NotRunning => Action::LaunchHostWithTarget,
        WindowState::NoTargetWindow { .. } => Action::ActivateHostThenCreateTarget,
        WindowState::TargetExists { target, .. } if !target.in_range() => {
            Action::ActivateHostAndRaiseTarget
        }
        WindowState::TargetExists {
            target,
            host_is_frontmost: true,
        } if target.is_frontmost => in_focus(target),
        WindowState::TargetExists { .. } => Action::ActivateHostAndRaiseTarget,
    }
}

fn in_focus(target: &TargetWindow) -> Action {
    if target.window_count > 1 {
        Action::SwitchToSiblingWindow {
            from_index: target.index,
            window_count: target.window_count,
            next_index: sibling_index(target.index, target.window_count),
        }
    } else {
        Action::HideHost
    }
}

/// Next window after `index`, wrapping to 1. Requires `window_count >= 2`.
fn sibling_index(index: usize, window_count: usize) -> usize {
    (index % window_count) + 1
}
