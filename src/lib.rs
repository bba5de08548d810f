pub mod decide;
pub mod exec;
pub mod macros;
pub mod state;
pub mod target;
pub mod wm;

use crate::decide::{Action, decide};
use crate::state::{WindowState, observe};
use crate::target::TargetSpec;
use crate::wm::{ExecutionResult, WindowManager};

/// What one invocation saw, chose, and got back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub state: WindowState,
    pub action: Action,
    pub result: ExecutionResult,
}

/// Observes the window manager once, decides, and applies exactly one action.
pub fn toggle(wm: &dyn WindowManager, target: &TargetSpec) -> Outcome {
    let state = observe(wm, target);
    log::debug!("Observed {:?}", state);

    let action = decide(&state);
    log::debug!("Decided {}", action);

    let result = exec::execute(wm, target, &state, action);
    Outcome {
        state,
        action,
        result,
    }
}
