use super::{ExecutionResult, ProcessName, WindowInfo, WindowManager, WmError, spawn_detached};
use hyprland::data::{Client, Clients, Workspace};
use hyprland::dispatch::{Dispatch, DispatchType, WindowIdentifier, WorkspaceIdentifierWithSpecial};
use hyprland::prelude::*;
use std::path::Path;

const HIDDEN_WORKSPACE: &str = "minimized";

/// Hyprland backend. A process is identified by its window class, and the
/// focus history stands in for the window stack.
#[derive(Debug, Default, Clone, Copy)]
pub struct HyprlandWm;

impl HyprlandWm {
    pub fn new() -> Self {
        Self
    }

    /// Clients of `name`, most recently focused first.
    fn clients_of(&self, name: &ProcessName) -> Result<Vec<Client>, WmError> {
        let mut clients: Vec<Client> = Clients::get()?
            .into_iter()
            .filter(|c| c.class.eq_ignore_ascii_case(name))
            .collect();
        clients.sort_by_key(|c| c.focus_history_id);
        Ok(clients)
    }

    /// Moves windows parked by a hide back onto the active workspace.
    fn unhide(&self, clients: &[Client]) -> Result<(), WmError> {
        let hidden: Vec<&Client> = clients
            .iter()
            .filter(|c| is_hidden(&c.workspace.name))
            .collect();
        if hidden.is_empty() {
            return Ok(());
        }

        let active = Workspace::get_active()?;
        for client in hidden {
            Dispatch::call(DispatchType::MoveToWorkspaceSilent(
                WorkspaceIdentifierWithSpecial::Id(active.id),
                Some(WindowIdentifier::Address(client.address.clone())),
            ))?;
        }
        Ok(())
    }

    fn focus(&self, client: &Client) -> Result<ExecutionResult, WmError> {
        Dispatch::call(DispatchType::FocusWindow(WindowIdentifier::Address(
            client.address.clone(),
        )))?;
        Ok(ExecutionResult::ok(client.title.clone()))
    }
}

impl WindowManager for HyprlandWm {
    fn is_process_running(&self, name: &ProcessName) -> Result<bool, WmError> {
        Ok(!self.clients_of(name)?.is_empty())
    }

    fn list_windows(&self, name: &ProcessName) -> Result<Vec<WindowInfo>, WmError> {
        Ok(self
            .clients_of(name)?
            .into_iter()
            .enumerate()
            .map(|(i, c)| WindowInfo::new(c.title, i + 1))
            .collect())
    }

    fn foreground_process_name(&self) -> Result<Option<ProcessName>, WmError> {
        Ok(Client::get_active()?.map(|c| ProcessName::new(c.class)))
    }

    fn activate(&self, name: &ProcessName) -> Result<ExecutionResult, WmError> {
        let clients = self.clients_of(name)?;
        self.unhide(&clients)?;
        match clients.first() {
            Some(client) => self.focus(client),
            None => Ok(ExecutionResult::failed(format!("no windows for {}", name))),
        }
    }

    fn launch(&self, executable: &Path, args: &[String]) -> Result<ExecutionResult, WmError> {
        spawn_detached(executable, args)
    }

    fn raise_window(
        &self,
        name: &ProcessName,
        stack_index: usize,
    ) -> Result<ExecutionResult, WmError> {
        let clients = self.clients_of(name)?;
        self.unhide(&clients)?;
        match stack_index.checked_sub(1).and_then(|i| clients.get(i)) {
            Some(client) => self.focus(client),
            None => Ok(ExecutionResult::failed(format!(
                "{} has no window {}",
                name, stack_index
            ))),
        }
    }

    /// Hyprland has no application hiding, so every window of `name` is parked on
    /// a special workspace instead.
    fn send_hide_keystroke(&self, name: &ProcessName) -> Result<ExecutionResult, WmError> {
        for client in self.clients_of(name)? {
            Dispatch::call(DispatchType::MoveToWorkspaceSilent(
                WorkspaceIdentifierWithSpecial::Special(Some(HIDDEN_WORKSPACE)),
                Some(WindowIdentifier::Address(client.address.clone())),
            ))?;
        }
        Ok(ExecutionResult::ok(""))
    }
}

fn is_hidden(workspace_name: &str) -> bool {
    workspace_name
        .strip_prefix("special:")
        .is_some_and(|name| name == HIDDEN_WORKSPACE)
}
