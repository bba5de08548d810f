use super::{ExecutionResult, ProcessName, WindowInfo, WindowManager, WmError, spawn_detached};
use std::path::Path;
use std::process::Command;

/// macOS backend: every query and command is one `osascript` run.
#[derive(Debug, Default, Clone, Copy)]
pub struct AppleScriptWm;

impl AppleScriptWm {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, script: &str) -> Result<ExecutionResult, WmError> {
        log::trace!("osascript: {}", script);

        let output = Command::new("osascript").arg("-e").arg(script).output()?;
        let result = ExecutionResult {
            success: output.status.success(),
            stdout: trim_newlines(&String::from_utf8_lossy(&output.stdout)),
            stderr: trim_newlines(&String::from_utf8_lossy(&output.stderr)),
        };

        if result.success {
            Ok(result)
        } else {
            Err(WmError::Script {
                stdout: result.stdout,
                stderr: result.stderr,
            })
        }
    }

    fn query(&self, script: &str) -> Result<String, WmError> {
        self.run(script).map(|r| r.stdout)
    }
}

impl WindowManager for AppleScriptWm {
    fn is_process_running(&self, name: &ProcessName) -> Result<bool, WmError> {
        parse_bool(&self.query(&process_running_script(name))?)
    }

    fn list_windows(&self, name: &ProcessName) -> Result<Vec<WindowInfo>, WmError> {
        parse_window_list(&self.query(&list_windows_script(name))?)
    }

    fn foreground_process_name(&self) -> Result<Option<ProcessName>, WmError> {
        Ok(parse_process_name(&self.query(FOREGROUND_SCRIPT)?))
    }

    fn activate(&self, name: &ProcessName) -> Result<ExecutionResult, WmError> {
        self.run(&format!("tell application {} to activate", quote(name)))
    }

    fn launch(&self, executable: &Path, args: &[String]) -> Result<ExecutionResult, WmError> {
        spawn_detached(executable, args)
    }

    fn raise_window(
        &self,
        name: &ProcessName,
        stack_index: usize,
    ) -> Result<ExecutionResult, WmError> {
        self.run(&format!(
            "tell application {} to set index of window {} to 1",
            quote(name),
            stack_index
        ))
    }

    fn send_hide_keystroke(&self, name: &ProcessName) -> Result<ExecutionResult, WmError> {
        self.run(&format!(
            r#"tell application "System Events" to tell process {} to keystroke "h" using command down"#,
            quote(name)
        ))
    }
}

const FOREGROUND_SCRIPT: &str = r#"
tell application "System Events"
    return name of first application process whose frontmost is true
end tell
"#;

fn process_running_script(name: &ProcessName) -> String {
    format!(
        r#"
tell application "System Events"
    return (name of processes) contains {}
end tell
"#,
        quote(name)
    )
}

// One line per window: "<index><TAB><title>", front to back.
fn list_windows_script(name: &ProcessName) -> String {
    format!(
        r#"
tell application {}
    set output to ""
    set windowCount to count of windows
    repeat with i from 1 to windowCount
        set output to output & i & tab & (name of window i) & linefeed
    end repeat
    return output
end tell
"#,
        quote(name)
    )
}

// Titles may end in a tab-separated empty field, so only line breaks are stripped.
fn trim_newlines(s: &str) -> String {
    s.trim_end_matches(['\r', '\n']).to_string()
}

/// Renders `s` as an AppleScript string literal.
fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

fn parse_bool(output: &str) -> Result<bool, WmError> {
    match output.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(WmError::Malformed {
            output: other.to_string(),
        }),
    }
}

fn parse_process_name(output: &str) -> Option<ProcessName> {
    let name = output.trim();
    (!name.is_empty()).then(|| ProcessName::new(name))
}

fn parse_window_list(output: &str) -> Result<Vec<WindowInfo>, WmError> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(pos, line)| {
            let malformed = || WmError::Malformed {
                output: line.to_string(),
            };
            let (index, title) = line.split_once('\t').ok_or_else(malformed)?;
            let index: usize = index.trim().parse().map_err(|_| malformed())?;
            // Windows are listed front to back, so the index must match the position.
            if index != pos + 1 {
                return Err(malformed());
            }
            Ok(WindowInfo::new(title, index))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_escapes_quotes_and_backslashes() {
        assert_eq!(quote("Comet"), "\"Comet\"");
        assert_eq!(quote(r#"a "b" \c"#), r#""a \"b\" \\c""#);
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true").unwrap());
        assert!(!parse_bool("false\n").unwrap());
        assert!(matches!(
            parse_bool("missing value"),
            Err(WmError::Malformed { .. })
        ));
    }

    #[test]
    fn test_parse_process_name() {
        assert_eq!(parse_process_name("Comet\n"), Some(ProcessName::from("Comet")));
        assert_eq!(parse_process_name("  "), None);
    }

    #[test]
    fn test_parse_window_list() {
        let output = "1\tChatGPT - New chat\n2\tInbox\tMail\n3\t\n";
        let windows = parse_window_list(output).unwrap();

        assert_eq!(
            windows,
            vec![
                WindowInfo::new("ChatGPT - New chat", 1),
                WindowInfo::new("Inbox\tMail", 2),
                WindowInfo::new("", 3),
            ]
        );
    }

    #[test]
    fn test_parse_empty_window_list() {
        assert!(parse_window_list("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_window_list_rejects_garbage() {
        let cases = ["ChatGPT", "x\tChatGPT", "2\tChatGPT"];
        for output in cases {
            assert!(
                matches!(parse_window_list(output), Err(WmError::Malformed { .. })),
                "accepted {:?}",
                output
            );
        }
    }

    #[test]
    fn test_scripts_target_the_quoted_process() {
        let name = ProcessName::from("Comet");
        assert!(process_running_script(&name).contains("contains \"Comet\""));
        assert!(list_windows_script(&name).contains("tell application \"Comet\""));
    }
}
