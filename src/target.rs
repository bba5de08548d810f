use crate::wm::ProcessName;
use derive_more::{AsRef, Deref, Display, From, Into};
use std::path::PathBuf;

pub const HOST: &str = "Comet";
pub const HOST_EXECUTABLE: &str = "/Applications/Comet.app/Contents/MacOS/Comet";
pub const LAUNCH_ARGS: &[&str] = &["--app=https://chatgpt.com"];
pub const TITLE_ALIASES: &[&str] = &["chatgpt", "chat.openai.com"];

/// Lowercase title fragment identifying the target window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct TitleAlias(String);

crate::impl_string_newtype!(TitleAlias);

/// The host application and how to recognize and open its target window.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetSpec {
    pub host: ProcessName,
    pub executable: PathBuf,
    pub launch_args: Vec<String>,
    pub aliases: Vec<TitleAlias>,
}

impl TargetSpec {
    pub fn matches_title(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.aliases.iter().any(|a| title.contains(a.as_str()))
    }
}

impl Default for TargetSpec {
    fn default() -> Self {
        Self {
            host: ProcessName::from(HOST),
            executable: PathBuf::from(HOST_EXECUTABLE),
            launch_args: LAUNCH_ARGS.iter().map(|a| a.to_string()).collect(),
            aliases: TITLE_ALIASES
                .iter()
                .map(|a| TitleAlias::new(a.to_lowercase()))
                .collect(),
        }
    }
}
