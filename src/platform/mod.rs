pub mod launcher;
mod linux;
mod macos;
mod windows;

use crate::model::action::{ActionRequest, LaunchCommand};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOS,
    Linux,
    Unknown,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::Unknown
        }
    }

    /// Built-in command for `action`, `None` where the platform has no table.
    pub fn command_for(&self, action: ActionRequest) -> Option<LaunchCommand> {
        match self {
            Platform::Windows => Some(windows::command_for(action)),
            Platform::MacOS => Some(macos::command_for(action)),
            Platform::Linux => Some(linux::command_for(action)),
            Platform::Unknown => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "Windows",
            Platform::MacOS => "macOS",
            Platform::Linux => "Linux",
            Platform::Unknown => std::env::consts::OS,
        };
        f.write_str(name)
    }
}
