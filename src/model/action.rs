use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionRequest {
    OpenSettings,
    OpenAccountSettings,
    OpenTerminal,
    OpenEditor,
    OpenMusic,
}

impl ActionRequest {
    pub const ALL: [ActionRequest; 5] = [
        ActionRequest::OpenSettings,
        ActionRequest::OpenAccountSettings,
        ActionRequest::OpenTerminal,
        ActionRequest::OpenEditor,
        ActionRequest::OpenMusic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActionRequest::OpenSettings => "⚙ Settings",
            ActionRequest::OpenAccountSettings => "👤 Account",
            ActionRequest::OpenTerminal => "▶ Terminal",
            ActionRequest::OpenEditor => "✎ Editor",
            ActionRequest::OpenMusic => "♪ Music",
        }
    }
}

impl fmt::Display for ActionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionRequest::OpenSettings => "open settings",
            ActionRequest::OpenAccountSettings => "open account settings",
            ActionRequest::OpenTerminal => "open terminal",
            ActionRequest::OpenEditor => "open editor",
            ActionRequest::OpenMusic => "open music",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LaunchCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl LaunchCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
