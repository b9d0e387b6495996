use crate::model::action::{ActionRequest, LaunchCommand};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigTable {
    #[serde(rename = "Config", default)]
    pub config: Config,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub window_width: f32,  // logical points
    pub window_height: f32, // logical points
    pub always_on_top: bool,
    pub commands: CommandOverrides,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 420.0,
            window_height: 150.0,
            always_on_top: true,
            commands: CommandOverrides::default(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CommandOverrides {
    pub open_settings: Option<LaunchCommand>,
    pub open_account_settings: Option<LaunchCommand>,
    pub open_terminal: Option<LaunchCommand>,
    pub open_editor: Option<LaunchCommand>,
    pub open_music: Option<LaunchCommand>,
}

impl CommandOverrides {
    pub fn get(&self, action: ActionRequest) -> Option<&LaunchCommand> {
        match action {
            ActionRequest::OpenSettings => self.open_settings.as_ref(),
            ActionRequest::OpenAccountSettings => self.open_account_settings.as_ref(),
            ActionRequest::OpenTerminal => self.open_terminal.as_ref(),
            ActionRequest::OpenEditor => self.open_editor.as_ref(),
            ActionRequest::OpenMusic => self.open_music.as_ref(),
        }
    }
}
