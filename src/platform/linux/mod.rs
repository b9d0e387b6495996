use crate::model::action::{ActionRequest, LaunchCommand};

pub fn command_for(action: ActionRequest) -> LaunchCommand {
    match action {
        ActionRequest::OpenSettings => LaunchCommand::new("gnome-control-center", &[]),
        ActionRequest::OpenAccountSettings => LaunchCommand::new("gnome-control-center", &["users"]),
        ActionRequest::OpenTerminal => LaunchCommand::new("x-terminal-emulator", &[]),
        ActionRequest::OpenEditor => LaunchCommand::new("gedit", &[]),
        ActionRequest::OpenMusic => LaunchCommand::new("rhythmbox", &[]),
    }
}
