use crate::model::action::{ActionRequest, LaunchCommand};

pub fn command_for(action: ActionRequest) -> LaunchCommand {
    match action {
        ActionRequest::OpenSettings => LaunchCommand::new("open", &["-a", "System Preferences"]),
        ActionRequest::OpenAccountSettings => LaunchCommand::new(
            "open",
            &["-a", "System Preferences", "--args", "Accounts"],
        ),
        ActionRequest::OpenTerminal => LaunchCommand::new("open", &["-a", "Terminal"]),
        ActionRequest::OpenEditor => LaunchCommand::new("open", &["-a", "TextEdit"]),
        ActionRequest::OpenMusic => LaunchCommand::new("open", &["-a", "Music"]),
    }
}
