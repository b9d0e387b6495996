use crate::model::action::{ActionRequest, LaunchCommand};

// `start` hands URIs and programs to the shell, the empty argument is the window title.
pub fn command_for(action: ActionRequest) -> LaunchCommand {
    match action {
        ActionRequest::OpenSettings => shell_start("ms-settings:"),
        ActionRequest::OpenAccountSettings => shell_start("ms-settings:account"),
        ActionRequest::OpenTerminal => shell_start("cmd"),
        ActionRequest::OpenEditor => LaunchCommand::new("notepad", &[]),
        ActionRequest::OpenMusic => shell_start("mswindowsmusic:"),
    }
}

fn shell_start(target: &str) -> LaunchCommand {
    LaunchCommand::new("cmd", &["/C", "start", "", target])
}
