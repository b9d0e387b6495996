use crate::interface::launcher::Launcher;
use crate::model::action::{ActionRequest, LaunchCommand};
use crate::model::config::CommandOverrides;
use crate::model::error::action::ActionError;
use crate::model::log::action::ActionLog;
use crate::platform::launcher::ProcessLauncher;
use crate::platform::Platform;

pub struct ActionDispatcher<L = ProcessLauncher> {
    platform: Platform,
    overrides: CommandOverrides,
    launcher: L,
}

impl<L: Launcher> ActionDispatcher<L> {
    pub fn new(platform: Platform, overrides: CommandOverrides, launcher: L) -> Self {
        Self {
            platform,
            overrides,
            launcher,
        }
    }

    /// Configured override first, then the platform's built-in command.
    pub fn resolve(&self, action: ActionRequest) -> Option<LaunchCommand> {
        self.overrides
            .get(action)
            .cloned()
            .or_else(|| self.platform.command_for(action))
    }

    /// Failures end up in the log and never reach the caller.
    pub fn dispatch(&self, action: ActionRequest) {
        if let Err(err) = self.try_dispatch(action) {
            err.log_with_context(action);
        }
    }

    fn try_dispatch(&self, action: ActionRequest) -> Result<(), ActionError> {
        let command = self
            .resolve(action)
            .ok_or_else(|| ActionError::UnsupportedPlatform {
                action: action.to_string(),
                platform: self.platform.to_string(),
            })?;
        self.launcher.launch(&command)?;
        ActionLog::Launched {
            action: action.to_string(),
            program: command.to_string(),
        }
        .log();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLauncher {
        launched: Mutex<Vec<LaunchCommand>>,
    }

    impl RecordingLauncher {
        fn launched(&self) -> Vec<LaunchCommand> {
            self.launched.lock().unwrap().clone()
        }
    }

    impl Launcher for RecordingLauncher {
        fn launch(&self, command: &LaunchCommand) -> Result<(), ActionError> {
            self.launched.lock().unwrap().push(command.clone());
            Ok(())
        }
    }

    struct FailingLauncher;

    impl Launcher for FailingLauncher {
        fn launch(&self, command: &LaunchCommand) -> Result<(), ActionError> {
            Err(ActionError::LaunchFailed {
                program: command.program.clone(),
                reason: "not found".to_string(),
            })
        }
    }

    #[test]
    fn unknown_platform_launches_nothing() {
        let dispatcher = ActionDispatcher::new(
            Platform::Unknown,
            CommandOverrides::default(),
            RecordingLauncher::default(),
        );
        for action in ActionRequest::ALL {
            dispatcher.dispatch(action);
        }
        assert!(dispatcher.launcher.launched().is_empty());
        assert!(matches!(
            dispatcher.try_dispatch(ActionRequest::OpenSettings),
            Err(ActionError::UnsupportedPlatform { .. })
        ));
    }

    #[test]
    fn known_platform_uses_builtin_table() {
        let dispatcher = ActionDispatcher::new(
            Platform::MacOS,
            CommandOverrides::default(),
            RecordingLauncher::default(),
        );
        dispatcher.dispatch(ActionRequest::OpenMusic);
        assert_eq!(
            dispatcher.launcher.launched(),
            vec![LaunchCommand::new("open", &["-a", "Music"])]
        );
    }

    #[test]
    fn override_wins_even_without_platform_table() {
        let overrides = CommandOverrides {
            open_terminal: Some(LaunchCommand::new("alacritty", &[])),
            ..CommandOverrides::default()
        };
        let dispatcher = ActionDispatcher::new(Platform::Unknown, overrides, RecordingLauncher::default());
        dispatcher.dispatch(ActionRequest::OpenTerminal);
        dispatcher.dispatch(ActionRequest::OpenEditor);
        assert_eq!(
            dispatcher.launcher.launched(),
            vec![LaunchCommand::new("alacritty", &[])]
        );
    }

    #[test]
    fn launch_failure_is_swallowed() {
        let dispatcher = ActionDispatcher::new(Platform::Linux, CommandOverrides::default(), FailingLauncher);
        dispatcher.dispatch(ActionRequest::OpenEditor);
        assert_eq!(
            dispatcher.try_dispatch(ActionRequest::OpenEditor),
            Err(ActionError::LaunchFailed {
                program: "gedit".to_string(),
                reason: "not found".to_string(),
            })
        );
    }
}
