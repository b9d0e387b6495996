use crate::interface::launcher::Launcher;
use crate::model::action::LaunchCommand;
use crate::model::error::action::ActionError;
use crate::model::log::action::ActionLog;
use std::process::{Command, Stdio};
use std::thread;

#[cfg(target_os = "windows")]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Spawns the command detached from the widget; a helper thread reaps the child.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, command: &LaunchCommand) -> Result<(), ActionError> {
        let mut process = Command::new(&command.program);
        process
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        #[cfg(target_os = "windows")]
        {
            use std::os::windows::process::CommandExt;
            process.creation_flags(CREATE_NO_WINDOW);
        }

        let mut child = process.spawn().map_err(|err| ActionError::LaunchFailed {
            program: command.program.clone(),
            reason: err.to_string(),
        })?;

        let program = command.program.clone();
        thread::spawn(move || match child.wait() {
            Ok(status) => ActionLog::ChildExited {
                program,
                status: status.to_string(),
            }
            .log(),
            Err(err) => ActionError::LaunchFailed {
                program,
                reason: err.to_string(),
            }
            .log(),
        });
        Ok(())
    }
}
