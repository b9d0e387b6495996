use crate::model::action::LaunchCommand;
use crate::model::error::action::ActionError;

/// Starts an external program without waiting for it.
pub trait Launcher: Send + Sync {
    fn launch(&self, command: &LaunchCommand) -> Result<(), ActionError>;
}
