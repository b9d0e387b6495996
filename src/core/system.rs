use crate::core::app_config::AppConfig;
use crate::core::gui_manager::GuiManager;
use crate::model::error::Error;
use crate::model::log::system::SystemLog;
use std::sync::Arc;

pub struct System {
    gui_manager: GuiManager,
}

impl System {
    pub fn new() -> Result<Self, Error> {
        SystemLog::Initializing.log();
        let app_config = Arc::new(AppConfig::new()?);
        let gui_manager = GuiManager::new(app_config);
        SystemLog::InitializeComplete.log();
        Ok(Self { gui_manager })
    }

    pub fn run(&self) -> Result<(), Error> {
        SystemLog::Online.log();
        self.gui_manager.start()
    }

    pub fn terminate(self) {
        SystemLog::Terminating.log();
        SystemLog::TerminateComplete.log();
    }
}
