use crate::core::app_config::AppConfig;
use crate::core::dispatcher::ActionDispatcher;
use crate::core::ticker::{ClockTicker, TICK_PERIOD};
use crate::interface::core::runnable::Runnable;
use crate::model::error::Error;
use crate::model::error::system::SystemError;
use crate::model::log::system::SystemLog;
use crate::platform::launcher::ProcessLauncher;
use crate::platform::Platform;
use crate::ui::island_page::IslandPage;
use crate::utils::font;
use eframe::egui;
use std::sync::mpsc;
use std::sync::Arc;
use tokio::runtime::Handle;

const APP_NAME: &str = "DynamicIsland";

pub struct GuiManager {
    app_config: Arc<AppConfig>,
}

impl GuiManager {
    pub fn new(app_config: Arc<AppConfig>) -> Self {
        Self { app_config }
    }

    /// Blocks until the window closes. The ticker stops together with the page.
    pub fn start(&self) -> Result<(), Error> {
        let app_config = self.app_config.clone();
        let runtime = Handle::current();
        let window_size = egui::vec2(app_config.window_width, app_config.window_height);

        let mut viewport = egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_title(APP_NAME)
            .with_decorations(false)
            .with_transparent(true)
            .with_resizable(false);
        if app_config.always_on_top {
            viewport = viewport.with_always_on_top();
        }
        let options = eframe::NativeOptions {
            viewport,
            ..Default::default()
        };

        eframe::run_native(
            APP_NAME,
            options,
            Box::new(move |cc| {
                font::setup_system_fonts(&cc.egui_ctx);

                let (tick_tx, tick_rx) = mpsc::channel();
                let egui_ctx = cc.egui_ctx.clone();
                let ticker = ClockTicker::new(TICK_PERIOD, tick_tx, move || egui_ctx.request_repaint())
                    .run(&runtime);

                let dispatcher = ActionDispatcher::new(
                    Platform::current(),
                    app_config.commands.clone(),
                    ProcessLauncher,
                );
                Ok(Box::new(IslandPage::new(dispatcher, tick_rx, ticker, window_size)))
            }),
        )
        .map_err(|err| SystemError::UIPlatformError {
            reason: err.to_string(),
        })?;

        SystemLog::GuiExited.log();
        Ok(())
    }
}
