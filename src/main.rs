#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use crate::core::system::System;
use crate::utils::logging::Logging;
use std::process::ExitCode;

mod core;
mod interface;
mod r#macro;
mod model;
mod platform;
mod ui;
mod utils;

#[tokio::main]
async fn main() -> ExitCode {
    let _log_guard = Logging::initialize();
    let system = match System::new() {
        Ok(system) => system,
        Err(err) => {
            err.log();
            return ExitCode::FAILURE;
        }
    };
    let result = system.run();
    system.terminate();
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.log();
            ExitCode::FAILURE
        }
    }
}
