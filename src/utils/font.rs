use crate::model::log::ui::UiLog;
use eframe::egui;
use font_kit::family_name::FamilyName;
use font_kit::properties::Properties;
use font_kit::source::SystemSource;
use std::sync::Arc;

const CLOCK_FACE: &str = "clock_face";
const UI_FACE: &str = "ui_face";

const CLOCK_FAMILIES: [&str; 4] = ["SF Mono", "Cascadia Mono", "Consolas", "DejaVu Sans Mono"];
const UI_FAMILIES: [&str; 5] = ["SF Pro Text", "Segoe UI", "Helvetica Neue", "Cantarell", "DejaVu Sans"];

/// Puts the first installed system face in front of egui's bundled fonts.
pub fn setup_system_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    let system_source = SystemSource::new();

    if let Some(font_data) = load_first(&system_source, &CLOCK_FAMILIES) {
        fonts.font_data.insert(CLOCK_FACE.to_owned(), Arc::new(font_data));
        if let Some(family) = fonts.families.get_mut(&egui::FontFamily::Monospace) {
            family.insert(0, CLOCK_FACE.to_owned());
        }
    }

    if let Some(font_data) = load_first(&system_source, &UI_FAMILIES) {
        fonts.font_data.insert(UI_FACE.to_owned(), Arc::new(font_data));
        if let Some(family) = fonts.families.get_mut(&egui::FontFamily::Proportional) {
            family.insert(0, UI_FACE.to_owned());
        }
    }

    ctx.set_fonts(fonts);
}

fn load_first(system_source: &SystemSource, families: &[&str]) -> Option<egui::FontData> {
    let names: Vec<FamilyName> = families
        .iter()
        .map(|family| FamilyName::Title(family.to_string()))
        .collect();
    let font = system_source
        .select_best_match(&names, &Properties::new())
        .ok()
        .and_then(|handle| handle.load().ok());
    match font.and_then(|font| font.copy_font_data()) {
        Some(font_data) => Some(egui::FontData::from_owned(font_data.to_vec())),
        None => {
            UiLog::FontNotFound {
                family: families.join(", "),
            }
            .log();
            None
        }
    }
}
