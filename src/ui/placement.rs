use eframe::egui::{pos2, Pos2, Vec2};

/// Horizontally centered, flush with the top edge. Never left of the screen origin.
pub fn top_center(screen: Vec2, window: Vec2) -> Pos2 {
    let x = ((screen.x - window.x) / 2.0).max(0.0).floor();
    pos2(x, 0.0)
}
