use crate::core::dispatcher::ActionDispatcher;
use crate::core::ticker::Tick;
use crate::interface::core::runnable::RunningTask;
use crate::interface::launcher::Launcher;
use crate::model::action::ActionRequest;
use crate::model::clock::ClockState;
use crate::model::log::ui::UiLog;
use crate::model::stopwatch::{Phase, StopwatchState};
use crate::platform::launcher::ProcessLauncher;
use crate::ui::placement;
use eframe::egui::{self, Color32, RichText};
use eframe::{App, Frame};
use std::sync::mpsc::Receiver;

const ISLAND_FILL: Color32 = Color32::from_rgb(12, 12, 14);
const PRIMARY_TEXT: Color32 = Color32::from_rgb(240, 240, 245);
const SECONDARY_TEXT: Color32 = Color32::from_rgb(150, 150, 160);
const RUNNING_ACCENT: Color32 = Color32::from_rgb(52, 199, 89);

pub struct IslandPage<L = ProcessLauncher> {
    dispatcher: ActionDispatcher<L>,
    tick_events: Receiver<Tick>,
    _ticker: RunningTask,

    clock: ClockState,
    stopwatch: StopwatchState,

    window_size: egui::Vec2,
    placed: bool,
}

impl<L: Launcher> IslandPage<L> {
    pub fn new(
        dispatcher: ActionDispatcher<L>,
        tick_events: Receiver<Tick>,
        ticker: RunningTask,
        window_size: egui::Vec2,
    ) -> Self {
        Self {
            dispatcher,
            tick_events,
            _ticker: ticker,
            clock: ClockState::now(),
            stopwatch: StopwatchState::new(),
            window_size,
            placed: false,
        }
    }

    fn process_events(&mut self) {
        let mut ticked = false;
        while let Ok(Tick) = self.tick_events.try_recv() {
            self.stopwatch.tick();
            ticked = true;
        }
        if ticked {
            self.clock.refresh();
        }
    }

    fn place_window(&mut self, ctx: &egui::Context) {
        if self.placed {
            return;
        }
        let (monitor_size, outer_rect) =
            ctx.input(|input| (input.viewport().monitor_size, input.viewport().outer_rect));
        let Some(monitor_size) = monitor_size else {
            return;
        };
        let window_size = outer_rect.map(|rect| rect.size()).unwrap_or(self.window_size);
        let position = placement::top_center(monitor_size, window_size);
        ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(position));
        UiLog::WindowPlaced {
            x: position.x,
            y: position.y,
        }
        .log();
        self.placed = true;
    }

    fn draw_island(&mut self, ctx: &egui::Context) {
        let frame = egui::Frame::new()
            .fill(ISLAND_FILL)
            .corner_radius(egui::CornerRadius::same(28))
            .inner_margin(egui::Margin::symmetric(18, 10));

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let drag_area = ui.interact(ui.max_rect(), ui.id().with("island_drag"), egui::Sense::drag());
            if drag_area.drag_started() {
                ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
            }

            self.draw_clock(ctx, ui);
            ui.add_space(4.0);
            self.draw_stopwatch(ui);
            ui.add_space(4.0);
            self.draw_actions(ui);
        });
    }

    fn draw_clock(&self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(&self.clock.current_time)
                    .monospace()
                    .size(28.0)
                    .strong()
                    .color(PRIMARY_TEXT),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("✕").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                ui.label(RichText::new(&self.clock.current_date).color(SECONDARY_TEXT));
            });
        });
    }

    fn draw_stopwatch(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            match self.stopwatch.phase {
                Phase::Idle => {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.stopwatch.input_seed)
                            .desired_width(80.0)
                            .font(egui::TextStyle::Monospace),
                    );
                }
                Phase::Running => {
                    ui.label(RichText::new(self.stopwatch.display()).monospace().color(RUNNING_ACCENT));
                }
                Phase::Paused => {
                    ui.label(RichText::new(self.stopwatch.display()).monospace().color(SECONDARY_TEXT));
                }
            }

            let running = self.stopwatch.phase == Phase::Running;
            if ui.add_enabled(!running, egui::Button::new("Start")).clicked() {
                self.stopwatch.start();
            }
            if ui.add_enabled(running, egui::Button::new("Pause")).clicked() {
                self.stopwatch.pause();
            }
            if ui.button("Stop").clicked() {
                self.stopwatch.stop();
            }
        });
    }

    fn draw_actions(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for action in ActionRequest::ALL {
                if ui.small_button(action.label()).clicked() {
                    self.dispatcher.dispatch(action);
                }
            }
        });
    }
}

impl<L: Launcher> App for IslandPage<L> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.process_events();
        self.place_window(ctx);
        self.draw_island(ctx);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ticker::ClockTicker;
    use crate::interface::core::runnable::Runnable;
    use crate::model::action::LaunchCommand;
    use crate::model::config::CommandOverrides;
    use crate::model::error::action::ActionError;
    use crate::platform::Platform;
    use std::sync::mpsc::{self, Sender};
    use std::time::Duration;
    use tokio::runtime::Handle;

    struct NoopLauncher;

    impl Launcher for NoopLauncher {
        fn launch(&self, _command: &LaunchCommand) -> Result<(), ActionError> {
            Ok(())
        }
    }

    fn page() -> (IslandPage<NoopLauncher>, Sender<Tick>) {
        let (tick_tx, tick_rx) = mpsc::channel();
        let ticker = ClockTicker::new(Duration::from_secs(3600), tick_tx.clone(), || {}).run(&Handle::current());
        let dispatcher = ActionDispatcher::new(Platform::Unknown, CommandOverrides::default(), NoopLauncher);
        let page = IslandPage::new(dispatcher, tick_rx, ticker, egui::vec2(420.0, 150.0));
        (page, tick_tx)
    }

    #[tokio::test]
    async fn queued_ticks_all_reach_the_stopwatch() {
        let (mut page, tick_tx) = page();
        page.stopwatch.input_seed = "00:00:05".to_string();
        page.stopwatch.start();
        for _ in 0..3 {
            tick_tx.send(Tick).unwrap();
        }
        page.process_events();
        assert_eq!(page.stopwatch.display(), "00:00:08");

        page.process_events();
        assert_eq!(page.stopwatch.display(), "00:00:08");
    }

    #[tokio::test]
    async fn paused_stopwatch_ignores_ticks() {
        let (mut page, tick_tx) = page();
        page.stopwatch.start();
        tick_tx.send(Tick).unwrap();
        page.process_events();
        page.stopwatch.pause();
        tick_tx.send(Tick).unwrap();
        tick_tx.send(Tick).unwrap();
        page.process_events();
        assert_eq!(page.stopwatch.display(), "00:00:01");
    }

    fn frame_input(monitor_size: Option<egui::Vec2>) -> egui::RawInput {
        let mut input = egui::RawInput::default();
        input.viewports.insert(
            egui::ViewportId::ROOT,
            egui::ViewportInfo {
                monitor_size,
                ..Default::default()
            },
        );
        input
    }

    fn outer_positions(output: &egui::FullOutput) -> Vec<egui::Pos2> {
        output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .map(|viewport| {
                viewport
                    .commands
                    .iter()
                    .filter_map(|command| match command {
                        egui::ViewportCommand::OuterPosition(position) => Some(*position),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn window_is_placed_only_once() {
        let (mut page, _tick_tx) = page();
        let ctx = egui::Context::default();
        let monitor = Some(egui::vec2(1920.0, 1080.0));

        let first = ctx.run(frame_input(monitor), |ctx| {
            page.place_window(ctx);
            page.place_window(ctx);
        });
        assert_eq!(outer_positions(&first), vec![egui::pos2(750.0, 0.0)]);
        assert!(page.placed);

        let second = ctx.run(frame_input(monitor), |ctx| page.place_window(ctx));
        assert!(outer_positions(&second).is_empty());
    }

    #[tokio::test]
    async fn placement_waits_for_monitor_size() {
        let (mut page, _tick_tx) = page();
        let ctx = egui::Context::default();

        let unknown = ctx.run(frame_input(None), |ctx| page.place_window(ctx));
        assert!(outer_positions(&unknown).is_empty());
        assert!(!page.placed);

        let known = ctx.run(frame_input(Some(egui::vec2(1366.0, 768.0))), |ctx| page.place_window(ctx));
        assert_eq!(outer_positions(&known), vec![egui::pos2(473.0, 0.0)]);
    }
}
