use crate::model::log::ui::UiLog;
use std::time::Duration;

pub const DEFAULT_SEED: &str = "00:00:00";

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Paused,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwatchState {
    pub elapsed: Duration,
    pub input_seed: String,
    pub phase: Phase,
}

impl StopwatchState {
    pub fn new() -> Self {
        Self {
            elapsed: Duration::ZERO,
            input_seed: DEFAULT_SEED.to_string(),
            phase: Phase::Idle,
        }
    }

    /// Idle parses the seed into `elapsed`, Paused resumes, Running is left alone.
    pub fn start(&mut self) {
        match self.phase {
            Phase::Idle => match parse_seed(&self.input_seed) {
                Some(elapsed) => {
                    self.elapsed = elapsed;
                    self.phase = Phase::Running;
                }
                None => UiLog::StopwatchInputRejected {
                    input: self.input_seed.clone(),
                }
                .log(),
            },
            Phase::Paused => self.phase = Phase::Running,
            Phase::Running => {}
        }
    }

    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
    }

    pub fn stop(&mut self) {
        self.elapsed = Duration::ZERO;
        self.input_seed = DEFAULT_SEED.to_string();
        self.phase = Phase::Idle;
    }

    pub fn tick(&mut self) {
        if self.phase == Phase::Running {
            self.elapsed = self.elapsed.saturating_add(TICK);
        }
    }

    pub fn display(&self) -> String {
        format_elapsed(self.elapsed)
    }
}

impl Default for StopwatchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Accepts `H:MM:SS` with any number of hour digits; minutes and seconds stay below 60.
pub fn parse_seed(input: &str) -> Option<Duration> {
    let mut parts = input.trim().split(':');
    let hours = parse_field(parts.next()?)?;
    let minutes = parse_field(parts.next()?)?;
    let seconds = parse_field(parts.next()?)?;
    if parts.next().is_some() || minutes >= 60 || seconds >= 60 {
        return None;
    }
    let total = hours.checked_mul(3600)?.checked_add(minutes * 60 + seconds)?;
    Some(Duration::from_secs(total))
}

fn parse_field(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_with(seed: &str) -> StopwatchState {
        let mut stopwatch = StopwatchState::new();
        stopwatch.input_seed = seed.to_string();
        stopwatch.start();
        stopwatch
    }

    #[test]
    fn start_then_tick_advances_from_seed() {
        let mut stopwatch = started_with("00:00:05");
        assert_eq!(stopwatch.phase, Phase::Running);
        stopwatch.tick();
        assert_eq!(stopwatch.elapsed, Duration::from_secs(6));
        assert_eq!(stopwatch.display(), "00:00:06");
    }

    #[test]
    fn pause_freezes_elapsed() {
        let mut stopwatch = started_with("00:01:00");
        stopwatch.tick();
        stopwatch.pause();
        for _ in 0..5 {
            stopwatch.tick();
        }
        assert_eq!(stopwatch.phase, Phase::Paused);
        assert_eq!(stopwatch.display(), "00:01:01");
    }

    #[test]
    fn start_after_pause_resumes_without_reparsing() {
        let mut stopwatch = started_with("00:00:10");
        stopwatch.tick();
        stopwatch.pause();
        stopwatch.input_seed = "05:00:00".to_string();
        stopwatch.start();
        stopwatch.tick();
        assert_eq!(stopwatch.phase, Phase::Running);
        assert_eq!(stopwatch.display(), "00:00:12");
    }

    #[test]
    fn stop_resets_from_every_phase() {
        let mut running = started_with("01:02:03");
        let mut paused = started_with("01:02:03");
        paused.pause();
        let mut idle = StopwatchState::new();
        idle.input_seed = "00:10:00".to_string();

        for stopwatch in [&mut running, &mut paused, &mut idle] {
            stopwatch.stop();
            assert_eq!(stopwatch.phase, Phase::Idle);
            assert_eq!(stopwatch.elapsed, Duration::ZERO);
            assert_eq!(stopwatch.input_seed, DEFAULT_SEED);
        }
    }

    #[test]
    fn invalid_seed_keeps_idle() {
        let mut stopwatch = started_with("notatime");
        assert_eq!(stopwatch.phase, Phase::Idle);
        assert_eq!(stopwatch.input_seed, "notatime");
        stopwatch.tick();
        assert_eq!(stopwatch.elapsed, Duration::ZERO);
    }

    #[test]
    fn idle_ticks_do_nothing() {
        let mut stopwatch = StopwatchState::new();
        stopwatch.tick();
        assert_eq!(stopwatch.display(), "00:00:00");
        stopwatch.pause();
        assert_eq!(stopwatch.phase, Phase::Idle);
    }

    #[test]
    fn seed_parsing_rules() {
        assert_eq!(parse_seed(" 00:00:05 "), Some(Duration::from_secs(5)));
        assert_eq!(parse_seed("1:00:00"), Some(Duration::from_secs(3600)));
        assert_eq!(parse_seed("120:00:00"), Some(Duration::from_secs(432_000)));
        assert_eq!(parse_seed("00:60:00"), None);
        assert_eq!(parse_seed("00:00:60"), None);
        assert_eq!(parse_seed("00:05"), None);
        assert_eq!(parse_seed("00:00:05:00"), None);
        assert_eq!(parse_seed("+1:00:00"), None);
        assert_eq!(parse_seed(""), None);
    }

    #[test]
    fn hours_grow_past_two_digits() {
        assert_eq!(format_elapsed(Duration::from_secs(100 * 3600 + 61)), "100:01:01");
    }
}
