use crate::interface::core::runnable::Runnable;
use crate::model::log::system::SystemLog;
use std::future::Future;
use std::sync::mpsc;
use std::time::Duration;
use tokio::select;
use tokio::sync::oneshot;
use tokio::time::{interval, MissedTickBehavior};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

/// Emits a [`Tick`] every period and calls `waker` so the UI thread drains it.
pub struct ClockTicker<W> {
    period: Duration,
    tick_tx: mpsc::Sender<Tick>,
    waker: W,
}

impl<W> ClockTicker<W>
where
    W: Fn() + Send + Sync + 'static,
{
    pub fn new(period: Duration, tick_tx: mpsc::Sender<Tick>, waker: W) -> Self {
        ClockTicker {
            period,
            tick_tx,
            waker,
        }
    }
}

impl<W> Runnable for ClockTicker<W>
where
    W: Fn() + Send + Sync + 'static,
{
    fn run_impl(self, mut shutdown_rx: oneshot::Receiver<()>) -> impl Future<Output = ()> + Send + 'static {
        async move {
            let mut ticks = interval(self.period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            ticks.tick().await;
            loop {
                select! {
                    biased;
                    _ = &mut shutdown_rx => break,
                    _ = ticks.tick() => {
                        if self.tick_tx.send(Tick).is_err() {
                            break;
                        }
                        (self.waker)();
                    }
                }
            }
            SystemLog::TickerStopped.log();
        }
    }
}
