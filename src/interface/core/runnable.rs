use std::future::Future;
use tokio::runtime::Handle;
use tokio::sync::oneshot;

pub trait Runnable: Sized + Send + 'static {
    fn run(self, runtime: &Handle) -> RunningTask {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        runtime.spawn(self.run_impl(shutdown_rx));
        RunningTask {
            shutdown_tx: Some(shutdown_tx),
        }
    }

    fn run_impl(self, shutdown_rx: oneshot::Receiver<()>) -> impl Future<Output = ()> + Send + 'static;
}

/// Handle to a spawned [`Runnable`]. Dropping it signals shutdown.
pub struct RunningTask {
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl Drop for RunningTask {
    fn drop(&mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(());
        }
    }
}
