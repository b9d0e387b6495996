use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";
const LOG_DIRECTORY: &str = "./logs";
const LOG_FILE_PREFIX: &str = "dynamic-island";

pub struct Logging;

impl Logging {
    /// Keep the returned guard alive for as long as file logging should flush.
    pub fn initialize() -> Option<WorkerGuard> {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let stdout_layer = fmt::layer().with_target(false).compact();

        let appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(LOG_FILE_PREFIX)
            .filename_suffix("log")
            .build(LOG_DIRECTORY);

        let guard = match appender {
            Ok(appender) => {
                let (file_writer, guard) = tracing_appender::non_blocking(appender);
                let file_layer = fmt::layer()
                    .with_ansi(false)
                    .with_line_number(true)
                    .with_writer(file_writer);
                tracing_subscriber::registry()
                    .with(filter)
                    .with(stdout_layer)
                    .with(file_layer)
                    .try_init()
                    .ok();
                Some(guard)
            }
            Err(err) => {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(stdout_layer)
                    .try_init()
                    .ok();
                tracing::warn!("File logging disabled ({LOG_DIRECTORY}): {err}");
                None
            }
        };

        log_panics::init();
        guard
    }
}
