use crate::r#macro::loggable::loggable;

loggable! {
    SystemLog {
        #[error("Initializing")]
        Initializing => tracing::Level::INFO,

        #[error("Initialization completed")]
        InitializeComplete => tracing::Level::INFO,

        #[error("Configuration not found, using defaults")]
        ConfigNotFound => tracing::Level::WARN,

        #[error("Online now")]
        Online => tracing::Level::INFO,

        #[error("Gui Exited")]
        GuiExited => tracing::Level::INFO,

        #[error("Clock ticker stopped")]
        TickerStopped => tracing::Level::DEBUG,

        #[error("Termination in process")]
        Terminating => tracing::Level::INFO,

        #[error("Termination completed")]
        TerminateComplete => tracing::Level::INFO,
    }
}
