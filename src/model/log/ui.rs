use crate::r#macro::loggable::loggable;

loggable! {
    UiLog {
        #[error("Window placed at ({x}, {y})")]
        WindowPlaced { x: f32, y: f32 } => tracing::Level::DEBUG,

        #[error("Stopwatch input rejected: {input}")]
        StopwatchInputRejected { input: String } => tracing::Level::DEBUG,

        #[error("System font not found: {family}")]
        FontNotFound { family: String } => tracing::Level::DEBUG,
    }
}
