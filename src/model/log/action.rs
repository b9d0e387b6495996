use crate::r#macro::loggable::loggable;

loggable! {
    ActionLog {
        #[error("Launched {program} for {action}")]
        Launched { action: String, program: String } => tracing::Level::INFO,

        #[error("{program} exited with {status}")]
        ChildExited { program: String, status: String } => tracing::Level::DEBUG,
    }
}
