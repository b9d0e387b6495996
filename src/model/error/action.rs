use crate::r#macro::loggable::loggable;

loggable! {
    ActionError {
        #[error("{action} is not supported on {platform}")]
        UnsupportedPlatform { action: String, platform: String } => tracing::Level::WARN,

        #[error("Failed to launch {program}: {reason}")]
        LaunchFailed { program: String, reason: String } => tracing::Level::ERROR,
    }
}
