use crate::r#macro::loggable::loggable;

loggable! {
    SystemError {
        #[error("Unable to read configuration: {reason}")]
        ConfigUnreadable { reason: String } => tracing::Level::ERROR,

        #[error("Invalid configuration: {reason}")]
        InvalidConfig { reason: String } => tracing::Level::ERROR,

        #[error("UI platform error: {reason}")]
        UIPlatformError { reason: String } => tracing::Level::ERROR,
    }
}
