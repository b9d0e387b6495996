pub use crate::loggable;

/// Declares an error or log entry enum whose variants know their own level.
///
/// ```ignore
/// loggable! {
///     ExampleLog {
///         #[error("Window placed at {x}, {y}")]
///         WindowPlaced { x: f32, y: f32 } => tracing::Level::DEBUG,
///     }
/// }
/// ```
#[macro_export]
macro_rules! loggable {
    (
        $enum_name:ident {
            $(
                $(#[doc = $doc:literal])*
                #[error($msg:literal)]
                $variant:ident $({ $($field:ident: $field_type:ty),* $(,)? })? => $level:expr
                $(,)?
            )*
        }
    ) => {
        #[allow(dead_code)]
        #[derive(Debug, Clone, PartialEq, thiserror::Error)]
        pub enum $enum_name {
            $(
                $(#[doc = $doc])*
                #[error($msg)]
                $variant $({ $($field: $field_type),* })?,
            )*
        }

        impl $enum_name {
            pub fn level(&self) -> tracing::Level {
                match self {
                    $(Self::$variant $({ $($field: _),* })? => $level,)*
                }
            }

            #[allow(dead_code)]
            pub fn log(&self) {
                let message = self.to_string();
                $crate::emit!(self.level(), "{}", message);
            }

            #[allow(dead_code)]
            pub fn log_with_context<T: std::fmt::Display>(&self, context: T) {
                let message = self.to_string();
                let context = context.to_string();
                $crate::emit!(self.level(), message = %message, context = %context);
            }
        }
    };
}
