pub mod action;
pub mod system;

use crate::model::error::system::SystemError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    System(SystemError),
}

impl Error {
    pub fn log(&self) {
        match self {
            Self::System(error) => error.log(),
        }
    }
}

impl From<SystemError> for Error {
    fn from(error: SystemError) -> Self {
        Self::System(error)
    }
}
