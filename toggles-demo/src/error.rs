use thiserror::Error;
use toggles::HostError;

use crate::scene::SceneError;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
