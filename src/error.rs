use std::sync::mpsc::RecvError;

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Input thread stopped: {0}")]
    Input(#[from] RecvError),

    #[error("Failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
