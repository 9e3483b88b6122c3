use thiserror::Error;

#[derive(Error, Debug)]
pub enum CountdownError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CountdownError {
    /// Message suitable for showing to the user in a popup or banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::Config(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}
