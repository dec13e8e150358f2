use thiserror::Error;

#[derive(Error, Debug)]
pub enum TarotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Data error: {0}")]
    Data(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    /// The user closed the input stream (Ctrl-D, or piped input ran out).
    #[error("Input closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, TarotError>;
