use thiserror::Error;

#[derive(Error, Debug)]
pub enum UndertoneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("Cover file too small for message: need {required} carrier samples, have {available}")]
    InsufficientCapacity { required: usize, available: usize },

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Message contains a NUL character, which is reserved as the terminator")]
    EmbeddedNul,

    #[error("Message character {0:?} does not fit in a single byte")]
    UnencodableChar(char),

    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, UndertoneError>;
