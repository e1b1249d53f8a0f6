use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for Rustpress operations
pub type BoxResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// Error types for Rustpress operations
#[derive(Debug)]
pub enum PressError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Front matter parsing error
    FrontMatter(String),
    /// Markdown processing error
    Markdown(String),
    /// Page creation error
    Page(String),
    /// Plugin error
    Plugin(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for PressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PressError::Io(err) => write!(f, "IO error: {}", err),
            PressError::Config(msg) => write!(f, "Configuration error: {}", msg),
            PressError::FrontMatter(msg) => write!(f, "Front matter error: {}", msg),
            PressError::Markdown(msg) => write!(f, "Markdown error: {}", msg),
            PressError::Page(msg) => write!(f, "Page error: {}", msg),
            PressError::Plugin(msg) => write!(f, "Plugin error: {}", msg),
            PressError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for PressError {}

impl From<io::Error> for PressError {
    fn from(err: io::Error) -> Self {
        PressError::Io(err)
    }
}

impl From<String> for PressError {
    fn from(msg: String) -> Self {
        PressError::Generic(msg)
    }
}

impl From<&str> for PressError {
    fn from(msg: &str) -> Self {
        PressError::Generic(msg.to_string())
    }
}
