#[derive(Debug, thiserror::Error)]
pub enum ResizeError {
    #[error("No global window available")]
    NoWindow,

    #[error("Element has no id attribute")]
    MissingId,

    #[error("Invalid options: {0}")]
    Options(String),

    #[error("ResizeObserver error: {0}")]
    Observer(String),

    #[error("Logger error: {0}")]
    Logger(String),
}

impl From<serde_json::Error> for ResizeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Options(e.to_string())
    }
}

impl From<log::SetLoggerError> for ResizeError {
    fn from(e: log::SetLoggerError) -> Self {
        Self::Logger(e.to_string())
    }
}
