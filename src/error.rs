//! Central error handling for the sponge renderer.
//!
//! One enum covers the whole pipeline: configuration problems are rejected
//! before any GPU work, everything else is fatal for the run.

/// Categorized error type for all renderer operations.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Graphics init error: {0}")]
    GraphicsInit(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Readback error: {0}")]
    Readback(String),

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    pub fn config<T: ToString>(msg: T) -> Self {
        RenderError::Config(msg.to_string())
    }

    pub fn graphics_init<T: ToString>(msg: T) -> Self {
        RenderError::GraphicsInit(msg.to_string())
    }

    pub fn render<T: ToString>(msg: T) -> Self {
        RenderError::Render(msg.to_string())
    }

    pub fn readback<T: ToString>(msg: T) -> Self {
        RenderError::Readback(msg.to_string())
    }

    pub fn encode<T: ToString>(msg: T) -> Self {
        RenderError::Encode(msg.to_string())
    }
}

/// Result type alias for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;
