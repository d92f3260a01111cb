use thiserror::Error;

/// Why the lighthouse dataset could not be loaded. Every variant is terminal for the session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("GeoJSON request failed: {0}")]
    Transport(String),

    #[error("GeoJSON load failed: {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("GeoJSON parse error: {0}")]
    Parse(String),
}
