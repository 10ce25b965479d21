use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("invalid color format {0:?} (expected 6 hex digits)")]
    InvalidColorFormat(String),
    #[error("unknown palette color {0:?}")]
    UnknownColor(String),
}

pub type Result<T> = std::result::Result<T, PaletteError>;
