//! Errors produced while converting the dictionaries.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A `character` element had no `literal` or the literal was empty.
    /// The index is the position of the element in the document, starting from 0.
    #[error("Character #{index} is missing its literal")]
    MissingLiteral { index: usize },
    #[error("Failed to deserialize XML")]
    Xml(#[from] serde_xml_rs::Error),
    #[error("Failed to serialize JSON")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
