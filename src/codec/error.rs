use thiserror::Error;

/// Collaborator-boundary failures only.
///
/// The codec itself never rejects input: any string parses to a best-effort
/// [`Inventory`](crate::types::model::Inventory). Errors arise solely around
/// file access in [`InventoryCodec`](crate::codec::InventoryCodec).
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Inventory file not found: {path}")]
    FileNotFound { path: String },

    #[error("Inventory file is not valid UTF-8: {path}")]
    InvalidEncoding { path: String },

    #[error("Inventory file is read-only: {path}")]
    ReadOnly { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
