pub mod codec;
pub mod types;

#[cfg(test)]
pub mod testing;

pub use codec::{parse, serialize, CodecError, InventoryCodec};
pub use types::model::*;
pub use types::output::OutputFormat;
