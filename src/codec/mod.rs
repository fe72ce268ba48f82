pub mod error;
pub mod host;
pub mod line;
pub mod parse;
pub mod serialize;
pub mod token;

pub use error::CodecError;
pub use line::SectionKind;
pub use parse::parse;
pub use serialize::serialize;

use crate::types::model::Inventory;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// File-level wrapper around the pure codec.
///
/// [`parse`] and [`serialize`] stay synchronous and infallible; this type
/// owns the one concern the codec does not: getting text on and off disk.
pub struct InventoryCodec;

impl InventoryCodec {
    /// Read and parse an inventory file.
    pub async fn load(path: &Path) -> Result<Inventory, CodecError> {
        let bytes = fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CodecError::FileNotFound {
                    path: path.to_string_lossy().to_string(),
                }
            } else {
                CodecError::Io(e)
            }
        })?;

        let text = String::from_utf8(bytes).map_err(|_| CodecError::InvalidEncoding {
            path: path.to_string_lossy().to_string(),
        })?;

        debug!(path = %path.display(), bytes = text.len(), "loaded inventory file");
        Ok(parse(&text))
    }

    /// Serialize and write an inventory back to disk.
    ///
    /// Refuses to touch a read-only target so a viewer-mode caller cannot
    /// clobber a file it promised not to write.
    pub async fn save(path: &Path, inventory: &Inventory) -> Result<(), CodecError> {
        if let Ok(metadata) = fs::metadata(path).await {
            if metadata.permissions().readonly() {
                return Err(CodecError::ReadOnly {
                    path: path.to_string_lossy().to_string(),
                });
            }
        }

        fs::write(path, serialize(inventory)).await?;
        debug!(path = %path.display(), "saved inventory file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::{QUOTING_INVENTORY, SAMPLE_INVENTORY};
    use crate::testing::helpers::write_temp_inventory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sample_fixture_round_trip() {
        let first = parse(SAMPLE_INVENTORY);
        let second = parse(&serialize(&first));
        assert_eq!(second, first);
        // The fixture is already in canonical form, so even the text is stable.
        assert_eq!(serialize(&second), serialize(&first));
    }

    #[test]
    fn test_quoting_fixture_round_trip() {
        let first = parse(QUOTING_INVENTORY);
        let h1 = &first.ungrouped_hosts[0];
        assert_eq!(h1.comment.as_deref(), Some("Test #1 Server"));
        assert_eq!(h1.inline_comment, None);

        let second = parse(&serialize(&first));
        assert_eq!(second, first);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = InventoryCodec::load(Path::new("/nonexistent/hosts.ini")).await;
        match result {
            Err(CodecError::FileNotFound { path }) => assert!(path.contains("hosts.ini")),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hosts.ini");
        std::fs::write(&path, [0x5bu8, 0xff, 0xfe, 0x5d]).unwrap();

        let result = InventoryCodec::load(&path).await;
        assert!(matches!(result, Err(CodecError::InvalidEncoding { .. })));
    }

    #[tokio::test]
    async fn test_load_save_round_trip() {
        let file = write_temp_inventory("[web]\nw1 ansible_host=10.0.0.1\n");
        let inventory = InventoryCodec::load(file.path()).await.unwrap();
        assert_eq!(inventory.group("web").unwrap().hosts.len(), 1);

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.ini");
        InventoryCodec::save(&out, &inventory).await.unwrap();

        let reloaded = InventoryCodec::load(&out).await.unwrap();
        assert_eq!(reloaded, inventory);
    }

    #[tokio::test]
    async fn test_save_refuses_read_only_target() {
        let file = write_temp_inventory("w1\n");
        let mut perms = std::fs::metadata(file.path()).unwrap().permissions();
        perms.set_readonly(true);
        std::fs::set_permissions(file.path(), perms).unwrap();

        let result = InventoryCodec::save(file.path(), &Inventory::new()).await;
        assert!(matches!(result, Err(CodecError::ReadOnly { .. })));
    }
}
