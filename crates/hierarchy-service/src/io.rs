//! Reading and writing folder collections as JSON.

use std::io::Write;
use std::path::Path;

use hierarchy_core::error::{AppError, ErrorKind};
use hierarchy_core::result::AppResult;
use hierarchy_entity::folder::Folder;
use tracing::debug;

/// Parses a JSON array of folder records.
pub fn parse_folders(source: &str) -> AppResult<Vec<Folder>> {
    Ok(serde_json::from_str(source)?)
}

/// Reads a JSON array of folder records from a file.
pub fn load_folders(path: impl AsRef<Path>) -> AppResult<Vec<Folder>> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| {
        AppError::with_source(
            ErrorKind::Storage,
            format!("Failed to read '{}': {e}", path.display()),
            e,
        )
    })?;

    let folders = parse_folders(&source)?;
    debug!(path = %path.display(), count = folders.len(), "Loaded folders");
    Ok(folders)
}

/// Writes folder records as pretty-printed JSON followed by a newline.
pub fn write_folders<W: Write>(mut writer: W, folders: &[Folder]) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut writer, folders)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hierarchy_core::types::OrganizationId;

    #[test]
    fn test_write_then_parse() {
        let org = OrganizationId::from_str_or_nil("c59cc5c1-9b81-4d00-95e3-22c6efdaf134");
        let folders = vec![Folder::new("fold", org, "fold"), Folder::new("c1", org, "fold.c1")];

        let mut buf = Vec::new();
        write_folders(&mut buf, &folders).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("\"organizationId\""));
        assert!(text.ends_with("]\n"));

        assert_eq!(parse_folders(&text).expect("parse"), folders);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_folders("{\"name\":\"fold\"}").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Serialization);
    }

    #[test]
    fn test_missing_file_is_storage_error() {
        let err = load_folders("does/not/exist.json").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Storage);
        assert!(err.message.contains("does/not/exist.json"));
    }
}
