//! Input and output locations for a compile run

use crate::error::{Error, Result};
use crate::table::Table;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Directory layout of a compile run
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root of the dumped asset tables and `localize.json`
    pub import_xassets: PathBuf,
    /// Exported images, used by the database stage
    pub import_images: PathBuf,
    /// Per-XAsset JSON output
    pub export_xassets: PathBuf,
    /// Database stage output
    pub export_database: PathBuf,
}

impl Paths {
    /// Read a table under the import root.
    ///
    /// Missing or unreadable tables are logged and yield `None`; the caller
    /// skips that table.
    pub fn table(
        &self,
        relative: &str,
        columns: &'static [&'static str],
        skip_rows: usize,
    ) -> Option<Table> {
        let path = self.import_xassets.join(relative);
        match Table::read(&path, columns, skip_rows) {
            Ok(table) => {
                tracing::debug!("Read {} rows from {}", table.len(), relative);
                Some(table)
            }
            Err(e) => {
                tracing::warn!("Skipping table {}: {}", relative, e);
                None
            }
        }
    }

    pub fn localize(&self) -> PathBuf {
        self.import_xassets.join("localize.json")
    }

    pub fn xasset_output(&self, file: &str) -> PathBuf {
        self.export_xassets.join(file)
    }

    pub fn database_output(&self, file: &str) -> PathBuf {
        self.export_database.join(file)
    }

    pub fn image(&self, name: &str) -> PathBuf {
        self.import_images.join(format!("{}.png", name))
    }
}

/// Write a value as 4-space indented JSON, creating parent directories.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .map_err(|e| Error::Serialize(path.display().to_string(), e))?;
    write_bytes(path, &buf)
}

/// Write a value as compact JSON, creating parent directories.
pub fn write_json_compact<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let buf =
        serde_json::to_vec(value).map_err(|e| Error::Serialize(path.display().to_string(), e))?;
    write_bytes(path, &buf)
}

pub(crate) fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    std::fs::write(path, bytes).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(root: &Path) -> Paths {
        Paths {
            import_xassets: root.join("in"),
            import_images: root.join("images"),
            export_xassets: root.join("out"),
            export_database: root.join("db"),
        }
    }

    #[test]
    fn test_missing_table_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(dir.path());
        assert!(paths.table("loot/charm_ids.csv", &["id"], 0).is_none());
    }

    #[test]
    fn test_table_and_image_paths() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(dir.path());
        std::fs::create_dir_all(dir.path().join("in/loot")).unwrap();
        std::fs::write(dir.path().join("in/loot/charm_ids.csv"), "1\n2\n").unwrap();

        let table = paths.table("loot/charm_ids.csv", &["id"], 0).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(paths.image("ui_charm"), dir.path().join("images/ui_charm.png"));
    }

    #[test]
    fn test_write_json_formats() {
        let dir = tempfile::tempdir().unwrap();
        let pretty = dir.path().join("nested/pretty.json");
        let compact = dir.path().join("compact.json");
        let value = serde_json::json!([{"name": "Ä", "id": 1}]);

        write_json(&pretty, &value).unwrap();
        write_json_compact(&compact, &value).unwrap();

        let pretty = std::fs::read_to_string(pretty).unwrap();
        assert!(pretty.contains("\n        \"name\": \"Ä\""));
        assert_eq!(
            std::fs::read_to_string(compact).unwrap(),
            r#"[{"name":"Ä","id":1}]"#
        );
    }
}
