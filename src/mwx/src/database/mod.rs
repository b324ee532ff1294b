//! Database export stage
//!
//! Runs after the XAsset compilers. Reads their exported JSON back as
//! untyped records, keeps the entries that are complete and have artwork,
//! strips fields the public database does not carry and writes each
//! collection twice: compact `<name>.json` and pretty `_<name>.json`.
//!
//! Every image name referenced along the way is collected into
//! `_images.txt` so missing artwork can be requested in bulk.

mod battle_passes;
mod bundles;
pub mod images;
mod loot;
pub mod normalize;
mod operators;
mod weapons;

use crate::context::Context;
use crate::error::{Error, Result};
use crate::paths::{write_bytes, write_json, write_json_compact, Paths};
use crate::text::format_thousands;
use serde_json::Value;
use std::collections::BTreeSet;

/// One exported JSON object
pub type Record = serde_json::Map<String, Value>;

/// `_images.txt` chunks stay below this many characters
pub const IMAGE_CHUNK_LIMIT: usize = 30_000;

const IMAGE_CHUNK_SEPARATOR: &str = "\n\n\n\n\n\n\n\n\n\n";

/// Totals threaded through the export passes
#[derive(Debug, Default)]
pub struct Database {
    count: usize,
    images: BTreeSet<String>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records written so far
    pub fn count(&self) -> usize {
        self.count
    }

    /// Distinct image names referenced so far
    pub fn images(&self) -> &BTreeSet<String> {
        &self.images
    }

    pub(crate) fn add_image(&mut self, name: &str) {
        if !self.images.contains(name) {
            self.images.insert(name.to_string());
        }
    }

    pub(crate) fn add_records(&mut self, n: usize) {
        self.count += n;
    }
}

/// Run every export pass and write `_images.txt`. Returns the record count.
pub fn compile(ctx: &Context, paths: &Paths) -> Result<usize> {
    let mut db = Database::new();

    battle_passes::compile(&mut db, paths)?;
    bundles::compile(&mut db, ctx, paths)?;
    loot::compile(&mut db, paths)?;
    operators::compile(&mut db, paths)?;
    weapons::compile(&mut db, paths)?;

    let list = image_list(db.images().iter().map(String::as_str));
    write_bytes(&paths.database_output("_images.txt"), list.as_bytes())?;

    tracing::info!("Compiled {} Database Items", format_thousands(db.count() as i64));
    Ok(db.count())
}

/// Read an exported XAsset file as records.
///
/// A missing file is logged and reads as empty; entries that are not
/// objects are ignored.
pub(crate) fn read_records(paths: &Paths, file: &str) -> Result<Vec<Record>> {
    let path = paths.xasset_output(file);
    if !path.is_file() {
        tracing::warn!("Skipping database input {}: not found", file);
        return Ok(Vec::new());
    }

    let text = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    let values: Vec<Value> = serde_json::from_str(&text).map_err(|e| Error::json(&path, e))?;

    Ok(values
        .into_iter()
        .filter_map(|v| match v {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect())
}

/// Write `<name>.json` (compact) and `_<name>.json` (pretty)
pub(crate) fn write_records(paths: &Paths, name: &str, records: &[Record]) -> Result<()> {
    write_json_compact(&paths.database_output(&format!("{}.json", name)), records)?;
    write_json(&paths.database_output(&format!("_{}.json", name)), records)
}

/// Comma-terminated image names, split into chunks below
/// [`IMAGE_CHUNK_LIMIT`] characters separated by ten newlines.
pub fn image_list<'a>(images: impl IntoIterator<Item = &'a str>) -> String {
    let mut chunks = Vec::new();
    let mut chunk = String::new();

    for image in images {
        let entry = format!("{},", image);
        if !chunk.is_empty() && chunk.len() + entry.len() >= IMAGE_CHUNK_LIMIT {
            chunks.push(std::mem::take(&mut chunk));
        }
        chunk.push_str(&entry);
    }
    if !chunk.is_empty() {
        chunks.push(chunk);
    }

    chunks.join(IMAGE_CHUNK_SEPARATOR)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::xassets::tests::paths;
    use serde_json::json;

    /// Write an exported XAsset file
    pub(crate) fn write_export(paths: &Paths, file: &str, value: Value) {
        write_json(&paths.xasset_output(file), &value).unwrap();
    }

    /// Write a minimal PNG header with the given dimensions
    pub(crate) fn write_png(paths: &Paths, name: &str, width: u32, height: u32) {
        let path = paths.image(name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        image::GrayImage::new(width, height).save(&path).unwrap();
    }

    pub(crate) fn read_output(paths: &Paths, name: &str) -> Value {
        let text = std::fs::read_to_string(paths.database_output(&format!("{}.json", name)))
            .unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn test_image_list_single_chunk() {
        let list = image_list(["a", "b", "c"]);
        assert_eq!(list, "a,b,c,");
        assert_eq!(image_list(std::iter::empty()), "");
    }

    #[test]
    fn test_image_list_chunks_keep_final_chunk() {
        let name = "x".repeat(9_999);
        let images = vec![name.as_str(); 4];
        let list = image_list(images);
        let chunks: Vec<&str> = list.split(IMAGE_CHUNK_SEPARATOR).collect();

        // 10,000 characters per entry, so two entries per chunk
        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c.len() < IMAGE_CHUNK_LIMIT));
        assert_eq!(chunks.iter().map(|c| c.matches(',').count()).sum::<usize>(), 4);
    }

    #[test]
    fn test_missing_inputs_write_empty_collections() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(dir.path());

        let count = compile(&Context::default(), &paths).unwrap();
        assert_eq!(count, 0);

        for name in ["battlePasses", "bundles", "loot", "operators", "weapons"] {
            assert_eq!(read_output(&paths, name), json!([]));
            assert!(paths.database_output(&format!("_{}.json", name)).exists());
        }
        let images = std::fs::read_to_string(paths.database_output("_images.txt")).unwrap();
        assert_eq!(images, "");
    }

    #[test]
    fn test_invalid_export_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(dir.path());
        write_bytes(&paths.xasset_output("bundles.json"), b"{not json").unwrap();

        let err = compile(&Context::default(), &paths).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn test_images_collected_across_passes() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(dir.path());
        write_export(
            &paths,
            "sprays.json",
            json!([
                {"id": 1, "name": "Spray", "type": "Spray", "rarity": "Rare", "image": "ui_spray"},
                {"id": 2, "name": "Other", "type": "Spray", "rarity": "Rare", "image": "ui_spray"},
            ]),
        );
        write_export(
            &paths,
            "weapons.json",
            json!([{
                "id": 5,
                "name": "M4",
                "type": "Assault Rifle",
                "icon": "ui_m4",
                "variants": [],
            }]),
        );

        compile(&Context::default(), &paths).unwrap();
        let images = std::fs::read_to_string(paths.database_output("_images.txt")).unwrap();
        assert_eq!(images, "ui_m4,ui_spray,");
    }
}
