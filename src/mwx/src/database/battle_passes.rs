//! Battle passes (`battlePasses.json`)

use super::normalize::{has, strip};
use super::{read_records, write_records, Database};
use crate::error::Result;
use crate::paths::Paths;
use serde_json::Value;

pub(crate) fn compile(db: &mut Database, paths: &Paths) -> Result<()> {
    let passes: Vec<_> = read_records(paths, "battlePasses.json")?
        .into_iter()
        .filter(|pass| has(pass, "name"))
        .map(|mut pass| {
            if let Some(Value::Array(items)) = pass.get_mut("items") {
                for item in items.iter_mut().filter_map(Value::as_object_mut) {
                    strip(item, &["type", "billboard"]);
                }
            }
            pass
        })
        .collect();

    db.add_records(passes.len());
    write_records(paths, "battlePasses", &passes)
}
