//! Operators (`operators.json`) with their skins, executions and quips
//!
//! Cosmetics are linked by operator id. Universal ids stand in for groups
//! of operators:
//!
//! - `29999`: every Modern Warfare operator
//! - `29998`: Modern Warfare launch operators (skins only)
//! - `29997`: every Cold War operator (executions only)

use super::images;
use super::normalize::{
    add_slug, drop_null, has_all, normalize_availability, sort_records, str_field, strip,
};
use super::{read_records, write_records, Database, Record};
use crate::error::Result;
use crate::paths::Paths;
use crate::reference::{OPERATOR_T9_EXCLUSIVE, OPERATOR_UNIVERSAL, OPERATOR_UNIVERSAL_BASE};
use serde_json::Value;

const INTERNAL: &[&str] = &[
    "altId",
    "type",
    "rarity",
    "branchIcon",
    "thumbprint",
    "launchOperator",
    "video",
    "hidden",
    "billets",
];

const OPTIONAL: &[&str] = &["season", "description", "branch"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    Skin,
    Execution,
    Quip,
}

/// The operator fields a cosmetic link depends on
#[derive(Debug, Clone, Copy)]
struct Operator {
    id: Option<i64>,
    cold_war: bool,
    launch: bool,
}

impl Operator {
    fn from_record(record: &Record) -> Self {
        Self {
            id: record.get("id").and_then(Value::as_i64),
            cold_war: str_field(record, "altId").is_some_and(|a| a.starts_with("t9")),
            launch: record
                .get("launchOperator")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }
    }

    /// Whether a cosmetic with `operator_id` belongs to this operator
    fn owns(&self, link: Link, operator_id: i64) -> bool {
        if Some(operator_id) == self.id {
            return true;
        }
        match (link, operator_id) {
            (_, OPERATOR_UNIVERSAL) => !self.cold_war,
            (Link::Skin, OPERATOR_UNIVERSAL_BASE) => !self.cold_war && self.launch,
            (Link::Execution, OPERATOR_T9_EXCLUSIVE) => self.cold_war,
            _ => false,
        }
    }
}

/// A cosmetic that can be linked to an operator
#[derive(Debug, Clone)]
struct Linkable {
    id: Value,
    image: String,
    operator_id: i64,
}

/// Complete cosmetics of one export, sorted by name and rarity
fn linkables(paths: &Paths, file: &str) -> Result<Vec<Linkable>> {
    let mut records = read_records(paths, file)?;
    sort_records(&mut records, "name", "rarity");

    Ok(records
        .iter()
        .filter(|r| has_all(r, &["id", "name"]))
        .filter_map(|r| {
            Some(Linkable {
                id: r.get("id")?.clone(),
                image: str_field(r, "image")?.to_string(),
                operator_id: r.get("operatorId").and_then(Value::as_i64)?,
            })
        })
        .collect())
}

pub(crate) fn compile(db: &mut Database, paths: &Paths) -> Result<()> {
    let operators = read_records(paths, "operators.json")?;
    let links = [
        (Link::Skin, "skins", linkables(paths, "operatorSkins.json")?),
        (Link::Execution, "executions", linkables(paths, "executions.json")?),
        (Link::Quip, "quips", linkables(paths, "operatorQuips.json")?),
    ];

    let mut out = Vec::new();
    for mut record in operators {
        if !has_all(&record, &["id", "name", "type"]) {
            continue;
        }
        let Some(image) = str_field(&record, "image").map(str::to_owned) else {
            continue;
        };

        db.add_image(&image);
        if !images::exists(paths, &image) {
            continue;
        }

        let operator = Operator::from_record(&record);
        for (link, key, cosmetics) in &links {
            let mut ids = Vec::new();
            for cosmetic in cosmetics {
                db.add_image(&cosmetic.image);
                if !images::exists(paths, &cosmetic.image) {
                    continue;
                }
                if operator.owns(*link, cosmetic.operator_id) {
                    ids.push(cosmetic.id.clone());
                }
            }
            record.insert(key.to_string(), Value::Array(ids));
        }
        add_slug(&mut record);

        strip(&mut record, INTERNAL);
        drop_null(&mut record, OPTIONAL);
        normalize_availability(&mut record);

        out.push(record);
    }

    sort_records(&mut out, "name", "faction");
    db.add_records(out.len());
    write_records(paths, "operators", &out)
}
