//! Small text helpers shared by the compilers

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};

/// Quantity token used by challenge and store templates
pub const QUANTITY_TOKEN: &str = "&&1";

/// Format an integer with thousands separators (`1234567` -> `1,234,567`).
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Fill the `&&1` token of a template with a grouped quantity.
///
/// Both parts are required; `record` names the row in the error.
pub fn substitute(template: Option<&str>, amount: Option<i64>, record: &str) -> Result<String> {
    let template = template.ok_or_else(|| Error::Template {
        record: record.to_string(),
        reason: "template text is absent",
    })?;
    let amount = amount.ok_or_else(|| Error::Template {
        record: record.to_string(),
        reason: "quantity is absent",
    })?;

    Ok(template.replace(QUANTITY_TOKEN, &format_thousands(amount)))
}

/// Fill the `&&1` token when both parts are present, otherwise keep what there is.
pub fn substitute_lenient(template: Option<String>, amount: Option<i64>) -> Option<String> {
    match (template, amount) {
        (Some(t), Some(a)) => Some(t.replace(QUANTITY_TOKEN, &format_thousands(a))),
        (t, _) => t,
    }
}

/// Capitalize the first letter of every word, lowercase the rest.
///
/// Word boundaries are any non-alphabetic character, so `"it's"` becomes
/// `"It'S"`, the same rule the game's menu scripts use.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut boundary = true;

    for c in value.chars() {
        if c.is_alphabetic() {
            if boundary {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            boundary = false;
        } else {
            out.push(c);
            boundary = true;
        }
    }

    out
}

/// URL slug: lowercase ASCII alphanumeric runs joined by single dashes.
pub fn slugify(value: &str) -> String {
    value
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Unix seconds to a long-form date, e.g. `Tuesday, April 7, 2020`.
pub fn pretty_time(timestamp: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp(timestamp, 0).map(|t| t.format("%A, %B %-d, %Y").to_string())
}
