//! Table join helpers
//!
//! Compilers build their records from a primary table, then fold display
//! data from a secondary table onto them by reference string.

use crate::table::{Row, Table};

/// Apply every secondary row whose key matches.
///
/// The whole table is scanned for each record, so with duplicate keys the
/// last matching row is applied last and its fields win.
pub fn join_by_ref<T, K, F>(records: &mut [T], table: &Table, column: &str, key: K, mut apply: F)
where
    K: Fn(&T) -> Option<&str>,
    F: FnMut(&mut T, Row<'_>),
{
    for record in records.iter_mut() {
        let Some(wanted) = key(record).map(str::to_owned) else {
            continue;
        };
        for row in table.rows() {
            if row.str(column) == Some(wanted.as_str()) {
                apply(record, row);
            }
        }
    }
}

/// Group consecutive rows sharing a key.
///
/// Rows must already be ordered so that the key only changes at group
/// boundaries; a key reappearing later starts a new group.
pub fn group_adjacent<'a>(table: &'a Table, column: &str) -> Vec<Vec<Row<'a>>> {
    let mut groups: Vec<Vec<Row<'a>>> = Vec::new();
    let mut last: Option<Option<&'a str>> = None;

    for row in table.rows() {
        let key = row.str(column);
        match groups.last_mut() {
            Some(group) if last == Some(key) => group.push(row),
            _ => groups.push(vec![row]),
        }
        last = Some(key);
    }

    groups
}
