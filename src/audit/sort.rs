//! Row ordering.

use std::cmp::Ordering;

use super::DiagnosticRow;

/// Sorts rows in place: errored rows first, then by script URL descending.
///
/// Rows without a script URL sort after every row that has one. The sort
/// is stable, so fully equal keys keep their input order.
pub fn sort_rows(rows: &mut [DiagnosticRow]) {
    rows.sort_by(compare_rows);
}

fn compare_rows(a: &DiagnosticRow, b: &DiagnosticRow) -> Ordering {
    b.error.is_some().cmp(&a.error.is_some()).then_with(|| {
        match (a.script_url.as_deref(), b.script_url.as_deref()) {
            (Some(x), Some(y)) => y.cmp(x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    })
}
