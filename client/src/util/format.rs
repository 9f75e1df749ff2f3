//! Display formatting for table cells.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Placeholder for empty optional cells.
pub const EMPTY_CELL: &str = "—";

/// Render an ISO-8601 timestamp as `dd/mm/yyyy hh:mm`.
///
/// Input that does not look like `yyyy-mm-ddThh:mm...` is shown unchanged.
pub fn fecha(raw: &str) -> String {
    let Some((date, time)) = raw.split_once('T') else {
        return raw.to_owned();
    };
    let mut parts = date.split('-');
    let (Some(year), Some(month), Some(day), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
        return raw.to_owned();
    };
    let Some(hhmm) = time.get(..5).filter(|t| t.as_bytes().get(2) == Some(&b':')) else {
        return raw.to_owned();
    };
    format!("{day}/{month}/{year} {hhmm}")
}

/// Optional text cell.
pub fn optional(value: Option<&str>) -> String {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(EMPTY_CELL).to_owned()
}
