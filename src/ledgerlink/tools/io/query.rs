//! Statements for the service's SQL-like query language.

/// Escapes a value for use inside a single-quoted literal by doubling every
/// single quote.
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// Statement returning only the number of `entity` records.
pub fn count_query(entity: &str) -> String {
    format!("SELECT COUNT(*) FROM {entity}")
}

/// Statement returning one page of `entity` records ordered by identifier.
/// `start_position` is 1-based.
pub fn page_query(entity: &str, start_position: usize, max_results: usize) -> String {
    format!(
        "SELECT * FROM {entity} ORDERBY Id STARTPOSITION {start_position} MAXRESULTS {max_results}"
    )
}

/// Statement matching `entity` records whose `field` equals `value` exactly.
pub fn equals_query(entity: &str, field: &str, value: &str) -> String {
    format!(
        "SELECT * FROM {entity} WHERE {field} = '{}'",
        escape_literal(value)
    )
}
