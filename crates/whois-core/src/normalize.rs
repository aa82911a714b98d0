//! Query normalization applied before automatic server selection.

use url::Host;

/// Canonicalize a query before it is classified.
///
/// Trailing dots are removed and internationalized domain names are
/// converted to their ASCII-compatible (punycode) form. Queries that are
/// already ASCII are left untouched apart from the dots, so handles and
/// AS numbers keep their case. If the conversion fails the dot-stripped
/// query is returned.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    let stripped = query.trim_end_matches('.');
    if stripped.is_ascii() {
        return stripped.to_string();
    }

    match Host::parse(stripped) {
        Ok(Host::Domain(ascii)) => ascii,
        _ => stripped.to_string(),
    }
}
