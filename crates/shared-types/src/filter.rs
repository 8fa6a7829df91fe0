//! Generic filterable-list core shared by every entity view.
//!
//! The booking, client, and property pages all derive their visible subset
//! the same way: an exact status filter plus a case-insensitive substring
//! search over a fixed per-entity field set. One generic function replaces
//! three parallel implementations.

/// Implemented by records that can appear in a searchable, filterable list.
pub trait Searchable {
    /// The fixed set of fields matched against the search term.
    fn search_fields(&self) -> Vec<&str>;

    /// The raw status value matched exactly against the status filter.
    fn status(&self) -> &str;
}

/// Sentinel filter value that matches every status.
pub const FILTER_ALL: &str = "all";

/// True if any of `fields` contains `term` case-insensitively.
///
/// An empty term matches everything.
pub fn matches_search(fields: &[&str], term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Derive the visible subset of `records` for the current search term and
/// status filter.
///
/// Pure derivation: source order is preserved, the input is never mutated,
/// and applying the same parameters twice yields the same set.
pub fn filter_records<T: Searchable + Clone>(
    records: &[T],
    search_term: &str,
    status_filter: &str,
) -> Vec<T> {
    records
        .iter()
        .filter(|r| status_filter == FILTER_ALL || r.status() == status_filter)
        .filter(|r| matches_search(&r.search_fields(), search_term))
        .cloned()
        .collect()
}
