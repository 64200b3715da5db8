//! Directory search: case-insensitive substring filtering.
//!
//! Each searchable record exposes a fixed set of string fields. A record matches
//! a query when any of those fields contains the query, ignoring case. There is
//! no ranking: results keep the input order.
//!
//! # Example
//!
//! ```rust
//! use careboard::catalog::demo_catalog;
//! use careboard::directory::search;
//! use chrono::NaiveDate;
//!
//! let catalog = demo_catalog(42, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())?;
//! let hits = search(catalog.patients(), "ava");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id, "p3");
//! # Ok::<(), careboard::CareboardError>(())
//! ```

use crate::domain::{Doctor, Patient, TodaysAppointment};

/// A record that can be filtered by the directory search box.
pub trait Searchable {
    /// The string fields a query is matched against.
    fn search_fields(&self) -> Vec<&str>;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn search_fields(&self) -> Vec<&str> {
        (**self).search_fields()
    }
}

impl Searchable for Patient {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.patient_id, &self.phone]
    }
}

impl Searchable for Doctor {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.specialty]
    }
}

impl Searchable for TodaysAppointment {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.patient.name, &self.doctor.name]
    }
}

/// Normalizes a raw query.
///
/// Returns `None` for an empty or whitespace-only query, meaning "no filter".
/// Otherwise the query is lowercased but not trimmed, so `"ava "` still needs the
/// trailing space to match.
#[must_use]
pub fn normalize_query(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(fold(query))
    }
}

/// Lowercases one char at a time, without context-sensitive rules such as
/// final sigma, so a field and a query fold the same way.
fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn fold(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// Whether `record` matches an already-normalized query.
fn matches<T: Searchable>(record: &T, needle: &str) -> bool {
    record
        .search_fields()
        .into_iter()
        .any(|field| fold(field).contains(needle))
}

/// Indices of the records matching `query`, in input order.
#[must_use]
pub fn filter_indices<T: Searchable>(records: &[T], query: &str) -> Vec<usize> {
    match normalize_query(query) {
        None => (0..records.len()).collect(),
        Some(needle) => records
            .iter()
            .enumerate()
            .filter(|(_, record)| matches(*record, &needle))
            .map(|(i, _)| i)
            .collect(),
    }
}

/// Filters `records` by `query`, preserving order.
///
/// An empty or whitespace-only query returns every record.
#[must_use]
pub fn search<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    filter_indices(records, query)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

/// Character ranges of each case-insensitive occurrence of `query` in `text`.
///
/// Ranges are `(start, end)` character indices with exclusive end, and do not
/// overlap. Used to highlight matches in list rows.
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if normalize_query(query).is_none() {
        return Vec::new();
    }

    let hay: Vec<char> = text.chars().map(fold_char).collect();
    let needle: Vec<char> = query.chars().map(fold_char).collect();

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= hay.len() {
        if hay[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

/// Last query and its matching indices.
///
/// Recomputes only when the query value changes. Searchable fields never change
/// during a session (check-in only touches status), so a query-keyed cache
/// cannot go stale; [`SearchCache::refresh`] covers the case where the whole
/// record set is replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCache {
    query: String,
    matches: Vec<usize>,
    primed: bool,
}

impl SearchCache {
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Matching indices from the last computation.
    #[must_use]
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Sets the query, recomputing only if it differs from the cached one.
    ///
    /// Returns `true` if the match set was recomputed.
    pub fn update<T: Searchable>(&mut self, records: &[T], query: &str) -> bool {
        if self.primed && self.query == query {
            return false;
        }
        self.query = query.to_string();
        self.recompute(records);
        true
    }

    /// Recomputes against `records` with the current query.
    pub fn refresh<T: Searchable>(&mut self, records: &[T]) {
        self.recompute(records);
    }

    /// Clears the query and shows every record.
    pub fn reset<T: Searchable>(&mut self, records: &[T]) {
        self.query.clear();
        self.recompute(records);
    }

    fn recompute<T: Searchable>(&mut self, records: &[T]) {
        let _span = tracing::debug_span!(
            "search_filter",
            total = records.len(),
            query_len = self.query.len()
        )
        .entered();

        self.matches = filter_indices(records, &self.query);
        self.primed = true;

        tracing::debug!(matched = self.matches.len(), "search filter applied");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_query_means_no_filter() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   \t"), None);
        assert_eq!(normalize_query("Ava "), Some("ava ".to_string()));
    }

    #[test]
    fn match_ranges_are_case_insensitive_and_disjoint() {
        assert_eq!(match_ranges("Ava Patel", "AVA"), vec![(0, 3)]);
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert!(match_ranges("Ava Patel", "").is_empty());
        assert!(match_ranges("Ava", "Avalon").is_empty());
    }

    #[test]
    fn filtering_and_highlighting_fold_sigma_alike() {
        let doctors = vec![Doctor::new("doc1", "ΟΔΟΣ", "Ορθοπεδικός", true)];
        assert_eq!(search(&doctors, "Σ").len(), 1);
        assert_eq!(search(&doctors, "οσ").len(), 1);
        assert_eq!(match_ranges("ΟΔΟΣ", "Σ"), vec![(3, 4)]);
    }

    #[test]
    fn cache_skips_recompute_for_same_query() {
        let doctors = vec![
            Doctor::new("doc1", "Dr. Emily Carter", "Cardiologist", true),
            Doctor::new("doc2", "Dr. Daniel Harris", "Neurologist", false),
        ];
        let mut cache = SearchCache::default();

        assert!(cache.update(&doctors, ""));
        assert_eq!(cache.matches(), &[0, 1]);
        assert!(!cache.update(&doctors, ""));
        assert!(cache.update(&doctors, "neuro"));
        assert_eq!(cache.matches(), &[1]);
        assert!(!cache.update(&doctors, "neuro"));

        cache.reset(&doctors);
        assert_eq!(cache.query(), "");
        assert_eq!(cache.len(), 2);
    }
}
