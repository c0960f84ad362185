//! The recommender engine: point queries over the shared catalog.
//!
//! Every operation here is a pure, synchronous function of the catalog and
//! its arguments. The catalog is read-only after load, so one `Recommender`
//! can serve any number of concurrent sessions without locking; each
//! session's query/result pair is session-local.

use crate::query::FilterQuery;
use catalog::{Catalog, ChoiceField, FilmRecord};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Default result count for the direct recommender view.
pub const RECOMMEND_LIMIT: usize = 3;
/// Default result count for the quiz view.
pub const QUIZ_LIMIT: usize = 5;

/// Answers point queries of the form "all films matching a set of
/// constraints", in catalog order, truncated to a caller-chosen limit.
///
/// The direct recommender and the quiz are the same operation with
/// different limits; there is deliberately no second code path.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
}

impl Recommender {
    /// Create a recommender over a shared catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The sorted, de-duplicated, non-empty values a categorical field
    /// takes across the catalog. Populates selectable-choice widgets.
    pub fn distinct_values(&self, field: ChoiceField) -> Vec<String> {
        let values: BTreeSet<&str> = self
            .catalog
            .films()
            .iter()
            .filter_map(|film| film.choice_value(field))
            .collect();
        values.into_iter().map(str::to_string).collect()
    }

    /// All films satisfying every constraint of `query`, in catalog order.
    ///
    /// An empty result is a normal outcome, not an error; an empty query
    /// returns the whole catalog.
    pub fn query(&self, query: &FilterQuery) -> Vec<&FilmRecord> {
        let matches: Vec<&FilmRecord> = self
            .catalog
            .films()
            .iter()
            .filter(|film| query.matches(film))
            .collect();
        tracing::debug!(
            constraints = query.len(),
            candidates = self.catalog.len(),
            matches = matches.len(),
            "evaluated filter query"
        );
        matches
    }

    /// `query` truncated to its first `limit` matches.
    pub fn recommend(&self, query: &FilterQuery, limit: usize) -> Vec<&FilmRecord> {
        let mut matches = self.query(query);
        matches.truncate(limit);
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::FilmRecord;

    fn film(title: &str, actor: Option<&str>) -> FilmRecord {
        FilmRecord {
            title: title.to_string(),
            actor: actor.map(str::to_string),
            genre: Some("Drama".to_string()),
            director: Some("D1".to_string()),
            country: Some("US".to_string()),
            duration: Some(110),
            year: Some(2015),
        }
    }

    fn recommender() -> Recommender {
        let catalog = Catalog::from_records(vec![
            film("A", Some("X")),
            film("B", Some("Y")),
            film("C", None),
            film("D", Some("X")),
        ]);
        Recommender::new(Arc::new(catalog))
    }

    #[test]
    fn test_distinct_values_sorted_and_non_null() {
        let rec = recommender();
        // "C" has no actor and must not contribute an entry
        assert_eq!(rec.distinct_values(ChoiceField::Actor), vec!["X", "Y"]);
        assert_eq!(rec.distinct_values(ChoiceField::Director), vec!["D1"]);
    }

    #[test]
    fn test_query_preserves_catalog_order() {
        let rec = recommender();
        let query = FilterQuery::new().equals(ChoiceField::Actor, "X");
        let titles: Vec<_> = rec.query(&query).iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "D"]);
    }

    #[test]
    fn test_recommend_truncates() {
        let rec = recommender();
        let all = rec.recommend(&FilterQuery::new(), 2);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "A");
        assert_eq!(all[1].title, "B");
    }

    #[test]
    fn test_recommend_limit_beyond_matches() {
        let rec = recommender();
        let query = FilterQuery::new().equals(ChoiceField::Actor, "Y");
        assert_eq!(rec.recommend(&query, QUIZ_LIMIT).len(), 1);
    }
}
