//! Filter queries: conjunctions of per-field constraints.
//!
//! A `FilterQuery` is a transient value built fresh for each user
//! interaction. It has no identity beyond one evaluation and is never
//! persisted.

use catalog::{BoundField, ChoiceField, FilmRecord};

/// A single condition on one field of a film record.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Exact, case-sensitive string equality. No normalization, no
    /// case-folding; an absent field never matches.
    Equals(ChoiceField, String),
    /// Inclusive numeric upper bound; an absent field never matches.
    AtMost(BoundField, u32),
}

impl Constraint {
    /// Whether `film` satisfies this constraint.
    pub fn is_satisfied_by(&self, film: &FilmRecord) -> bool {
        match self {
            Constraint::Equals(field, value) => {
                film.choice_value(*field).is_some_and(|v| v == value)
            }
            Constraint::AtMost(field, bound) => {
                film.bound_value(*field).is_some_and(|v| v <= *bound)
            }
        }
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constraint::Equals(field, value) => write!(f, "{} == {:?}", field, value),
            Constraint::AtMost(field, bound) => write!(f, "{} <= {}", field, bound),
        }
    }
}

/// A conjunction of constraints: a record matches iff it satisfies every
/// one of them. An empty query matches every record.
///
/// ## Usage
/// ```ignore
/// let query = FilterQuery::new()
///     .equals(ChoiceField::Actor, "X")
///     .equals(ChoiceField::Genre, "Drama")
///     .at_most(BoundField::Duration, 120);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterQuery {
    constraints: Vec<Constraint>,
}

impl FilterQuery {
    /// Create a new empty query (matches everything).
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
        }
    }

    /// Add an exact-match constraint (builder pattern).
    pub fn equals(mut self, field: ChoiceField, value: impl Into<String>) -> Self {
        self.constraints.push(Constraint::Equals(field, value.into()));
        self
    }

    /// Add an inclusive upper-bound constraint (builder pattern).
    pub fn at_most(mut self, field: BoundField, bound: u32) -> Self {
        self.constraints.push(Constraint::AtMost(field, bound));
        self
    }

    /// The constraints in this conjunction, in insertion order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Whether `film` satisfies every constraint in the conjunction.
    pub fn matches(&self, film: &FilmRecord) -> bool {
        self.constraints.iter().all(|c| c.is_satisfied_by(film))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film() -> FilmRecord {
        FilmRecord {
            title: "A".to_string(),
            actor: Some("X".to_string()),
            genre: Some("Drama".to_string()),
            director: Some("D1".to_string()),
            country: Some("US".to_string()),
            duration: Some(110),
            year: Some(2015),
        }
    }

    #[test]
    fn test_equality_is_exact_and_case_sensitive() {
        let film = film();
        assert!(Constraint::Equals(ChoiceField::Actor, "X".into()).is_satisfied_by(&film));
        assert!(!Constraint::Equals(ChoiceField::Actor, "x".into()).is_satisfied_by(&film));
        assert!(!Constraint::Equals(ChoiceField::Actor, "X ".into()).is_satisfied_by(&film));
    }

    #[test]
    fn test_absent_field_never_matches() {
        let mut film = film();
        film.actor = None;
        film.duration = None;
        assert!(!Constraint::Equals(ChoiceField::Actor, "X".into()).is_satisfied_by(&film));
        assert!(!Constraint::AtMost(BoundField::Duration, 240).is_satisfied_by(&film));
    }

    #[test]
    fn test_bound_is_inclusive() {
        let mut film = film();
        film.duration = Some(120);
        assert!(Constraint::AtMost(BoundField::Duration, 120).is_satisfied_by(&film));
        assert!(!Constraint::AtMost(BoundField::Duration, 119).is_satisfied_by(&film));
    }

    #[test]
    fn test_year_bound() {
        let film = film();
        assert!(Constraint::AtMost(BoundField::Year, 2015).is_satisfied_by(&film));
        assert!(!Constraint::AtMost(BoundField::Year, 2014).is_satisfied_by(&film));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(FilterQuery::new().matches(&film()));
    }

    #[test]
    fn test_conjunction_requires_all() {
        let query = FilterQuery::new()
            .equals(ChoiceField::Actor, "X")
            .at_most(BoundField::Duration, 120);
        assert!(query.matches(&film()));

        let query = query.equals(ChoiceField::Genre, "Comedy");
        assert!(!query.matches(&film()));
    }
}
