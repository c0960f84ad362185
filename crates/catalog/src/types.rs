//! Core domain types for the film dashboard.
//!
//! The source CSVs use Spanish column headers (`pelicula`, `genero`,
//! `pais`, ...); serde renames map them onto the English field names used
//! everywhere else in the workspace.

use serde::{Deserialize, Serialize};

// =============================================================================
// Field Selectors
// =============================================================================

/// The categorical fields that accept exact-match constraints and feed
/// selectable-choice widgets via `distinct_values`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChoiceField {
    Actor,
    Genre,
    Director,
    Country,
}

impl ChoiceField {
    /// All choice fields, in the order the dashboard presents them.
    pub const ALL: [ChoiceField; 4] = [
        ChoiceField::Actor,
        ChoiceField::Genre,
        ChoiceField::Director,
        ChoiceField::Country,
    ];
}

impl std::fmt::Display for ChoiceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ChoiceField::Actor => "actor",
            ChoiceField::Genre => "genre",
            ChoiceField::Director => "director",
            ChoiceField::Country => "country",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for ChoiceField {
    type Err = crate::error::DataLoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "actor" => Ok(ChoiceField::Actor),
            "genre" => Ok(ChoiceField::Genre),
            "director" => Ok(ChoiceField::Director),
            "country" => Ok(ChoiceField::Country),
            _ => Err(crate::error::DataLoadError::UnknownField {
                field: s.to_string(),
            }),
        }
    }
}

/// The numeric fields that accept inclusive upper-bound constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundField {
    /// Runtime in minutes.
    Duration,
    /// Release year.
    Year,
}

impl std::fmt::Display for BoundField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BoundField::Duration => "duration",
            BoundField::Year => "year",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// Film Records
// =============================================================================

/// One row of the actors/directors table.
///
/// Every field except the title may be absent in the source data. An absent
/// field never matches a concrete filter value, so all of them are `Option`;
/// the loader additionally turns whitespace-only strings into `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmRecord {
    /// Display key, not guaranteed unique.
    #[serde(rename = "pelicula")]
    pub title: String,
    pub actor: Option<String>,
    #[serde(rename = "genero")]
    pub genre: Option<String>,
    pub director: Option<String>,
    #[serde(rename = "pais")]
    pub country: Option<String>,
    /// Runtime in minutes.
    #[serde(rename = "duracion")]
    pub duration: Option<u32>,
    /// Release year.
    #[serde(rename = "anio")]
    pub year: Option<u16>,
}

impl FilmRecord {
    /// The value this record carries for a categorical field, if present.
    pub fn choice_value(&self, field: ChoiceField) -> Option<&str> {
        let value = match field {
            ChoiceField::Actor => &self.actor,
            ChoiceField::Genre => &self.genre,
            ChoiceField::Director => &self.director,
            ChoiceField::Country => &self.country,
        };
        value.as_deref()
    }

    /// The value this record carries for a numeric field, if present.
    ///
    /// Years widen to `u32` so both bound fields compare under one type.
    pub fn bound_value(&self, field: BoundField) -> Option<u32> {
        match field {
            BoundField::Duration => self.duration,
            BoundField::Year => self.year.map(u32::from),
        }
    }

    /// Drop whitespace-only string fields so they behave like absent data.
    pub(crate) fn normalize(mut self) -> Self {
        fn clean(value: &mut Option<String>) {
            if value.as_deref().is_some_and(|s| s.trim().is_empty()) {
                *value = None;
            }
        }
        clean(&mut self.actor);
        clean(&mut self.genre);
        clean(&mut self.director);
        clean(&mut self.country);
        self
    }
}

// =============================================================================
// Catalog - The Read-Only In-Memory Table
// =============================================================================

/// The immutable in-memory table of film records.
///
/// Ordering matters: iteration order equals source file order, and every
/// query result preserves it. The catalog is never mutated after load, so it
/// can be shared across concurrent readers behind an `Arc` with no locking.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    films: Vec<FilmRecord>,
}

impl Catalog {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self { films: Vec::new() }
    }

    /// Build a catalog from already-parsed records, normalizing blank
    /// string fields to `None`.
    pub fn from_records(records: Vec<FilmRecord>) -> Self {
        Self {
            films: records.into_iter().map(FilmRecord::normalize).collect(),
        }
    }

    /// All records, in source file order.
    pub fn films(&self) -> &[FilmRecord] {
        &self.films
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }
}

// =============================================================================
// Supplementary Tables
// =============================================================================

/// One row of the top-10-most-viewed table. Feeds the bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewCount {
    #[serde(rename = "pelicula")]
    pub title: String,
    #[serde(rename = "vistas")]
    pub views: u64,
}

/// One row of the top-10-best-rated table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    #[serde(rename = "pelicula")]
    pub title: String,
    #[serde(rename = "puntuacion")]
    pub score: f32,
}
