//! CSV loading for the dashboard tables.
//!
//! Five tables ship with the dashboard. Only the actors/directors table and
//! the two top-10 tables have typed rows; the awards and revenue tables are
//! loaded and row-counted for the overview metrics but never queried, so
//! they stay untyped.
//!
//! Each table loads independently: a missing or malformed file fails that
//! table alone, and the views built on the other tables remain usable.

use crate::error::{DataLoadError, Result};
use crate::types::{Catalog, FilmRecord, ScoreEntry, ViewCount};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Actors/directors table: one row per film, the recommender's input.
pub const ACTORS_DIRECTORS_CSV: &str = "actores_directores.csv";
/// Top 10 most-viewed films: feeds the bar chart.
pub const TOP_VIEWED_CSV: &str = "top_10_mas_vistas.csv";
/// Top 10 best-rated films.
pub const TOP_RATED_CSV: &str = "top_10_mejor_puntuadas.csv";
/// Film awards table (dead data: loaded, never queried).
pub const AWARDS_CSV: &str = "peliculas_premios.csv";
/// Box-office revenue table (dead data: loaded, never queried).
pub const REVENUE_CSV: &str = "recaudacion_peliculas.csv";

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|_| DataLoadError::FileNotFound {
        path: path.display().to_string(),
    })
}

/// Deserialize every row of a headered CSV stream into `T`.
fn read_rows<T, R>(reader: R, file: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for result in csv_reader.deserialize() {
        let row: T = result.map_err(|source| DataLoadError::Csv {
            file: file.to_string(),
            source,
        })?;
        rows.push(row);
    }
    Ok(rows)
}

/// Load the film catalog from `actores_directores.csv` under `data_dir`.
pub fn load_catalog(data_dir: &Path) -> Result<Catalog> {
    let path = data_dir.join(ACTORS_DIRECTORS_CSV);
    let records: Vec<FilmRecord> = read_rows(open(&path)?, ACTORS_DIRECTORS_CSV)?;
    let catalog = Catalog::from_records(records);
    tracing::info!(films = catalog.len(), "loaded film catalog");
    Ok(catalog)
}

/// Load the top-10-most-viewed table.
pub fn load_top_viewed(data_dir: &Path) -> Result<Vec<ViewCount>> {
    let path = data_dir.join(TOP_VIEWED_CSV);
    read_rows(open(&path)?, TOP_VIEWED_CSV)
}

/// Load the top-10-best-rated table.
pub fn load_top_rated(data_dir: &Path) -> Result<Vec<ScoreEntry>> {
    let path = data_dir.join(TOP_RATED_CSV);
    read_rows(open(&path)?, TOP_RATED_CSV)
}

/// Count the data rows of an untyped CSV table, verifying it parses.
pub fn count_rows(data_dir: &Path, file: &str) -> Result<usize> {
    let path = data_dir.join(file);
    let mut csv_reader = csv::Reader::from_reader(open(&path)?);
    let mut count = 0;
    for result in csv_reader.records() {
        result.map_err(|source| DataLoadError::Csv {
            file: file.to_string(),
            source,
        })?;
        count += 1;
    }
    Ok(count)
}

/// Everything the dashboard knows how to load, with per-table outcomes.
///
/// Mirrors the application's startup: all five tables are read once, and a
/// failure in one surfaces as a message on the views that need it while the
/// rest of the session stays usable.
#[derive(Debug)]
pub struct DashboardData {
    pub films: Result<Catalog>,
    pub top_viewed: Result<Vec<ViewCount>>,
    pub top_rated: Result<Vec<ScoreEntry>>,
    /// Row count only: awards are never queried.
    pub award_rows: Result<usize>,
    /// Row count only: revenue is never queried.
    pub revenue_rows: Result<usize>,
}

impl DashboardData {
    /// Load all five tables from `data_dir`, parsing in parallel.
    pub fn load(data_dir: &Path) -> Self {
        // Nested rayon joins give us five-way parallelism across the files.
        let ((films, top_viewed), (top_rated, (award_rows, revenue_rows))) = rayon::join(
            || {
                rayon::join(
                    || load_catalog(data_dir),
                    || load_top_viewed(data_dir),
                )
            },
            || {
                rayon::join(
                    || load_top_rated(data_dir),
                    || {
                        rayon::join(
                            || count_rows(data_dir, AWARDS_CSV),
                            || count_rows(data_dir, REVENUE_CSV),
                        )
                    },
                )
            },
        );

        if let Ok(catalog) = &films {
            tracing::debug!(films = catalog.len(), "catalog table ready");
        }

        Self {
            films,
            top_viewed,
            top_rated,
            award_rows,
            revenue_rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILMS_CSV: &str = "\
actor,genero,director,pais,pelicula,duracion,anio
X,Drama,D1,US,A,110,2015
X,Drama,D1,US,B,130,2015
Y,,D2,AR,C,,2001
";

    #[test]
    fn test_read_film_rows() {
        let records: Vec<FilmRecord> =
            read_rows(FILMS_CSV.as_bytes(), ACTORS_DIRECTORS_CSV).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].title, "A");
        assert_eq!(records[0].duration, Some(110));
        // Empty cells deserialize to None
        assert_eq!(records[2].genre, None);
        assert_eq!(records[2].duration, None);
    }

    #[test]
    fn test_read_view_counts() {
        let csv = "pelicula,vistas\nA,900\nB,500\n";
        let rows: Vec<ViewCount> = read_rows(csv.as_bytes(), TOP_VIEWED_CSV).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "A");
        assert_eq!(rows[0].views, 900);
    }

    #[test]
    fn test_read_score_entries() {
        let csv = "pelicula,puntuacion\nA,9.1\nB,8.7\n";
        let rows: Vec<ScoreEntry> = read_rows(csv.as_bytes(), TOP_RATED_CSV).unwrap();
        assert_eq!(rows.len(), 2);
        assert!((rows[1].score - 8.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_malformed_row_is_an_error() {
        let csv = "pelicula,vistas\nA,not-a-number\n";
        let result: Result<Vec<ViewCount>> = read_rows(csv.as_bytes(), TOP_VIEWED_CSV);
        assert!(matches!(result, Err(DataLoadError::Csv { .. })));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_catalog(Path::new("/nonexistent")).unwrap_err();
        match err {
            DataLoadError::FileNotFound { path } => {
                assert!(path.contains(ACTORS_DIRECTORS_CSV));
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }
}
