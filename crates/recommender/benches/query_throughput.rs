//! Benchmarks for filter query evaluation
//!
//! Run with: cargo bench --package recommender
//!
//! Uses a synthetic catalog so the bench has no data-directory dependency.

use catalog::{BoundField, Catalog, ChoiceField, FilmRecord};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use recommender::{FilterQuery, Recommender};
use std::sync::Arc;

const ACTORS: [&str; 5] = ["A. Uno", "B. Dos", "C. Tres", "D. Cuatro", "E. Cinco"];
const GENRES: [&str; 4] = ["Drama", "Comedy", "Thriller", "Documentary"];
const DIRECTORS: [&str; 3] = ["Dir. X", "Dir. Y", "Dir. Z"];
const COUNTRIES: [&str; 4] = ["US", "AR", "ES", "MX"];

fn synthetic_catalog(size: usize) -> Arc<Catalog> {
    let records = (0..size)
        .map(|i| FilmRecord {
            title: format!("Film {i}"),
            actor: Some(ACTORS[i % ACTORS.len()].to_string()),
            genre: Some(GENRES[i % GENRES.len()].to_string()),
            director: Some(DIRECTORS[i % DIRECTORS.len()].to_string()),
            country: Some(COUNTRIES[i % COUNTRIES.len()].to_string()),
            duration: Some(60 + (i % 120) as u32),
            year: Some(1950 + (i % 75) as u16),
        })
        .collect();
    Arc::new(Catalog::from_records(records))
}

fn bench_full_quiz_query(c: &mut Criterion) {
    let engine = Recommender::new(synthetic_catalog(50_000));
    let query = FilterQuery::new()
        .equals(ChoiceField::Actor, ACTORS[0])
        .equals(ChoiceField::Genre, GENRES[0])
        .equals(ChoiceField::Director, DIRECTORS[0])
        .equals(ChoiceField::Country, COUNTRIES[0])
        .at_most(BoundField::Duration, 120)
        .at_most(BoundField::Year, 2020);

    c.bench_function("quiz_query_50k", |b| {
        b.iter(|| {
            let matches = engine.query(black_box(&query));
            black_box(matches)
        })
    });
}

fn bench_recommend_truncation(c: &mut Criterion) {
    let engine = Recommender::new(synthetic_catalog(50_000));
    let query = FilterQuery::new().equals(ChoiceField::Genre, GENRES[0]);

    c.bench_function("recommend_top3_50k", |b| {
        b.iter(|| {
            let matches = engine.recommend(black_box(&query), black_box(3));
            black_box(matches)
        })
    });
}

fn bench_distinct_values(c: &mut Criterion) {
    let engine = Recommender::new(synthetic_catalog(50_000));

    c.bench_function("distinct_actors_50k", |b| {
        b.iter(|| {
            let values = engine.distinct_values(black_box(ChoiceField::Actor));
            black_box(values)
        })
    });
}

criterion_group!(
    benches,
    bench_full_quiz_query,
    bench_recommend_truncation,
    bench_distinct_values
);
criterion_main!(benches);
