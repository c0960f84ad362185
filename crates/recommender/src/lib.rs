//! # Recommender Crate
//!
//! Rule-based film recommendation over the in-memory catalog.
//!
//! This crate provides:
//! - `FilterQuery` and `Constraint` for describing conjunctions of
//!   equality and upper-bound conditions
//! - `Recommender` for evaluating them against a shared catalog
//!
//! ## Architecture
//! There is no ranking, scoring or fuzzy matching: a query is a boolean
//! mask over the catalog, results keep catalog order, and `recommend` is
//! `query` plus truncation to the first `limit` matches.
//!
//! ## Example Usage
//! ```ignore
//! use recommender::{FilterQuery, Recommender, RECOMMEND_LIMIT};
//! use catalog::{BoundField, ChoiceField};
//!
//! let engine = Recommender::new(catalog.clone());
//!
//! let query = FilterQuery::new()
//!     .equals(ChoiceField::Actor, "Ricardo Darín")
//!     .equals(ChoiceField::Genre, "Drama")
//!     .at_most(BoundField::Year, 2020);
//!
//! for film in engine.recommend(&query, RECOMMEND_LIMIT) {
//!     println!("{}", film.title);
//! }
//! ```

pub mod engine;
pub mod query;

// Re-export main types
pub use engine::{QUIZ_LIMIT, RECOMMEND_LIMIT, Recommender};
pub use query::{Constraint, FilterQuery};
