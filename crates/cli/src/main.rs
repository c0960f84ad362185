use anyhow::{Context, Result};
use catalog::{loader, BoundField, ChoiceField, DashboardData, FilmRecord};
use clap::{Parser, Subcommand};
use colored::Colorize;
use recommender::{FilterQuery, Recommender, QUIZ_LIMIT, RECOMMEND_LIMIT};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// CineDash - Film analysis dashboard and recommender
#[derive(Parser)]
#[command(name = "cinedash")]
#[command(about = "Explore film statistics and get rule-based movie recommendations", long_about = None)]
struct Cli {
    /// Path to the directory holding the dashboard CSV tables
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Welcome page with headline statistics for each table
    Overview,

    /// Bar chart of the top 10 most-viewed films
    Chart {
        /// Maximum bar width in terminal cells
        #[arg(long, default_value = "50")]
        width: usize,
    },

    /// The top-viewed and top-rated tables as text lists
    Top,

    /// List the selectable values of a filter field
    Values {
        /// Field to list: actor, genre, director or country
        #[arg(long)]
        field: ChoiceField,
    },

    /// Recommend films matching exact filters (first 3 matches)
    Recommend {
        /// Exact actor name to match
        #[arg(long)]
        actor: Option<String>,

        /// Exact genre to match
        #[arg(long)]
        genre: Option<String>,

        /// Exact director name to match
        #[arg(long)]
        director: Option<String>,

        /// Exact country of origin to match
        #[arg(long)]
        country: Option<String>,

        /// Number of recommendations to return
        #[arg(long, default_value_t = RECOMMEND_LIMIT)]
        limit: usize,
    },

    /// Six-question quiz: four exact filters plus two upper bounds (first 5 matches)
    Quiz {
        /// Exact actor name to match
        #[arg(long)]
        actor: String,

        /// Exact genre to match
        #[arg(long)]
        genre: String,

        /// Exact director name to match
        #[arg(long)]
        director: String,

        /// Exact country of origin to match
        #[arg(long)]
        country: String,

        /// Longest acceptable runtime, in minutes (inclusive)
        #[arg(long, default_value_t = 120, value_parser = clap::value_parser!(u32).range(60..=240))]
        max_duration: u32,

        /// Latest acceptable release year (inclusive)
        #[arg(long, default_value_t = 2020, value_parser = clap::value_parser!(u16).range(1950..=2025))]
        max_year: u16,
    },

    /// About this project
    About,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Overview => handle_overview(&cli.data_dir),
        Commands::Chart { width } => handle_chart(&cli.data_dir, width),
        Commands::Top => handle_top(&cli.data_dir),
        Commands::Values { field } => handle_values(&cli.data_dir, field),
        Commands::Recommend {
            actor,
            genre,
            director,
            country,
            limit,
        } => {
            let query = build_query(actor, genre, director, country);
            handle_recommend(&cli.data_dir, &query, limit, false)
        }
        Commands::Quiz {
            actor,
            genre,
            director,
            country,
            max_duration,
            max_year,
        } => {
            let query = build_query(Some(actor), Some(genre), Some(director), Some(country))
                .at_most(BoundField::Duration, max_duration)
                .at_most(BoundField::Year, u32::from(max_year));
            handle_recommend(&cli.data_dir, &query, QUIZ_LIMIT, true)
        }
        Commands::About => handle_about(),
    }
}

/// Turn the four optional exact filters into a conjunction.
fn build_query(
    actor: Option<String>,
    genre: Option<String>,
    director: Option<String>,
    country: Option<String>,
) -> FilterQuery {
    let mut query = FilterQuery::new();
    if let Some(actor) = actor {
        query = query.equals(ChoiceField::Actor, actor);
    }
    if let Some(genre) = genre {
        query = query.equals(ChoiceField::Genre, genre);
    }
    if let Some(director) = director {
        query = query.equals(ChoiceField::Director, director);
    }
    if let Some(country) = country {
        query = query.equals(ChoiceField::Country, country);
    }
    query
}

/// Load the film catalog, reporting how long the load took.
fn load_films(data_dir: &Path) -> Result<Arc<catalog::Catalog>> {
    let start = Instant::now();
    let films = loader::load_catalog(data_dir).context("Failed to load the film catalog")?;
    println!(
        "{} Loaded {} films in {:?}",
        "✓".green(),
        films.len(),
        start.elapsed()
    );
    Ok(Arc::new(films))
}

/// Handle the 'overview' command
fn handle_overview(data_dir: &Path) -> Result<()> {
    let data = DashboardData::load(data_dir);

    println!("{}", "Welcome to the film analysis dashboard".bold().blue());
    println!("Explore data about films, actors, directors and more.\n");
    println!("{}", "Some statistics".bold());

    match &data.films {
        Ok(films) => {
            let engine = Recommender::new(Arc::new(films.clone()));
            let countries = engine.distinct_values(ChoiceField::Country).len();
            print_metric("Films in catalog", &films.len().to_string());
            print_metric("Countries with data", &countries.to_string());
        }
        Err(e) => print_unavailable("Film catalog", e),
    }
    match &data.top_viewed {
        Ok(rows) => print_metric("Top-viewed films", &rows.len().to_string()),
        Err(e) => print_unavailable("Top-viewed table", e),
    }
    match &data.top_rated {
        Ok(rows) => print_metric("Best-rated films", &rows.len().to_string()),
        Err(e) => print_unavailable("Best-rated table", e),
    }
    match &data.award_rows {
        Ok(rows) => print_metric("Award records", &rows.to_string()),
        Err(e) => print_unavailable("Awards table", e),
    }
    match &data.revenue_rows {
        Ok(rows) => print_metric("Revenue records", &rows.to_string()),
        Err(e) => print_unavailable("Revenue table", e),
    }

    Ok(())
}

fn print_metric(name: &str, value: &str) {
    println!("{}{}: {}", "• ".green(), name, value.bold());
}

fn print_unavailable(name: &str, error: &catalog::DataLoadError) {
    tracing::warn!(table = name, error = %error, "table failed to load");
    println!("{}{}: {}", "• ".red(), name, "data unavailable".red());
}

/// Handle the 'chart' command
fn handle_chart(data_dir: &Path, width: usize) -> Result<()> {
    let rows = match loader::load_top_viewed(data_dir) {
        Ok(rows) => rows,
        Err(e) => {
            // A chart failure only affects this view
            println!("{} {}", "Could not render the visualization:".red(), e);
            return Ok(());
        }
    };
    if rows.is_empty() {
        println!("{}", "The top-viewed table has no rows to chart.".yellow());
        return Ok(());
    }

    println!("{}", "Top 10 most-viewed films".bold().blue());

    let max_views = rows.iter().map(|r| r.views).max().unwrap_or(1);
    let title_width = rows.iter().map(|r| r.title.chars().count()).max().unwrap_or(0);

    for row in &rows {
        let bar = bar_cells(row.views, max_views, width);
        println!(
            "{:<title_width$} {} {}",
            row.title,
            "█".repeat(bar).cyan(),
            row.views
        );
    }
    Ok(())
}

/// Scale a view count to a bar length, keeping the largest bar at `width`
/// cells and giving every non-zero count at least one cell.
fn bar_cells(views: u64, max_views: u64, width: usize) -> usize {
    if views == 0 || max_views == 0 || width == 0 {
        return 0;
    }
    let scaled = (views as u128 * width as u128 / max_views as u128) as usize;
    scaled.max(1)
}

/// Handle the 'top' command
fn handle_top(data_dir: &Path) -> Result<()> {
    match loader::load_top_viewed(data_dir) {
        Ok(rows) => {
            println!("{}", "Top 10 most-viewed films".bold().blue());
            for (rank, row) in rows.iter().enumerate() {
                println!(
                    "{}. {} ({} views)",
                    (rank + 1).to_string().green(),
                    row.title,
                    row.views
                );
            }
        }
        Err(e) => print_unavailable("Top-viewed table", &e),
    }

    println!();

    match loader::load_top_rated(data_dir) {
        Ok(rows) => {
            println!("{}", "Top 10 best-rated films".bold().blue());
            for (rank, row) in rows.iter().enumerate() {
                println!(
                    "{}. {} (score {:.1})",
                    (rank + 1).to_string().green(),
                    row.title,
                    row.score
                );
            }
        }
        Err(e) => print_unavailable("Best-rated table", &e),
    }

    Ok(())
}

/// Handle the 'values' command
fn handle_values(data_dir: &Path, field: ChoiceField) -> Result<()> {
    let films = load_films(data_dir)?;
    let engine = Recommender::new(films);

    let values = engine.distinct_values(field);
    println!(
        "{}",
        format!("{} distinct values for '{}':", values.len(), field)
            .bold()
            .blue()
    );
    for value in &values {
        println!("{}{}", "• ".green(), value);
    }
    Ok(())
}

/// Handle the 'recommend' and 'quiz' commands.
///
/// Both are the same operation with a different limit; the quiz variant
/// additionally prints the numeric fields it constrained.
fn handle_recommend(
    data_dir: &Path,
    query: &FilterQuery,
    limit: usize,
    show_numeric: bool,
) -> Result<()> {
    let films = load_films(data_dir)?;
    let engine = Recommender::new(films);

    let results = engine.recommend(query, limit);
    if results.is_empty() {
        // A normal outcome, distinct from a load failure
        println!(
            "{}",
            "No films were found matching every filter.".yellow()
        );
        return Ok(());
    }

    println!("{}", "Recommended films:".green().bold());
    for film in results {
        print_film(film, show_numeric);
    }
    Ok(())
}

/// Helper function to format one recommended film
fn print_film(film: &FilmRecord, show_numeric: bool) {
    println!("\n{}", film.title.bold());
    print_detail("Director", film.director.as_deref());
    print_detail("Lead actor", film.actor.as_deref());
    print_detail("Country", film.country.as_deref());
    print_detail("Genre", film.genre.as_deref());
    if show_numeric {
        let duration = film.duration.map(|d| format!("{} min", d));
        let year = film.year.map(|y| y.to_string());
        print_detail("Duration", duration.as_deref());
        print_detail("Year", year.as_deref());
    }
}

fn print_detail(name: &str, value: Option<&str>) {
    println!("{}{}: {}", "• ".green(), name, value.unwrap_or("unknown"));
}

/// Handle the 'about' command
fn handle_about() -> Result<()> {
    println!("{}", "About this project".bold().blue());
    println!(
        "\nCineDash analyzes film data and provides recommendations based on\n\
         user preferences: pick an actor, genre, director and country, or\n\
         answer the six-question quiz to add duration and year limits.\n\
         \n\
         Data comes from five CSV tables loaded once at startup; every\n\
         query runs against the in-memory catalog."
    );
    Ok(())
}
