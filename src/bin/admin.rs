//! CLI administration tool for the trip planner.
//!
//! Lets operators try the itinerary parser, run full plans against the
//! database and check the deployment without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Parse a request (prompts when TEXT is omitted)
//! cargo run --bin admin -- parse "visit a museum, then lunch, avoid hotels"
//!
//! # Parse and resolve against the database
//! cargo run --bin admin -- plan --lat 35.69 --lon -0.63 "hotel in oran then dinner"
//!
//! # List known regions
//! cargo run --bin admin -- regions
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): required for `plan` and `db`
//! - `REGIONS_FILE`: region list (default: `data/regions.json`)

use trip_planner::application::services::PlannerService;
use trip_planner::config::{Config, mask_connection_string};
use trip_planner::domain::entities::{GeoPoint, Itinerary, RegionCatalog, VenueRequest};
use trip_planner::domain::parser::ItineraryParser;
use trip_planner::infrastructure::persistence::PgVenueRepository;
use trip_planner::infrastructure::reference_data;
use trip_planner::utils::geo;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::PgPool;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for the trip planner.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Region list to use instead of `REGIONS_FILE`
    #[arg(long, global = true)]
    regions_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Parse a trip request and print the itinerary
    Parse {
        /// Request text (prompted when omitted)
        text: Option<String>,
    },

    /// Parse a trip request and resolve it against the database
    Plan {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Request text (prompted when omitted)
        text: Option<String>,
    },

    /// List known regions
    Regions,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show venue counts per table
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let regions_file = cli.regions_file.unwrap_or_else(Config::load_regions_file);

    match cli.command {
        Commands::Parse { text } => {
            let parser = ItineraryParser::new(load_regions(&regions_file)?);
            let text = text_or_prompt(text)?;
            print_itinerary(&parser.parse(&text));
        }
        Commands::Plan { lat, lon, text } => {
            let origin = GeoPoint::new(lat, lon);
            if !geo::is_valid(origin) {
                anyhow::bail!("Coordinates out of range: lat={lat}, lon={lon}");
            }
            let text = text_or_prompt(text)?;
            plan(&regions_file, &text, origin).await?;
        }
        Commands::Regions => list_regions(&*load_regions(&regions_file)?),
        Commands::Db { action } => match action {
            DbAction::Check => db_check().await?,
            DbAction::Info => db_info().await?,
        },
    }

    Ok(())
}

fn load_regions(path: &std::path::Path) -> Result<Arc<RegionCatalog>> {
    let catalog = reference_data::load_regions(path)
        .with_context(|| format!("Failed to load regions from {}", path.display()))?;
    Ok(Arc::new(catalog))
}

fn text_or_prompt(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => Input::<String>::new()
            .with_prompt("Trip request")
            .interact_text()
            .context("Failed to read trip request"),
    }
}

async fn connect() -> Result<PgPool> {
    let url = Config::load_database_url()?;
    PgPool::connect(&url)
        .await
        .with_context(|| format!("Failed to connect to {}", mask_connection_string(&url)))
}

fn format_request(request: &VenueRequest) -> String {
    let time = request
        .time_of_day
        .map(|t| t.as_str().to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{:<11} {:<10} \"{}\"",
        request.venue_type.as_str(),
        time,
        request.source_text.dimmed()
    )
}

fn print_itinerary(itinerary: &Itinerary) {
    println!("\n{}", "Itinerary".bold());
    println!(
        "  Region: {}",
        itinerary
            .region
            .as_deref()
            .map(|r| r.green().to_string())
            .unwrap_or_else(|| "none".dimmed().to_string())
    );

    println!("\n  {}", "Venues:".bold());
    if itinerary.venue_requests.is_empty() {
        println!("    {}", "(none)".dimmed());
    }
    for (i, request) in itinerary.venue_requests.iter().enumerate() {
        let line = format!("    {}. {}", i + 1, format_request(request));
        if itinerary.is_excluded(request.venue_type) {
            println!("{} {}", line.strikethrough(), "(excluded)".yellow());
        } else {
            println!("{}", line);
        }
    }

    println!("\n  {}", "Exclusions:".bold());
    if itinerary.exclusions.is_empty() {
        println!("    {}", "(none)".dimmed());
    }
    for exclusion in &itinerary.exclusions {
        println!("    {} {}", "✗".red(), format_request(exclusion));
    }
    println!();
}

async fn plan(regions_file: &std::path::Path, text: &str, origin: GeoPoint) -> Result<()> {
    let parser = Arc::new(ItineraryParser::new(load_regions(regions_file)?));
    let pool = connect().await?;
    let repository = Arc::new(PgVenueRepository::new(Arc::new(pool)));
    let service = PlannerService::new(parser, repository);

    let plan = service
        .plan(text, origin)
        .await
        .map_err(|e| anyhow::anyhow!("Planning failed: {e}"))?;

    print_itinerary(&plan.itinerary);

    println!("{}", "Resolved venues".bold());
    if plan.venues.is_empty() {
        println!("  {}", "No venues found".yellow());
    }
    for (i, venue) in plan.venues.iter().enumerate() {
        let km = geo::distance_m(origin, venue.location) / 1000.0;
        println!(
            "  {}. [{}] {} ({}) {:.1} km, rating {}",
            i + 1,
            venue.venue_type.as_str().cyan(),
            venue.name.bold(),
            venue.region.as_deref().unwrap_or("-"),
            km,
            venue
                .rating
                .map(|r| format!("{r:.1}"))
                .unwrap_or_else(|| "-".to_string())
        );
    }

    Ok(())
}

fn list_regions(catalog: &RegionCatalog) {
    println!("{} ({})", "Known regions".bold(), catalog.len());
    for (i, region) in catalog.regions().iter().enumerate() {
        println!("  {:>3}. {}", i + 1, region.name);
    }
}

async fn db_check() -> Result<()> {
    println!("{}", "Checking database connection...".yellow());

    let pool = connect().await?;

    let version: String = sqlx::query_scalar("SELECT version()")
        .fetch_one(&pool)
        .await
        .context("Failed to query server version")?;
    println!("{} {}", "✓".green(), "Database connection successful".bold());
    println!("  {}", version.dimmed());

    match sqlx::query_scalar::<_, String>("SELECT PostGIS_Version()")
        .fetch_one(&pool)
        .await
    {
        Ok(postgis) => println!("{} PostGIS {}", "✓".green(), postgis),
        Err(e) => println!("{} PostGIS unavailable: {}", "✗".red(), e),
    }

    Ok(())
}

async fn db_info() -> Result<()> {
    let pool = connect().await?;

    println!("{}", "Venue tables".bold());
    for venue_type in trip_planner::domain::entities::VenueType::ALL {
        let table = venue_type.table_name();
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .with_context(|| format!("Failed to count {table}"))?;
        println!(
            "  {:<11} {:<11} {}",
            venue_type.as_str().cyan(),
            table,
            count
        );
    }

    Ok(())
}
