use anyhow::{anyhow, bail, Context, Result};
use catalog::CatalogIndex;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use engine::{CategoryChoice, FilterCriteria, SortKey};
use server::CatalogService;
use sources::seed;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Carebook - health catalog search
#[derive(Parser)]
#[command(name = "carebook")]
#[command(about = "Search providers, lab tests, results and appointments", long_about = None)]
struct Cli {
    /// Path to the catalog fixture directory
    #[arg(short, long, default_value = "data/catalog")]
    data_dir: PathBuf,

    /// Use the built-in demo catalog instead of fixture files
    #[arg(long)]
    seed: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Search flags shared by every catalog subcommand
#[derive(Args)]
struct SearchArgs {
    /// Free-text search (case- and accent-insensitive substring)
    #[arg(long, default_value = "")]
    query: String,

    /// Category id, or ALL to disable the category filter
    #[arg(long, default_value = "ALL")]
    category: String,

    /// Boolean facet toggle as name=true|false (repeatable)
    #[arg(long = "facet")]
    facets: Vec<String>,

    /// Explicit ordering: name or featured
    #[arg(long)]
    sort: Option<String>,

    /// Maximum rows to display
    #[arg(long, default_value = "10")]
    limit: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the provider catalog
    Providers {
        #[command(flatten)]
        search: SearchArgs,
    },

    /// Search the lab test catalog
    Tests {
        #[command(flatten)]
        search: SearchArgs,
    },

    /// Search prior lab results
    Results {
        #[command(flatten)]
        search: SearchArgs,
    },

    /// Search the appointment history
    Appointments {
        #[command(flatten)]
        search: SearchArgs,
    },

    /// Resolve a selection into its navigation target
    Show {
        /// Catalog kind: provider, test, result or appointment
        #[arg(long)]
        kind: String,

        /// Entity id
        #[arg(long)]
        id: String,
    },

    /// Show catalog statistics
    Stats,

    /// Run benchmark to test search performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load the catalog (fixtures or built-in demo data)
    let start = Instant::now();
    let index = if cli.seed {
        println!("Using the built-in demo catalog...");
        seed::demo_catalog()
    } else {
        println!("Loading catalog from {}...", cli.data_dir.display());
        CatalogIndex::load_from_files(&cli.data_dir)
            .context("Failed to load catalog fixtures (try --seed for the demo catalog)")?
    };
    println!("{} Loaded catalog in {:?}", "✓".green(), start.elapsed());

    let service = CatalogService::new(Arc::new(index));

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Providers { search } => handle_providers(service, search).await?,
        Commands::Tests { search } => handle_tests(service, search).await?,
        Commands::Results { search } => handle_results(service, search).await?,
        Commands::Appointments { search } => handle_appointments(service, search).await?,
        Commands::Show { kind, id } => handle_show(service, kind, id)?,
        Commands::Stats => handle_stats(service).await?,
        Commands::Benchmark { requests } => handle_benchmark(service, requests).await?,
    }

    Ok(())
}

/// Build FilterCriteria from the shared search flags
fn build_criteria(search: &SearchArgs) -> Result<FilterCriteria> {
    let mut criteria = FilterCriteria::new();

    if !search.query.is_empty() {
        criteria = criteria.with_search(search.query.as_str());
    }

    criteria.category = CategoryChoice::parse(&search.category);

    for toggle in &search.facets {
        let (name, value) = parse_facet(toggle)?;
        criteria = criteria.with_facet(name, value);
    }

    if let Some(sort) = &search.sort {
        criteria = criteria.with_sort(parse_sort(sort)?);
    }

    Ok(criteria)
}

/// Parse one --facet toggle of the form name=true|false
fn parse_facet(toggle: &str) -> Result<(String, bool)> {
    let (name, value) = toggle
        .split_once('=')
        .ok_or_else(|| anyhow!("Facet must be name=true|false, got \"{toggle}\""))?;
    let value: bool = value
        .parse()
        .map_err(|_| anyhow!("Facet value must be true or false, got \"{value}\""))?;
    Ok((name.to_string(), value))
}

fn parse_sort(sort: &str) -> Result<SortKey> {
    match sort {
        "name" => Ok(SortKey::Name),
        "featured" => Ok(SortKey::Featured),
        other => bail!("Unknown sort \"{other}\" (expected name or featured)"),
    }
}

/// Handle the 'providers' command
async fn handle_providers(service: CatalogService, search: SearchArgs) -> Result<()> {
    let criteria = build_criteria(&search)?;
    let response = service.search_providers(&criteria, search.limit).await?;

    print_header("Providers", response.total_matched, response.rows.len());
    for (i, row) in response.rows.iter().enumerate() {
        println!(
            "{}. {} - {} [{}]",
            (i + 1).to_string().green(),
            row.title.bold(),
            row.subtitle,
            row.fee
        );
        if !row.badges.is_empty() {
            println!("   {}", row.badges.join(" · ").cyan());
        }
    }
    Ok(())
}

/// Handle the 'tests' command
async fn handle_tests(service: CatalogService, search: SearchArgs) -> Result<()> {
    let criteria = build_criteria(&search)?;
    let response = service.search_lab_tests(&criteria, search.limit).await?;

    print_header("Lab tests", response.total_matched, response.rows.len());
    for (i, row) in response.rows.iter().enumerate() {
        println!(
            "{}. {} - {} [{}]",
            (i + 1).to_string().green(),
            row.title.bold(),
            row.subtitle,
            row.price
        );
        if !row.badges.is_empty() {
            println!("   {}", row.badges.join(" · ").cyan());
        }
    }
    Ok(())
}

/// Handle the 'results' command
async fn handle_results(service: CatalogService, search: SearchArgs) -> Result<()> {
    let criteria = build_criteria(&search)?;
    let response = service.search_results(&criteria, search.limit).await?;

    print_header("Lab results", response.total_matched, response.rows.len());
    for (i, row) in response.rows.iter().enumerate() {
        println!(
            "{}. {} - {} [{}]",
            (i + 1).to_string().green(),
            row.title.bold(),
            row.subtitle,
            row.status.yellow()
        );
    }
    Ok(())
}

/// Handle the 'appointments' command
async fn handle_appointments(service: CatalogService, search: SearchArgs) -> Result<()> {
    let criteria = build_criteria(&search)?;
    let response = service.search_appointments(&criteria, search.limit).await?;

    print_header("Appointments", response.total_matched, response.rows.len());
    for (i, row) in response.rows.iter().enumerate() {
        println!(
            "{}. {} - {}",
            (i + 1).to_string().green(),
            row.title.bold(),
            row.subtitle
        );
        println!("   {}", row.badges.join(" · ").cyan());
    }
    Ok(())
}

/// Handle the 'show' command
fn handle_show(service: CatalogService, kind: String, id: String) -> Result<()> {
    let intent = match kind.as_str() {
        "provider" => service.open_provider(&id)?,
        "test" => service.open_lab_test(&id)?,
        "result" => service.open_result(&id)?,
        "appointment" => service.open_appointment(&id)?,
        other => bail!("Unknown kind \"{other}\" (expected provider, test, result or appointment)"),
    };

    println!("{}", "Navigation intent:".bold().blue());
    println!("  Entity: {}", intent.entity_id);
    println!("  Target: {:?}", intent.target);
    Ok(())
}

/// Handle the 'stats' command
async fn handle_stats(service: CatalogService) -> Result<()> {
    // Stats come precomputed with the loaded catalog
    let overview = service.overview().await?;

    println!("{}", "Catalog statistics:".bold().blue());
    println!("{}Providers: {}", "• ".green(), overview.provider_count);
    println!(
        "{}Available today: {}",
        "• ".green(),
        overview.available_today_count
    );
    println!(
        "{}Average rating: {:.2}",
        "• ".green(),
        overview.avg_provider_rating
    );
    println!("{}Lab tests: {}", "• ".cyan(), overview.lab_test_count);
    println!(
        "{}Average test price: {}",
        "• ".cyan(),
        overview.avg_test_price
    );
    println!(
        "{}Upcoming appointments: {}",
        "• ".cyan(),
        overview.upcoming_appointments
    );
    println!("{}Results ready: {}", "• ".cyan(), overview.results_ready);
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(service: CatalogService, requests: usize) -> Result<()> {
    const CATEGORIES: [&str; 4] = [
        "ALL",
        "GENERAL_DOCTOR",
        "CARDIOLOGIST",
        "DERMATOLOGIST",
    ];
    const QUERIES: [&str; 4] = ["", "dr.", "maria", "medicine"];

    // Spawn concurrent search requests with randomized criteria
    let mut handles = vec![];
    for _ in 0..requests {
        let service = service.clone();
        let category = CATEGORIES[rand::random::<u32>() as usize % CATEGORIES.len()];
        let query = QUERIES[rand::random::<u32>() as usize % QUERIES.len()];
        let criteria = {
            let mut c = FilterCriteria::new().with_search(query);
            c.category = CategoryChoice::parse(category);
            if rand::random::<bool>() {
                c = c.with_facet("available_today", true);
            }
            c
        };

        let handle = tokio::spawn(async move {
            let start = Instant::now();
            service.search_providers(&criteria, 20).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }

    // Calculate and display statistics
    let total_time: std::time::Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("Benchmark results:");
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

fn print_header(kind: &str, total: usize, shown: usize) {
    if total == 0 {
        println!("{}", format!("{kind}: no matches").bold().blue());
    } else {
        println!(
            "{}",
            format!("{kind} ({shown} of {total} matches):").bold().blue()
        );
    }
}
