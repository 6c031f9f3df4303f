use clap::CommandFactory;
use clap::Parser;
use colored::*;
use env_logger::{Builder, Env, Target};
use facetfind::catalog::{Catalog, Universe, ValueId};
use facetfind::cli::{Cli, Commands, OutputFormat};
use facetfind::config::Config;
use facetfind::error::{FacetError, Result as FacetResult};
use facetfind::metrics::Metrics;
use facetfind::output_formats;
use facetfind::search::{SearchEngine, SearchQuery};
use log::{info, warn};
use std::fs;
use std::time::Instant;

fn main() -> FacetResult<()> {
    let cli = Cli::parse();
    setup_logging(&cli)?;

    let start_time = Instant::now();
    info!("Application started with command: {:?}", command_name(&cli));

    let config = Config::load()?;

    match &cli.command {
        Commands::Search {
            sizes,
            colors,
            format,
        } => {
            run_query(&cli, &config, sizes, colors, format, start_time)?;
        }
        Commands::Facets { format } => {
            run_query(&cli, &config, &[], &[], format, start_time)?;
        }
        Commands::Sample => {
            println!("{}", serde_json::to_string_pretty(&Catalog::sample())?);
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "facetfind", &mut std::io::stdout());
        }
    }

    info!(
        "Application finished. Total elapsed time: {:.2?}",
        start_time.elapsed()
    );
    Ok(())
}

fn command_name(cli: &Cli) -> &'static str {
    match &cli.command {
        Commands::Search { .. } => "search",
        Commands::Facets { .. } => "facets",
        Commands::Sample => "sample",
        Commands::Completions { .. } => "completions",
    }
}

fn run_query(
    cli: &Cli,
    config: &Config,
    sizes: &[String],
    colors: &[String],
    format: &OutputFormat,
    start_time: Instant,
) -> FacetResult<()> {
    let metrics = Metrics::new();
    let catalog = load_catalog(cli, config)?;

    warn_unknown(&catalog.sizes, sizes, "size");
    warn_unknown(&catalog.colors, colors, "color");

    let query = SearchQuery::unfiltered()
        .sizes(sizes.iter().cloned())
        .colors(colors.iter().cloned());

    let engine = SearchEngine::new(&catalog);
    let results = engine.search(&query)?;

    metrics.searches_run.inc();
    metrics.items_matched.inc_by(results.len() as u64);
    if query.is_unfiltered() {
        metrics.queries_unfiltered.inc();
    }

    println!(
        "{}",
        output_formats::render(&results, &catalog, format, config.display.dim_zero_facets)?
    );

    if matches!(format, OutputFormat::Text) {
        if config.display.show_summary {
            println!(
                "\n{} {} of {} shirt(s) matched",
                "Summary:".green().bold(),
                results.len(),
                catalog.len()
            );
        }
        if config.display.show_timing {
            println!("{} {:.2?}", "Elapsed:".cyan(), start_time.elapsed());
        }
    }

    if cli.verbose {
        print!("{}", metrics.gather());
    }

    Ok(())
}

fn load_catalog(cli: &Cli, config: &Config) -> FacetResult<Catalog> {
    let path = cli.catalog.clone().or_else(|| config.catalog.path.clone());
    match path {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            Catalog::from_json_file(&path)
        }
        None => {
            info!("No catalog configured; using the built-in sample");
            Ok(Catalog::sample())
        }
    }
}

fn warn_unknown(universe: &Universe, requested: &[String], attribute: &str) {
    for slug in requested {
        if !universe.contains(&ValueId::from(slug.as_str())) {
            warn!("Unknown {attribute} '{slug}' - it will match nothing");
        }
    }
}

fn setup_logging(cli: &Cli) -> FacetResult<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));

    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(
            buf,
            "{} [{}] [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    });

    if let Some(log_path) = &cli.log {
        if let Some(parent_dir) = log_path.parent() {
            if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
                fs::create_dir_all(parent_dir).map_err(FacetError::Io)?;
            }
        }
        let log_file = fs::File::create(log_path).map_err(FacetError::Io)?;
        builder.target(Target::Pipe(Box::new(log_file)));
    } else {
        builder.target(Target::Stderr);
    }

    builder
        .try_init()
        .map_err(|e| FacetError::Other(e.to_string()))?;
    Ok(())
}
