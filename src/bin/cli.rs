use clap::{Parser, Subcommand};
use place_autocomplete::{
    load_tsv, DoubleMetaphoneEncoder, EngineConfig, PlaceEngine, ScoringMethod,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "place-cli")]
#[command(about = "Place autocomplete CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest places for a query
    Suggest {
        /// Query text
        query: String,

        /// Places TSV file
        #[arg(short, long, default_value = "data/cities_canada-usa.tsv")]
        data: PathBuf,

        /// Caller latitude
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Caller longitude
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Maximum suggestions (negative = all)
        #[arg(short = 'n', long, allow_hyphen_values = true)]
        limit: Option<i64>,

        /// JSON engine config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Scoring method (prefix, jaro)
        #[arg(short, long)]
        scoring: Option<String>,
    },

    /// Validate a places file
    Check {
        /// Places TSV file
        #[arg(short, long, default_value = "data/cities_canada-usa.tsv")]
        data: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let encoder = Arc::new(DoubleMetaphoneEncoder::new());

    match cli.command {
        Commands::Suggest {
            query,
            data,
            lat,
            lon,
            limit,
            config,
            scoring,
        } => {
            let mut engine_config = match config {
                Some(path) => EngineConfig::from_file(path)?,
                None => EngineConfig::default(),
            };
            if let Some(name) = scoring {
                engine_config.scoring = ScoringMethod::from_name(&name)
                    .ok_or_else(|| anyhow::anyhow!("unknown scoring method: {}", name))?;
            }

            let places = load_tsv(&data, encoder.as_ref())?;
            let engine = PlaceEngine::new(places, &engine_config, encoder)?;

            println!("🔍 Suggestions for: {}", query);
            let response = engine.suggest(&query, lat, lon, limit)?;

            if response.suggestions.is_empty() {
                println!("\n⚠️ No suggestions");
            } else {
                println!();
                for (i, suggestion) in response.suggestions.iter().enumerate() {
                    println!(
                        "   {}. {}, {}  score {:.4}  ({:.5}, {:.5})",
                        i + 1,
                        suggestion.display_name,
                        suggestion.country_code,
                        suggestion.score,
                        suggestion.latitude,
                        suggestion.longitude
                    );
                }
            }

            println!("\n   Scoring: {}", response.scoring_method);
            println!("   Latency: {:.2}ms", response.latency_ms);
        }

        Commands::Check { data } => {
            println!("🧪 Checking {}...", data.display());

            match load_tsv(&data, encoder.as_ref()) {
                Ok(places) => println!("✅ {} places loaded", places.len()),
                Err(e) => {
                    println!("❌ {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
