//! CommunityStrategies - Inspection Tool
//!
//! Reads a community strategies payload and prints the values resolved for
//! each strategy.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use community_strategies::config::load_config;
use community_strategies::{parse_strategies, IdentifiersProvider, StrategyData};

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Path to a JSON array of strategies
    #[arg(short, long, env = "COMMUNITY_STRATEGIES_FILE")]
    input: String,

    /// Locale used for display names (defaults to the configured locale)
    #[arg(long)]
    locale: Option<String>,

    /// Log level (trace, debug, info, warn, error); overrides `settings.log_level`
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let config = load_config(Some(&args.config))?;

    // Initialize logging
    let level = resolve_log_level(args.log_level.as_deref(), &config.settings.log_level);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Configuration file: {}", args.config);
    let ids = IdentifiersProvider::from(&config.community);
    let default_locale = config.community.default_locale.as_str();
    let locale = args.locale.as_deref().unwrap_or(default_locale);

    let payload = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input))?;
    let strategies = parse_strategies(&payload)?;
    info!(count = strategies.len(), "Loaded strategies from {}", args.input);

    for strategy in &strategies {
        println!(
            "{}",
            describe(strategy, &ids, locale, default_locale, &config.community.logo_prefix)
        );
    }

    Ok(())
}

/// The command-line flag wins over the configured level
fn resolve_log_level(flag: Option<&str>, configured: &str) -> Level {
    match flag.unwrap_or(configured).to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// One tab-separated line of resolved values
fn describe(
    strategy: &StrategyData,
    ids: &IdentifiersProvider,
    locale: &str,
    default_locale: &str,
    logo_prefix: &str,
) -> String {
    let name = strategy.get_name(locale, default_locale).unwrap_or_else(|e| {
        warn!(slug = %strategy.slug, error = %e, "Strategy has no name translations");
        "-"
    });
    let risk = match strategy.get_risk() {
        Ok(risk) => risk.to_string(),
        Err(e) => {
            warn!(slug = %strategy.slug, error = %e, "Strategy has no risk attribute");
            "-".to_string()
        }
    };

    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{} {}\tauto_updated={}\textension_only={}",
        strategy.slug,
        name,
        strategy.category.get_name(locale, default_locale),
        strategy.get_url(ids),
        strategy.get_product_url(ids),
        strategy.get_logo_url(logo_prefix),
        risk,
        strategy.results.get_max_unit(),
        strategy.results.get_max_value(),
        strategy.is_auto_updated(),
        strategy.is_extension_only(),
    )
}
