use std::borrow::Cow;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use prodcanon_core::{format_price, load_site_rules, AppConfig, SiteRules};
use prodcanon_normalize::coerce::parse_decimal;
use prodcanon_normalize::{normalize_batch, normalize_product_with};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "prodcanon")]
#[command(about = "Normalize scraped product-page JSON into canonical product records")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize one raw document, or a JSON array of documents.
    Normalize {
        /// Input file. Reads stdin when omitted or `-`.
        path: Option<PathBuf>,
        /// YAML site-rules file; overrides `PRODCANON_SITES_PATH`.
        #[arg(long)]
        sites: Option<PathBuf>,
        /// Pretty-print the output.
        #[arg(long)]
        pretty: bool,
    },
    /// Format an amount for display in the given currency.
    FormatPrice { amount: String, currency: String },
    /// Validate and print the effective site-rule table.
    Sites {
        #[arg(long)]
        sites: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = prodcanon_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    // Diagnostics go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(
        sites_path = ?config.sites_path,
        pretty = config.pretty,
        "configuration loaded"
    );

    match cli.command {
        Commands::Normalize {
            path,
            sites,
            pretty,
        } => {
            let rules = resolve_site_rules(&config, sites.as_deref())?;
            let input = read_input(path.as_deref())?;
            let raw: Value = serde_json::from_str(&input).context("input is not valid JSON")?;
            let output = normalize_value(&raw, &rules)?;
            print_json(&output, pretty || config.pretty)?;
        }
        Commands::FormatPrice { amount, currency } => {
            let value =
                parse_decimal(&amount).with_context(|| format!("'{amount}' is not a number"))?;
            println!("{}", format_price(value, &currency));
        }
        Commands::Sites { sites } => {
            let rules = resolve_site_rules(&config, sites.as_deref())?;
            print!("{}", serde_yaml::to_string(&*rules)?);
        }
    }

    Ok(())
}

/// Arrays normalize to an array of records; anything else to one record.
fn normalize_value(raw: &Value, rules: &SiteRules) -> anyhow::Result<Value> {
    let output = if raw.is_array() {
        serde_json::to_value(normalize_batch(raw, rules))?
    } else {
        serde_json::to_value(normalize_product_with(raw, rules))?
    };
    Ok(output)
}

fn resolve_site_rules(
    config: &AppConfig,
    flag: Option<&Path>,
) -> anyhow::Result<Cow<'static, SiteRules>> {
    match flag {
        Some(path) => Ok(Cow::Owned(load_site_rules(path)?)),
        None => Ok(config.site_rules()?),
    }
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn print_json(value: &Value, pretty: bool) -> anyhow::Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}
