//! homeserve - browse providers, quote and book from the command line

#![allow(missing_docs)]

use anyhow::{Context, anyhow};
use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use homeserve_rs::config::Config;
use homeserve_rs::services::catalog::{CATEGORIES, Category, category_by_id, category_by_slug};
use homeserve_rs::utils::logging::init_logging;
use homeserve_rs::{
    BookingSession, HomeFeed, PricingRule, ProviderCatalog, ServiceOffer, SortOption,
    display_amount,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "homeserve", version, about = "Home services booking engine")]
struct Cli {
    /// YAML configuration file; environment variables are used when omitted
    #[arg(long, global = true, env = "HOMESERVE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List providers
    Providers {
        /// Free-text search over name, description, city and category
        #[arg(long)]
        search: Option<String>,
        /// Category id or slug
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        min_rating: Option<f64>,
        /// popular, rating, price-low or price-high
        #[arg(long)]
        sort: Option<SortOption>,
    },
    /// List categories with provider counts
    Categories,
    /// Price a booking without confirming it
    Quote {
        #[arg(long)]
        provider: u32,
        /// Hours as typed, e.g. "2" or "1.5"
        #[arg(long)]
        hours: String,
        #[arg(long, default_value = "standard")]
        service_type: String,
    },
    /// Confirm a booking and print it as JSON
    Book {
        #[arg(long)]
        provider: u32,
        #[arg(long)]
        hours: String,
        #[arg(long, default_value = "standard")]
        service_type: String,
        #[arg(long, default_value = "")]
        note: String,
        /// YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// HH:MM, defaults to now
        #[arg(long, value_parser = parse_time)]
        time: Option<NaiveTime>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())
        .await
        .context("failed to load configuration")?;
    init_logging(config.logging());
    debug!("Configuration: {:?}", config);

    let catalog = ProviderCatalog::load(config.catalog())
        .await
        .context("failed to load provider catalog")?;

    match cli.command {
        Command::Providers {
            search,
            category,
            min_rating,
            sort,
        } => {
            let mut feed = HomeFeed::new(catalog);
            if let Some(search) = search {
                feed.set_search(search);
            }
            if let Some(category) = category {
                feed.select_category(resolve_category(&category)?.id);
            }
            feed.open_filter();
            if let Some(pending) = feed.pending_mut() {
                pending.min_rating = min_rating;
                pending.sort = sort;
            }
            feed.apply_filters();

            let symbol = &config.booking().currency_symbol;
            for provider in feed.visible_providers() {
                println!(
                    "{:>3}  {:<18} {:<11} {:>4.1}  {:>9}/h  {}",
                    provider.id,
                    provider.name,
                    provider.category_name().unwrap_or("-"),
                    provider.rating,
                    display_amount(symbol, provider.price_per_hour),
                    provider.location.city
                );
            }
        }
        Command::Categories => {
            for category in CATEGORIES.iter() {
                println!(
                    "{:>2}  {:<11} {:<10} {:>4} listed, {} in catalog",
                    category.id,
                    category.name,
                    category.slug,
                    category.count,
                    catalog.count_in_category(category.id)
                );
            }
        }
        Command::Quote {
            provider,
            hours,
            service_type,
        } => {
            let pricing = PricingRule::from_config(config.booking())?;
            if !pricing.catalog().contains(&service_type) {
                return Err(anyhow!("unknown service type: {}", service_type));
            }

            let provider = catalog.require(provider)?;
            let breakdown = pricing.breakdown(provider.price_per_hour, &hours, &service_type);
            let symbol = &config.booking().currency_symbol;

            println!("Provider:     {}", provider.name);
            println!("Rate:         {}/h", display_amount(symbol, breakdown.hourly_rate));
            println!("Hours:        {}", breakdown.hours);
            println!(
                "Service type: {} (x{})",
                breakdown.service_type_id, breakdown.multiplier
            );
            println!("Total:        {}", display_amount(symbol, breakdown.total));
        }
        Command::Book {
            provider,
            hours,
            service_type,
            note,
            date,
            time,
        } => {
            let mut session = BookingSession::from_config(config.booking())?;
            if !session.pricing().catalog().contains(&service_type) {
                return Err(anyhow!("unknown service type: {}", service_type));
            }

            let provider = catalog.require(provider)?;
            session.open(ServiceOffer::try_from(provider)?, |_| {});
            session.set_hours_text(hours);
            if session.hours_warning() {
                eprintln!(
                    "Warning: '{}' is not a valid number of hours",
                    session.draft().hours_text
                );
            }
            session.set_service_type(service_type);
            session.set_note(note);
            if let Some(date) = date {
                session.set_date(date);
            }
            if let Some(time) = time {
                session.set_time(time);
            }

            let result = session
                .confirm()
                .ok_or_else(|| anyhow!("booking session closed unexpectedly"))?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

fn resolve_category(value: &str) -> anyhow::Result<&'static Category> {
    let found = match value.trim().parse::<u32>() {
        Ok(id) => category_by_id(id),
        Err(_) => category_by_slug(value),
    };
    found.ok_or_else(|| anyhow!("unknown category: {}", value))
}

fn parse_time(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(value, "%H:%M")
}
