use crate::infra::{parse_instant, reference_millis};
use chrono::{DateTime, Utc};
use clap::Args;
use std::path::PathBuf;
use storefront_loyalty::config::{AppConfig, ConfigError};
use storefront_loyalty::error::AppError;
use storefront_loyalty::history::PurchaseHistoryImporter;
use storefront_loyalty::loyalty::{LoyaltyEngine, LoyaltySnapshot, PurchaseRecord};
use storefront_loyalty::storefront::{Cart, Catalog, Edition, SpendSummary, TransactionStats};

const DAY_MS: i64 = 86_400_000;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Purchase history export; `.csv` files are read as CSV, anything else as JSON
    #[arg(long)]
    pub(crate) history: PathBuf,
    /// Reference instant (RFC 3339). Defaults to now.
    #[arg(long, value_parser = parse_instant)]
    pub(crate) now: Option<DateTime<Utc>>,
    /// Print the loyalty snapshot as JSON instead of a report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Reference instant for the first checkout (RFC 3339). Defaults to now.
    #[arg(long, value_parser = parse_instant)]
    pub(crate) now: Option<DateTime<Utc>>,
    /// Number of daily checkouts to simulate (1-365).
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u16).range(1..=365))]
    pub(crate) checkouts: u16,
}

fn configured_engine() -> Result<LoyaltyEngine, AppError> {
    let config = AppConfig::load()?;
    let engine = LoyaltyEngine::new(config.scoring).map_err(ConfigError::from)?;
    Ok(engine)
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { history, now, json } = args;

    let engine = configured_engine()?;
    let records = PurchaseHistoryImporter::from_path(&history)?;
    let now_ms = reference_millis(now);
    let snapshot = engine.analyze(&records, now_ms)?.snapshot();

    if json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(body) => println!("{body}"),
            Err(err) => println!("Snapshot unavailable: {err}"),
        }
        return Ok(());
    }

    println!("Loyalty report for {}", history.display());
    render_snapshot(&records, &snapshot);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { now, checkouts } = args;

    let engine = configured_engine()?;
    let catalog = Catalog::standard();
    let start_ms = reference_millis(now);
    let mut history: Vec<PurchaseRecord> = Vec::new();

    println!("Storefront loyalty demo ({checkouts} daily checkouts)");
    for day in 0..checkouts {
        let now_ms = checkout_instant(start_ms, day);
        let snapshot = engine.analyze(&history, now_ms)?.snapshot();

        let mut cart = Cart::new();
        let products = catalog.products();
        let product = &products[usize::from(day) % products.len()];
        let edition = if day % 2 == 0 {
            Edition::Base
        } else {
            Edition::Premium
        };
        cart.add(product, edition, snapshot.discount);
        let summary = cart.summary();
        let record = cart.checkout(now_ms)?;

        println!(
            "- day {}: {} ({}) {:.3} -> {:.3} ETH at {} ({:.0}% off)",
            day + 1,
            product.name,
            edition.label(),
            summary.original_total,
            summary.final_total,
            snapshot.cohort,
            snapshot.discount * 100.0
        );
        history.push(record);
    }

    let final_ms = checkout_instant(start_ms, checkouts);
    let snapshot = engine.analyze(&history, final_ms)?.snapshot();
    println!("\nAfter {} purchases", history.len());
    render_snapshot(&history, &snapshot);
    Ok(())
}

fn checkout_instant(start_ms: i64, day: u16) -> i64 {
    start_ms.saturating_add(i64::from(day).saturating_mul(DAY_MS))
}

fn render_snapshot(records: &[PurchaseRecord], snapshot: &LoyaltySnapshot) {
    let stats = TransactionStats::from_history(records);
    let spend = SpendSummary::new(stats.total_amount, snapshot.discount);

    println!(
        "Transactions: {} | Total spent: {:.3} ETH",
        stats.total_transactions, stats.total_amount
    );
    println!(
        "Recency {:.2} | Frequency {:.2} | Monetary {:.2} | Diversity {:.2}",
        snapshot.metrics.recency,
        snapshot.metrics.frequency,
        snapshot.metrics.monetary,
        snapshot.metrics.diversity
    );
    println!(
        "Score {:.3} -> cohort {} with a {}% discount",
        snapshot.score, snapshot.cohort, spend.discount_percentage
    );
    println!(
        "Lifetime spend at current discount: {:.3} ETH (saves {:.3} ETH)",
        spend.discounted, spend.savings
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_instants_advance_one_day_at_a_time() {
        assert_eq!(checkout_instant(1_000, 0), 1_000);
        assert_eq!(checkout_instant(1_000, 3), 1_000 + 3 * DAY_MS);
    }

    #[test]
    fn checkout_instants_saturate_near_the_end_of_time() {
        assert_eq!(checkout_instant(i64::MAX - DAY_MS, 365), i64::MAX);
    }
}
