//! # Sample Data Seeder
//!
//! Opens (or creates) an ANCHOR store and fills it with sample data on
//! first run.
//!
//! ## Usage
//! ```bash
//! # Seed ./anchor.db if it has never been initialized
//! cargo run -p anchor-store --bin anchor-seed
//!
//! # Wipe and reseed a specific file, then print the dashboard
//! cargo run -p anchor-store --bin anchor-seed -- --db ./data/shop.db --force --stats
//! ```
//!
//! `ANCHOR_DB_PATH`, `ANCHOR_SEED_SAMPLE_DATA` and
//! `ANCHOR_LOW_STOCK_THRESHOLD` are read first; flags win over them.

use std::env;

use chrono::Local;
use tracing::info;

use anchor_store::{init_tracing, seed_if_empty, seed_sample_data, AnchorConfig, Database};

/// What the command line asked for.
#[derive(Debug, PartialEq)]
enum Command {
    Run(SeedOptions),
    Help,
}

#[derive(Debug, PartialEq)]
struct SeedOptions {
    config: AnchorConfig,
    force: bool,
    show_stats: bool,
}

/// Parses arguments (program name already stripped) on top of `config`.
fn parse_args(args: &[String], mut config: AnchorConfig) -> Result<Command, String> {
    let mut force = false;
    let mut show_stats = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => match args.get(i + 1) {
                Some(path) if !path.starts_with('-') => {
                    config.db_path = path.into();
                    i += 1;
                }
                _ => {
                    return Err(format!(
                        "Missing value for {}: expected a database path",
                        args[i]
                    ))
                }
            },
            "--force" | "-f" => force = true,
            "--stats" | "-s" => show_stats = true,
            "--help" | "-h" => return Ok(Command::Help),
            other => eprintln!("Ignoring unknown argument: {}", other),
        }
        i += 1;
    }

    Ok(Command::Run(SeedOptions {
        config,
        force,
        show_stats,
    }))
}

fn print_help() {
    println!("ANCHOR Sample Data Seeder");
    println!();
    println!("Usage: anchor-seed [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -d, --db <PATH>    Database file path (default: ./anchor.db)");
    println!("  -f, --force        Clear the store and reseed");
    println!("  -s, --stats        Print dashboard stats afterwards");
    println!("  -h, --help         Show this help message");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args, AnchorConfig::from_env()) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            print_help();
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run with --help for usage.");
            std::process::exit(2);
        }
    };
    let SeedOptions {
        config,
        force,
        show_stats,
    } = options;

    println!("ANCHOR Sample Data Seeder");
    println!("=========================");
    println!("Database: {}", config.db_path.display());
    println!();

    let db = Database::new(config.db_config()).await?;
    println!("✓ Connected to database");

    if force {
        db.storage().clear().await?;
        let data = seed_sample_data(&db).await?;
        println!(
            "✓ Reseeded: {} clients, {} orders, {} inventory items",
            data.clients.len(),
            data.orders.len(),
            data.inventory.len()
        );
    } else if !config.seed_sample_data {
        println!("⚠ Seeding disabled by ANCHOR_SEED_SAMPLE_DATA");
    } else if seed_if_empty(&db).await? {
        println!("✓ Seeded sample data");
    } else {
        println!("⚠ Store already initialized, nothing to do");
        println!("  Use --force to wipe and reseed.");
    }

    if let Some(threshold) = config.low_stock_threshold {
        let mut settings = db.settings().get().await?;
        settings.low_stock_threshold = threshold;
        db.settings().save(&settings).await?;
        info!(threshold, "Applied low-stock threshold override");
    }

    if show_stats {
        let settings = db.settings().get().await?;
        let stats = db.dashboard_stats(Local::now().date_naive()).await?;
        let money = |m| settings.format_money(m);

        println!();
        println!("Dashboard");
        println!("---------");
        println!("  Revenue:          {}", money(stats.total_revenue));
        println!("  Outstanding:      {}", money(stats.outstanding_revenue));
        println!("  Orders:           {} ({} open)", stats.order_count, stats.open_orders);
        println!("  Clients:          {}", stats.client_count);
        println!("  Low stock items:  {}", stats.low_stock_count);
        println!("  Inventory value:  {}", money(stats.inventory_value));
        println!(
            "  Tasks:            {} pending, {} overdue",
            stats.pending_tasks, stats.overdue_tasks
        );
        println!("  Open bids:        {}", money(stats.open_bid_value));
        match stats.bid_win_rate_bps {
            Some(bps) => println!("  Bid win rate:     {:.1}%", bps as f64 / 100.0),
            None => println!("  Bid win rate:     n/a"),
        }
        println!("  Expenses:         {}", money(stats.expense_total));
        println!(
            "  Hours logged:     {:.1} ({} billable)",
            stats.hours_logged,
            money(stats.billable_amount)
        );
    }

    db.close().await;
    println!();
    println!("✓ Done");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_flags() {
        let command = parse_args(
            &args(&["--db", "/tmp/shop.db", "-f", "--stats"]),
            AnchorConfig::default(),
        )
        .unwrap();

        let Command::Run(options) = command else {
            panic!("expected a run command");
        };
        assert_eq!(options.config.db_path, PathBuf::from("/tmp/shop.db"));
        assert!(options.force);
        assert!(options.show_stats);
    }

    #[test]
    fn test_db_without_value_is_an_error() {
        let err = parse_args(&args(&["--db"]), AnchorConfig::default()).unwrap_err();
        assert!(err.contains("--db"));

        let err = parse_args(&args(&["-d", "--force"]), AnchorConfig::default()).unwrap_err();
        assert!(err.contains("-d"));
    }

    #[test]
    fn test_help_and_defaults() {
        assert_eq!(
            parse_args(&args(&["-h"]), AnchorConfig::default()),
            Ok(Command::Help)
        );
        assert_eq!(
            parse_args(&[], AnchorConfig::default()),
            Ok(Command::Run(SeedOptions {
                config: AnchorConfig::default(),
                force: false,
                show_stats: false,
            }))
        );
    }
}
