use clap::{Arg, ArgAction, Command};
use cryptocache::cache::PriceCache;
use cryptocache::paths;
use std::collections::BTreeMap;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let matches = Command::new("Cache Inspector")
        .version("1.0")
        .about("CryptoCache database inspection tool")
        .subcommand(
            Command::new("list")
                .about("List cached price rows in insertion order")
                .arg(
                    Arg::new("db-path")
                        .long("db-path")
                        .value_name("PATH")
                        .help("Path to the cache database (defaults to the app data directory)"),
                )
                .arg(
                    Arg::new("name")
                        .short('n')
                        .long("name")
                        .value_name("NAME")
                        .help("Only show rows for one asset"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print rows as JSON"),
                ),
        )
        .subcommand(
            Command::new("stats").about("Show row counts per asset").arg(
                Arg::new("db-path")
                    .long("db-path")
                    .value_name("PATH")
                    .help("Path to the cache database (defaults to the app data directory)"),
            ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("list", sub_matches)) => {
            let db_path = resolve_db_path(sub_matches.get_one::<String>("db-path"));
            if !db_path.exists() {
                println!("❌ No cache database found at {}", db_path.display());
                println!("   Run the cryptocache binary first to populate it.");
                return Ok(());
            }

            let cache = PriceCache::open(&db_path)?;
            let rows = match sub_matches.get_one::<String>("name") {
                Some(name) => cache.rows_for(name)?,
                None => cache.fetch_all()?,
            };

            if sub_matches.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&rows)?);
                return Ok(());
            }

            println!("📋 Cached prices ({})", db_path.display());
            println!("{}", "=".repeat(50));
            if rows.is_empty() {
                println!("No cached rows found.");
                return Ok(());
            }
            for (i, row) in rows.iter().enumerate() {
                println!("{:>4}. {} = {}", i + 1, row.crypto_name, row.price);
            }
            println!();
            println!("📊 {} rows total", rows.len());
        }

        Some(("stats", sub_matches)) => {
            let db_path = resolve_db_path(sub_matches.get_one::<String>("db-path"));
            if !db_path.exists() {
                println!("❌ No cache database found at {}", db_path.display());
                println!("   Run the cryptocache binary first to populate it.");
                return Ok(());
            }

            let cache = PriceCache::open(&db_path)?;
            let total = cache.count_rows()?;

            // BTreeMap keeps the per-asset listing alphabetical
            let mut per_asset: BTreeMap<String, usize> = BTreeMap::new();
            for row in cache.fetch_all()? {
                *per_asset.entry(row.crypto_name).or_insert(0) += 1;
            }

            println!("📊 Cache Statistics");
            println!("{}", "=".repeat(50));
            println!("💾 Database: {}", db_path.display());
            println!("🧮 Total rows: {}", total);
            if !per_asset.is_empty() {
                println!();
                for (name, count) in &per_asset {
                    println!("   {:<20} {} rows", name, count);
                }
            }
        }

        _ => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}

fn resolve_db_path(override_path: Option<&String>) -> PathBuf {
    match override_path {
        Some(path) => PathBuf::from(path),
        None => paths::get_cache_db_path(),
    }
}
