use anyhow::{Context, Result};
use std::io::BufRead;
use std::path::{Path, PathBuf};

use super::display;
use crate::config::{expand_home, Settings};
use crate::db::Database;
use crate::parse::SmsParser;
use crate::service::SmsLedger;

const DEFAULT_RECENT: u32 = 10;

pub(crate) fn as_cli(args: &[String], settings: &Settings) -> Result<()> {
    let Some(command) = args.get(1) else {
        print_usage();
        return Ok(());
    };
    match command.as_str() {
        "parse" => cli_parse(&args[2..], settings),
        "process" | "p" => cli_process(&args[2..], settings),
        "balances" | "b" => cli_balances(settings),
        "recent" => cli_recent(&args[2..], settings),
        "export" => cli_export(&args[2..], settings),
        "setup" => cli_setup(settings),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("smsledger {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("smsledger: bank and mobile-wallet SMS notices to a local ledger");
    println!();
    println!("Usage: smsledger <command>");
    println!();
    println!("Commands:");
    println!("  parse <message>               Show what a notice parses to (no write)");
    println!("  process <message>             Parse a notice and append it to the ledger");
    println!("  process -                     Same, one notice per stdin line");
    println!("  balances                      Print balances and expense totals");
    println!("  recent [N]                    List the last N ledger rows (default {DEFAULT_RECENT})");
    println!("  export [path]                 Export the ledger to CSV");
    println!("    --month <YYYY-MM>           Only rows from this month");
    println!("  setup                         Create or upgrade the ledger database");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Environment:");
    println!("  SMSLEDGER_TIMEZONE            Zone for notice dates (default Asia/Dhaka)");
    println!("  SMSLEDGER_DB                  Ledger file path");
    println!("  RUST_LOG                      Log filter (default warn)");
}

fn open_db(settings: &Settings) -> Result<Database> {
    if let Some(dir) = settings.db_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
    }
    Database::open(&settings.db_path)
}

fn open_ledger(settings: &Settings) -> Result<SmsLedger> {
    Ok(SmsLedger::new(
        SmsParser::new(settings.timezone)?,
        open_db(settings)?,
    ))
}

fn message_arg(args: &[String], usage: &str) -> Result<String> {
    if args.is_empty() {
        anyhow::bail!("Usage: {usage}");
    }
    Ok(args.join(" "))
}

fn cli_parse(args: &[String], settings: &Settings) -> Result<()> {
    let message = message_arg(args, "smsledger parse <message>")?;
    let parser = SmsParser::new(settings.timezone)?;
    match parser.parse(&message) {
        Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
        None => println!("ignored"),
    }
    Ok(())
}

fn cli_process(args: &[String], settings: &Settings) -> Result<()> {
    let mut ledger = open_ledger(settings)?;

    if args.len() == 1 && args[0] == "-" {
        let stdin = std::io::stdin();
        let (mut logged, mut total) = (0usize, 0usize);
        for line in stdin.lock().lines() {
            let line = line.context("Failed to read stdin")?;
            if line.trim().is_empty() {
                continue;
            }
            total += 1;
            let outcome = ledger.process_message(&line)?;
            if matches!(outcome, crate::service::Processed::Logged { .. }) {
                logged += 1;
            }
            println!("{}", display::outcome_line(&outcome));
        }
        println!("Logged {logged} of {total} messages");
        return Ok(());
    }

    let message = message_arg(args, "smsledger process <message> | smsledger process -")?;
    let outcome = ledger.process_message(&message)?;
    println!("{}", display::outcome_line(&outcome));
    Ok(())
}

fn cli_balances(settings: &Settings) -> Result<()> {
    let ledger = open_ledger(settings)?;
    let balances = ledger.current_balances()?;
    let today = ledger.parser().today();
    let txn_count = ledger.db().get_transaction_count()?;

    println!("Balances as of {today} ({})", ledger.parser().timezone());
    println!("{}", "─".repeat(40));
    for line in display::balances_report(&balances) {
        println!("{line}");
    }
    println!("  Total rows:       {txn_count:>14}");
    Ok(())
}

fn cli_recent(args: &[String], settings: &Settings) -> Result<()> {
    let limit = match args.first() {
        Some(n) => n
            .parse::<u32>()
            .with_context(|| format!("Invalid row count: '{n}'"))?,
        None => DEFAULT_RECENT,
    };

    let db = open_db(settings)?;
    let entries = db.get_recent(limit)?;
    if entries.is_empty() {
        println!("No transactions");
        return Ok(());
    }

    println!("{}", display::recent_header());
    println!("{}", "─".repeat(100));
    for e in &entries {
        println!("{}", display::recent_row(e));
    }
    Ok(())
}

fn cli_export(args: &[String], settings: &Settings) -> Result<()> {
    let month = args
        .windows(2)
        .find(|w| w[0] == "--month")
        .map(|w| w[1].clone());
    if let Some(m) = &month {
        chrono::NaiveDate::parse_from_str(&format!("{m}-01"), "%Y-%m-%d")
            .with_context(|| format!("Invalid month '{m}', expected YYYY-MM"))?;
    }

    // Output path is the first non-flag argument
    let output_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| PathBuf::from(expand_home(a)))
        .unwrap_or_else(|| default_export_path(month.as_deref()));

    let db = open_db(settings)?;
    let count = db.export_to_csv(&output_path, month.as_deref())?;
    match (count, &month) {
        (0, Some(m)) => println!("No transactions for {m}"),
        (0, None) => println!("No transactions"),
        _ => println!("Exported {count} transactions to {}", output_path.display()),
    }
    Ok(())
}

fn default_export_path(month: Option<&str>) -> PathBuf {
    let name = match month {
        Some(m) => format!("smsledger-export-{m}.csv"),
        None => "smsledger-export.csv".to_string(),
    };
    Path::new(&expand_home("~/")).join(name)
}

fn cli_setup(settings: &Settings) -> Result<()> {
    let db = open_db(settings)?;
    let version = db.schema_version()?;
    tracing::info!(path = %settings.db_path.display(), version, "ledger ready");
    println!(
        "Ledger ready at {} (schema v{version})",
        settings.db_path.display()
    );
    Ok(())
}
