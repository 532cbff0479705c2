use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::io::Read;

use memlog::MemoryLog;
use memlog::cli::{Cli, Command};
use memlog::config::Config;

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let log_file = cli.log_file.unwrap_or(config.log_file);

    info!("memlog starting");

    let log = MemoryLog::open(&log_file);

    match cli.command {
        Command::Append { text } => {
            let text = match text {
                Some(t) => t,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read from stdin")?;
                    buf.trim_end_matches('\n').to_string()
                }
            };
            let added = log.append(&text)?;
            println!(
                "{} Remembered {} line(s) in {}",
                "✓".green(),
                added,
                log_file.display().to_string().cyan()
            );
        }
        Command::Search {
            query,
            max_results,
            json,
        } => {
            let matches = memlog::search(&log, &query, max_results.or(Some(config.max_results)))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else if matches.is_empty() {
                println!("No matches");
            } else {
                for m in &matches {
                    println!(
                        "{}:{} {}",
                        m.line_number.to_string().yellow(),
                        format!("{:.1}", m.score).dimmed(),
                        m.text
                    );
                }
            }
        }
        Command::Show { selector } => match memlog::fetch(&log, &selector) {
            Ok(lines) => {
                for line in &lines {
                    println!("{} {}", line.line_number.to_string().yellow(), line.text);
                }
            }
            // A lookup miss is an answer, not a failure
            Err(e) if e.is_miss() => println!("No lines in range"),
            Err(e) => return Err(e.into()),
        },
    }

    Ok(())
}
