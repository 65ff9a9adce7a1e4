//! Replay Binary
//!
//! Feeds a JSON-lines event script into a forest and prints what every
//! opponent's legions are predicted to hold.

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use predict_splits::forest::Event;
use predict_splits::forest::Forest;
use std::io::BufRead;

#[derive(Parser)]
#[command(author, version, about = "Replay legion events and predict split contents", long_about = None)]
struct Args {
    /// event script, one JSON object per line, or - for stdin
    #[arg(default_value = "-")]
    script: String,
    /// print one player's whole tree as Graphviz
    #[arg(long, value_name = "PLAYER")]
    dot: Option<String>,
    /// list every legion ever seen, oldest first
    #[arg(long)]
    nodes: bool,
    /// log every split decision and reveal
    #[arg(short, long)]
    verbose: bool,
    /// also write a debug log under logs/
    #[arg(long)]
    log_file: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    predict_splits::log(level, args.log_file)?;

    let reader: Box<dyn BufRead> = match args.script.as_str() {
        "-" => Box::new(std::io::stdin().lock()),
        path => Box::new(std::io::BufReader::new(
            std::fs::File::open(path).with_context(|| format!("open {}", path))?,
        )),
    };

    let mut forest = Forest::default();
    for (n, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("read line {}", n + 1))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event = Event::try_from(line).with_context(|| format!("parse line {}", n + 1))?;
        log::debug!("{:<32}{}", format!("line {}", n + 1), event);
        forest
            .apply(&event)
            .with_context(|| format!("apply line {}: {}", n + 1, event))?;
    }
    log::info!("{:<32}{:<32}", "players", forest.players().count());

    if let Some(player) = args.dot.as_deref() {
        println!("{}", forest.dot(player)?);
        return Ok(());
    }
    for player in forest.players() {
        println!("{}", player.bold());
        let legions = match args.nodes {
            true => forest.nodes(player)?,
            false => forest.leaves(player)?,
        };
        for legion in legions {
            let line = legion.to_string();
            match legion.is_certain() {
                true => println!("  {}", line.green()),
                false => println!("  {}", line.yellow()),
            }
        }
    }
    Ok(())
}
