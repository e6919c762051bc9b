mod driver;
mod input;
mod render;
mod report;
mod util;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use lastdrive_game::{DriveSession, entropy_seed, parse_seed};
use std::io::{Write, stdin, stdout};
use std::path::PathBuf;

use driver::play_drive;
use input::PlayChoices;
use report::{DriveReport, write_json_report};
use util::split_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Drive transcript only
    Console,
    /// Transcript followed by a JSON summary
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "last-drive", version)]
#[command(about = "Call the plays on the final drive of the championship game")]
struct Args {
    /// Seed for a reproducible drive (decimal or 0x hex); defaults to the clock
    #[arg(long, value_parser = parse_seed)]
    seed: Option<u64>,

    /// Play choices to run before reading stdin (comma-separated, e.g. 3,1,2)
    #[arg(long)]
    plays: Option<String>,

    /// Report emitted after the drive
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the JSON report instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print seed, drive totals and RNG draw counts after the result
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(entropy_seed);
    log::info!("starting drive with seed {seed}");

    let scripted = args.plays.as_deref().map(split_csv).unwrap_or_default();
    let mut choices = PlayChoices::new(scripted, stdin().lock());
    let mut session = DriveSession::new(seed);

    let mut out = stdout().lock();
    let summary = play_drive(&mut session, &mut choices, &mut out)?;
    let draws = session.source().draws();

    if args.verbose {
        render::write_details(&mut out, &summary, draws)?;
    }
    out.flush()?;
    drop(out);

    if args.report == ReportFormat::Json {
        write_json_report(&DriveReport::new(&summary, draws), args.output)?;
    }

    Ok(())
}
