//! Terminal rendering for the drive.
//!
//! Everything writes to a caller-supplied [`Write`] so the same code serves
//! the interactive terminal and captured buffers in tests.
use colored::Colorize;
use lastdrive_game::constants::{DEFENSE, DEFENSE_SCORE, OFFENSE, OFFENSE_SCORE};
use lastdrive_game::{DrivePhase, DriveState, DriveSummary, PlayCall, PlayOutcome};
use std::io::{self, Write};

use crate::input::Choice;

const RULE_HEAVY: &str = "============================================";
const RULE_LIGHT: &str = "--------------------------------------------";

pub fn write_banner(out: &mut impl Write, state: &DriveState) -> io::Result<()> {
    writeln!(out, "{}", RULE_HEAVY.cyan())?;
    writeln!(out, "{}", " LAST DRIVE CHAMPIONSHIP GAME".bright_cyan().bold())?;
    writeln!(out, " {OFFENSE} vs {DEFENSE}")?;
    writeln!(out, "{}", RULE_HEAVY.cyan())?;
    writeln!(out, "{OFFENSE} has the ball.")?;
    writeln!(
        out,
        "Score: {DEFENSE} {DEFENSE_SCORE}, {OFFENSE} {OFFENSE_SCORE}"
    )?;
    writeln!(out, "{} seconds remaining.", state.time_left)?;
    writeln!(out, "Ball on the {}-yard line.", state.yard_line)?;
    writeln!(out)
}

pub fn write_status(out: &mut impl Write, state: &DriveState) -> io::Result<()> {
    writeln!(out, "{RULE_LIGHT}")?;
    writeln!(
        out,
        "Time Left: {} seconds",
        state.time_left.to_string().yellow()
    )?;
    writeln!(
        out,
        "Down {} & {} | Ball on {}",
        state.down,
        state.yards_to_go,
        state.ball_on(DEFENSE)
    )
}

pub fn write_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Choose a play:")?;
    for (number, call) in PlayCall::MENU {
        writeln!(out, "{number}. {call}")?;
    }
    write!(out, "Choice: ")
}

/// Finish the prompt line for input the terminal did not echo.
pub fn write_echo(out: &mut impl Write, choice: &Choice) -> io::Result<()> {
    match choice {
        Choice::Scripted(raw) => writeln!(out, "{}", raw.dimmed()),
        Choice::EndOfInput => writeln!(out),
        Choice::Typed(_) => Ok(()),
    }
}

pub fn write_outcome(out: &mut impl Write, outcome: &PlayOutcome) -> io::Result<()> {
    writeln!(out)?;
    let gain = outcome.gain;
    match (outcome.call, outcome.completed) {
        (PlayCall::ShortPass, _) => {
            writeln!(out, "Short pass complete for {gain} yards.")?;
        }
        (PlayCall::DeepPass, Some(true)) => {
            writeln!(out, "{}", format!("Deep ball hauled in for {gain} yards.").green())?;
        }
        (PlayCall::DeepPass, _) => {
            writeln!(out, "Deep pass falls incomplete.")?;
        }
        (PlayCall::Run, _) => {
            writeln!(out, "Run up the middle for {gain} yards.")?;
        }
        (PlayCall::Miscommunication, _) => {
            writeln!(out, "{}", "Miscommunication on offense. No gain.".red())?;
        }
    }
    if outcome.first_down {
        writeln!(out, "{}", "First down.".bright_green())?;
    }
    Ok(())
}

pub fn write_result(out: &mut impl Write, summary: &DriveSummary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", RULE_HEAVY.cyan())?;
    let headline = match summary.ending.phase {
        DrivePhase::Touchdown => summary.ending.headline.bright_green().bold(),
        _ => summary.ending.headline.red().bold(),
    };
    writeln!(out, "{headline}")?;
    for line in &summary.ending.epilogue {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{}", RULE_HEAVY.cyan())?;
    writeln!(out, "Thanks for playing.")
}

/// Seed and draw details shown with `--verbose`.
pub fn write_details(
    out: &mut impl Write,
    summary: &DriveSummary,
    draws: lastdrive_game::DrawCounts,
) -> io::Result<()> {
    writeln!(out)?;
    if let Some(seed) = summary.seed {
        writeln!(out, "Seed: {seed}")?;
    }
    writeln!(
        out,
        "Plays: {} | Yards: {} | First downs: {} | Clock used: {}s",
        summary.plays, summary.total_yards, summary.first_downs, summary.time_used
    )?;
    writeln!(
        out,
        "RNG draws: clock {} / yardage {}",
        draws.clock, draws.yardage
    )
}
