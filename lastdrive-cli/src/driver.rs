use anyhow::Result;
use lastdrive_game::{DrivePhase, DriveSession, DriveSummary, OutcomeSource};
use std::io::{BufRead, Write};

use crate::input::PlayChoices;
use crate::render;

/// Run the interactive loop until the drive ends, rendering to `out`.
///
/// # Errors
///
/// Fails only when writing to `out` fails. Bad or missing input never
/// ends the drive early.
pub fn play_drive<S, R, W>(
    session: &mut DriveSession<S>,
    choices: &mut PlayChoices<R>,
    out: &mut W,
) -> Result<DriveSummary>
where
    S: OutcomeSource,
    R: BufRead,
    W: Write,
{
    render::write_banner(out, session.state())?;

    while !session.is_over() {
        render::write_status(out, session.state())?;
        render::write_menu(out)?;
        out.flush()?;

        let choice = choices.next_choice();
        render::write_echo(out, &choice)?;

        let outcome = session.run_play(choice.call())?;
        render::write_outcome(out, &outcome)?;

        match outcome.phase {
            DrivePhase::InProgress => {}
            DrivePhase::Touchdown | DrivePhase::TimeExpired | DrivePhase::TurnoverOnDowns => break,
        }
    }

    let summary = session.summary();
    render::write_result(out, &summary)?;
    out.flush()?;
    Ok(summary)
}
