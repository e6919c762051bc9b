//! End-of-drive result calculation
use serde::{Deserialize, Serialize};

use crate::constants::{DEFENSE, OFFENSE};
use crate::drive::PlayOutcome;
use crate::state::{DrivePhase, DriveState};

/// Headline and epilogue text for a finished drive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ending {
    pub phase: DrivePhase,
    pub headline: String,
    pub epilogue: Vec<String>,
}

impl Ending {
    /// Text for `phase`. A drive still in progress reads as a drive that
    /// was abandoned before the result was known.
    #[must_use]
    pub fn for_phase(phase: DrivePhase) -> Self {
        let (headline, epilogue) = match phase {
            DrivePhase::Touchdown => (
                format!("TOUCHDOWN {}", OFFENSE.to_uppercase()),
                vec![
                    "The crowd erupts.".to_string(),
                    format!("{OFFENSE} wins the championship."),
                ],
            ),
            DrivePhase::TimeExpired => (
                "Time expires.".to_string(),
                vec![format!("{DEFENSE} survives the final drive.")],
            ),
            DrivePhase::TurnoverOnDowns => (
                "Turnover on downs.".to_string(),
                vec![format!("{DEFENSE} takes over and wins.")],
            ),
            DrivePhase::InProgress => (
                "Drive abandoned.".to_string(),
                vec!["No result was recorded.".to_string()],
            ),
        };
        Self {
            phase,
            headline,
            epilogue,
        }
    }

    #[must_use]
    pub const fn offense_won(&self) -> bool {
        matches!(self.phase, DrivePhase::Touchdown)
    }
}

/// Complete summary of a drive for the result banner and reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveSummary {
    pub ending: Ending,
    pub seed: Option<u64>,
    pub plays: usize,
    pub total_yards: i32,
    pub first_downs: usize,
    pub time_used: i32,
    pub final_state: DriveState,
    pub history: Vec<PlayOutcome>,
}

impl DriveSummary {
    #[must_use]
    pub fn from_parts(state: &DriveState, history: &[PlayOutcome], seed: Option<u64>) -> Self {
        Self {
            ending: Ending::for_phase(state.phase()),
            seed,
            plays: history.len(),
            total_yards: history.iter().map(|play| play.gain).sum(),
            first_downs: history.iter().filter(|play| play.first_down).count(),
            time_used: history.iter().map(|play| play.play_time).sum(),
            final_state: state.clone(),
            history: history.to_vec(),
        }
    }
}
