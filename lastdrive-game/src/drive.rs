//! Play resolution and the drive session that owns it.
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEEP_PASS_COMPLETION_PCT, LOG_ENDED, LOG_FIRST_DOWN, LOG_PLAY, MAX_DOWNS,
    MISCOMMUNICATION_PENALTY_SECS,
};
use crate::play::PlayCall;
use crate::result::DriveSummary;
use crate::rng::{OutcomeSource, SeededOutcomes};
use crate::state::{DrivePhase, DriveState};

/// Errors raised when a session is driven past its end.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DriveError {
    #[error("the drive is already over ({phase})")]
    DriveOver { phase: DrivePhase },
}

/// Everything one snap produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    pub call: PlayCall,
    pub gain: i32,
    /// Seconds run off the clock, penalty included.
    pub play_time: i32,
    /// Whether the ball was caught; only deep passes can fall incomplete.
    pub completed: Option<bool>,
    pub first_down: bool,
    pub phase: DrivePhase,
    pub state: DriveState,
}

/// Resolve a single play against `state`, drawing randomness from `source`.
///
/// The clock is drawn before the yardage. A touchdown ends the play before
/// any down bookkeeping, so the chains never move on a scoring play.
pub fn resolve_play<S>(state: &mut DriveState, call: PlayCall, source: &mut S) -> PlayOutcome
where
    S: OutcomeSource + ?Sized,
{
    let mut play_time = source.play_clock();
    let mut completed = None;

    let gain = match call {
        PlayCall::ShortPass => source.short_pass_gain(),
        PlayCall::DeepPass => {
            let caught = source.deep_pass_roll() < DEEP_PASS_COMPLETION_PCT;
            completed = Some(caught);
            if caught { source.deep_pass_gain() } else { 0 }
        }
        PlayCall::Run => source.run_gain(),
        PlayCall::Miscommunication => {
            play_time += MISCOMMUNICATION_PENALTY_SECS;
            0
        }
    };

    state.time_left -= play_time;
    state.yard_line -= gain;
    state.yards_to_go -= gain;

    let mut first_down = false;
    if state.yard_line <= 0 {
        state.touchdown = true;
    } else if state.yards_to_go <= 0 {
        state.reset_chains();
        first_down = true;
        info!("{LOG_FIRST_DOWN}: yard_line={}", state.yard_line);
    } else {
        state.down = state.down.saturating_add(1);
    }

    let phase = state.phase();
    debug!(
        "{LOG_PLAY}: call={call:?} gain={gain} play_time={play_time} yard_line={} down={} to_go={} time_left={} phase={phase}",
        state.yard_line, state.down, state.yards_to_go, state.time_left
    );
    if phase.is_terminal() {
        info!("{LOG_ENDED}: {phase}");
    }

    PlayOutcome {
        call,
        gain,
        play_time,
        completed,
        first_down,
        phase,
        state: state.clone(),
    }
}

/// A drive in progress: state, outcome source and the play-by-play log.
#[derive(Debug, Clone)]
pub struct DriveSession<S = SeededOutcomes> {
    state: DriveState,
    source: S,
    seed: Option<u64>,
    history: Vec<PlayOutcome>,
}

impl DriveSession<SeededOutcomes> {
    /// Start a drive from the kickoff state on seeded streams.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut session = Self::with_source(
            DriveState::default(),
            SeededOutcomes::from_user_seed(seed),
        );
        session.seed = Some(seed);
        session
    }
}

impl<S: OutcomeSource> DriveSession<S> {
    /// Start a drive from an arbitrary state with an injected outcome source.
    #[must_use]
    pub const fn with_source(state: DriveState, source: S) -> Self {
        Self {
            state,
            source,
            seed: None,
            history: Vec::new(),
        }
    }

    /// Call the next play.
    ///
    /// # Errors
    ///
    /// Returns [`DriveError::DriveOver`] once the drive has reached a
    /// terminal phase.
    pub fn run_play(&mut self, call: PlayCall) -> Result<PlayOutcome, DriveError> {
        if !self.state.is_active() {
            return Err(DriveError::DriveOver {
                phase: self.state.phase(),
            });
        }
        let outcome = resolve_play(&mut self.state, call, &mut self.source);
        debug_assert!(outcome.phase.is_terminal() || self.state.down <= MAX_DOWNS);
        self.history.push(outcome.clone());
        Ok(outcome)
    }

    #[must_use]
    pub const fn phase(&self) -> DrivePhase {
        self.state.phase()
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        !self.state.is_active()
    }

    #[must_use]
    pub const fn state(&self) -> &DriveState {
        &self.state
    }

    /// Plays run so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[PlayOutcome] {
        &self.history
    }

    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Summarise the drive as it stands.
    #[must_use]
    pub fn summary(&self) -> DriveSummary {
        DriveSummary::from_parts(&self.state, &self.history, self.seed)
    }
}
