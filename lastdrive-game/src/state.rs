//! Drive state and the phase machine derived from it.
use serde::{Deserialize, Serialize};

use crate::constants::{
    FIRST_DOWN_DISTANCE, MAX_DOWNS, START_DOWN, START_TIME_LEFT, START_YARD_LINE,
};

/// Where a drive stands. Every phase except `InProgress` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrivePhase {
    InProgress,
    /// The offense crossed the goal line.
    Touchdown,
    /// The game clock ran out before the offense scored.
    TimeExpired,
    /// The offense failed to convert on fourth down with time remaining.
    TurnoverOnDowns,
}

impl DrivePhase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// Stable key for logs and reports.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Touchdown => "touchdown",
            Self::TimeExpired => "time_expired",
            Self::TurnoverOnDowns => "turnover_on_downs",
        }
    }
}

impl std::fmt::Display for DrivePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Mutable record of the drive: field position, down, distance and clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveState {
    /// Yards between the ball and the opponent's goal line.
    pub yard_line: i32,
    pub down: u8,
    pub yards_to_go: i32,
    /// Game clock in seconds.
    pub time_left: i32,
    pub touchdown: bool,
}

impl Default for DriveState {
    fn default() -> Self {
        Self {
            yard_line: START_YARD_LINE,
            down: START_DOWN,
            yards_to_go: FIRST_DOWN_DISTANCE,
            time_left: START_TIME_LEFT,
            touchdown: false,
        }
    }
}

impl DriveState {
    /// True while another play may be called.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.time_left > 0 && self.down <= MAX_DOWNS && !self.touchdown
    }

    /// Phase implied by the current fields, touchdown taking priority over
    /// the clock and the clock over downs.
    #[must_use]
    pub const fn phase(&self) -> DrivePhase {
        if self.touchdown {
            DrivePhase::Touchdown
        } else if self.time_left <= 0 {
            DrivePhase::TimeExpired
        } else if self.down > MAX_DOWNS {
            DrivePhase::TurnoverOnDowns
        } else {
            DrivePhase::InProgress
        }
    }

    /// Move the chains: back to first down with a fresh ten yards.
    pub(crate) const fn reset_chains(&mut self) {
        self.down = START_DOWN;
        self.yards_to_go = FIRST_DOWN_DISTANCE;
    }

    /// Field position as the scoreboard reads it, e.g. "the Southern Coast 35".
    #[must_use]
    pub fn ball_on(&self, defense: &str) -> String {
        if self.yard_line <= 0 {
            format!("the {defense} end zone")
        } else {
            format!("the {defense} {}", self.yard_line)
        }
    }
}
