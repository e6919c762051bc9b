//! Fixed rules and tuning constants for the drive simulation.
//!
//! Every number the simulation reads lives here. The drive has no
//! configurable rules, so changing a value means changing code.

use std::ops::RangeInclusive;

// Logging keys -------------------------------------------------------------
pub(crate) const LOG_PLAY: &str = "drive.play";
pub(crate) const LOG_FIRST_DOWN: &str = "drive.first_down";
pub(crate) const LOG_ENDED: &str = "drive.ended";

// Kickoff state ------------------------------------------------------------
pub const START_YARD_LINE: i32 = 50;
pub const START_DOWN: u8 = 1;
pub const FIRST_DOWN_DISTANCE: i32 = 10;
pub const START_TIME_LEFT: i32 = 60;
pub const MAX_DOWNS: u8 = 4;

// Game clock ---------------------------------------------------------------
pub const PLAY_CLOCK_SECS: RangeInclusive<i32> = 6..=12;
pub const MISCOMMUNICATION_PENALTY_SECS: i32 = 4;

// Yardage tables -----------------------------------------------------------
pub const SHORT_PASS_GAIN: RangeInclusive<i32> = 4..=10;
pub const RUN_GAIN: RangeInclusive<i32> = 2..=7;
pub const DEEP_PASS_GAIN: RangeInclusive<i32> = 18..=37;
pub const DEEP_PASS_ROLL: RangeInclusive<u8> = 0..=99;
/// A deep pass completes when the percentile roll is strictly below this.
pub const DEEP_PASS_COMPLETION_PCT: u8 = 38;

// Presentation -------------------------------------------------------------
pub const OFFENSE: &str = "Western State";
pub const DEFENSE: &str = "Southern Coast";
pub const OFFENSE_SCORE: u32 = 22;
pub const DEFENSE_SCORE: u32 = 28;
