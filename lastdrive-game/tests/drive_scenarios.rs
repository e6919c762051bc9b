use lastdrive_game::{
    DriveError, DrivePhase, DriveSession, DriveState, OutcomeSource, PlayCall,
};
use std::collections::VecDeque;

/// Outcome source that replays fixed draws, so scenarios can force results.
#[derive(Debug, Default)]
struct ForcedOutcomes {
    clock: VecDeque<i32>,
    gains: VecDeque<i32>,
    rolls: VecDeque<u8>,
}

impl ForcedOutcomes {
    fn clock(mut self, secs: &[i32]) -> Self {
        self.clock.extend(secs);
        self
    }

    fn gains(mut self, yards: &[i32]) -> Self {
        self.gains.extend(yards);
        self
    }

    fn rolls(mut self, rolls: &[u8]) -> Self {
        self.rolls.extend(rolls);
        self
    }

    fn next_gain(&mut self) -> i32 {
        self.gains.pop_front().expect("scenario scripted a gain")
    }
}

impl OutcomeSource for ForcedOutcomes {
    fn play_clock(&mut self) -> i32 {
        self.clock.pop_front().expect("scenario scripted a clock draw")
    }

    fn short_pass_gain(&mut self) -> i32 {
        self.next_gain()
    }

    fn deep_pass_roll(&mut self) -> u8 {
        self.rolls.pop_front().expect("scenario scripted a roll")
    }

    fn deep_pass_gain(&mut self) -> i32 {
        self.next_gain()
    }

    fn run_gain(&mut self) -> i32 {
        self.next_gain()
    }
}

#[test]
fn run_then_short_pass_converts_first_down() {
    let source = ForcedOutcomes::default().clock(&[6, 6]).gains(&[5, 10]);
    let mut session = DriveSession::with_source(DriveState::default(), source);

    let run = session.run_play(PlayCall::Run).unwrap();
    assert_eq!(run.state.yard_line, 45);
    assert_eq!(run.state.yards_to_go, 5);
    assert_eq!(run.state.down, 2);

    let pass = session.run_play(PlayCall::ShortPass).unwrap();
    assert!(pass.first_down);
    assert_eq!(pass.state.down, 1);
    assert_eq!(pass.state.yards_to_go, 10);
    assert_eq!(pass.state.yard_line, 35);
    assert_eq!(session.phase(), DrivePhase::InProgress);

    let summary = session.summary();
    assert_eq!(summary.first_downs, 1);
    assert_eq!(summary.total_yards, 15);
    assert_eq!(summary.time_used, 12);
}

#[test]
fn deep_completion_from_the_ten_scores() {
    let state = DriveState {
        yard_line: 10,
        ..DriveState::default()
    };
    let source = ForcedOutcomes::default().clock(&[8]).rolls(&[37]).gains(&[18]);
    let mut session = DriveSession::with_source(state, source);

    let outcome = session.run_play(PlayCall::from_choice(2)).unwrap();
    assert_eq!(outcome.state.yard_line, -8);
    assert_eq!(outcome.phase, DrivePhase::Touchdown);
    assert!(session.is_over());

    let summary = session.summary();
    assert!(summary.ending.offense_won());
    assert_eq!(summary.ending.headline, "TOUCHDOWN WESTERN STATE");
    assert!(matches!(
        session.run_play(PlayCall::Run),
        Err(DriveError::DriveOver {
            phase: DrivePhase::Touchdown
        })
    ));
}

#[test]
fn clock_runs_out_on_the_last_snap() {
    let state = DriveState {
        time_left: 5,
        ..DriveState::default()
    };
    let source = ForcedOutcomes::default().clock(&[6]).gains(&[8]);
    let mut session = DriveSession::with_source(state, source);

    let outcome = session.run_play(PlayCall::ShortPass).unwrap();
    assert!(outcome.state.time_left <= 0);
    assert_eq!(outcome.phase, DrivePhase::TimeExpired);
    assert_eq!(session.summary().ending.headline, "Time expires.");
}

#[test]
fn invalid_choice_is_a_miscommunication() {
    let source = ForcedOutcomes::default().clock(&[9]);
    let mut session = DriveSession::with_source(DriveState::default(), source);

    let outcome = session.run_play(PlayCall::parse("9")).unwrap();
    assert_eq!(outcome.call, PlayCall::Miscommunication);
    assert_eq!(outcome.gain, 0);
    assert_eq!(outcome.play_time, 13);
    assert_eq!(outcome.state.yard_line, 50);
    assert_eq!(outcome.state.down, 2);
    assert_eq!(outcome.state.time_left, 47);
}

#[test]
fn four_short_runs_turn_it_over() {
    let source = ForcedOutcomes::default()
        .clock(&[6, 6, 6, 6])
        .gains(&[2, 2, 2, 2]);
    let mut session = DriveSession::with_source(DriveState::default(), source);

    for _ in 0..4 {
        session.run_play(PlayCall::Run).unwrap();
    }
    assert_eq!(session.phase(), DrivePhase::TurnoverOnDowns);
    assert_eq!(session.state().time_left, 36);
    assert_eq!(session.state().yard_line, 42);
    assert_eq!(
        session.summary().ending.epilogue,
        ["Southern Coast takes over and wins."]
    );
}

#[test]
fn incomplete_deep_balls_burn_downs_and_clock() {
    let source = ForcedOutcomes::default()
        .clock(&[12, 12, 12, 12])
        .rolls(&[38, 99, 50, 38]);
    let mut session = DriveSession::with_source(DriveState::default(), source);

    for _ in 0..4 {
        let outcome = session.run_play(PlayCall::DeepPass).unwrap();
        assert_eq!(outcome.completed, Some(false));
        assert_eq!(outcome.gain, 0);
    }
    assert_eq!(session.state().time_left, 12);
    assert_eq!(session.phase(), DrivePhase::TurnoverOnDowns);
}

#[test]
fn summary_serializes_for_reports() {
    let source = ForcedOutcomes::default().clock(&[6]).gains(&[4]);
    let mut session = DriveSession::with_source(DriveState::default(), source);
    session.run_play(PlayCall::ShortPass).unwrap();

    let json = serde_json::to_value(session.summary()).unwrap();
    assert_eq!(json["plays"], 1);
    assert_eq!(json["ending"]["phase"], "in_progress");
    assert_eq!(json["history"][0]["call"], "short_pass");
    assert_eq!(json["final_state"]["yard_line"], 46);
}
