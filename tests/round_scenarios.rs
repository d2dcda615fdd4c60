//! Full rounds driven through the public API on simulated time

use std::cell::RefCell;
use std::rc::Rc;

use healthy_catch::GameConfig;
use healthy_catch::sim::{
    Catalog, Category, ClockState, Direction, FoodDefinition, Phase, RoundSummary, Session,
    SessionState, autopilot,
};

fn play_round(session: &mut Session, start_ms: u64) -> u64 {
    let step = session.config().tick_interval_ms;
    let mut now = start_ms;
    while session.phase() == Phase::Running {
        if let Some(direction) = autopilot::choose_move(session.state(), session.config()) {
            session.move_lane(direction);
        }
        now += step;
        session.tick(now);
    }
    now
}

#[test]
fn full_round_ends_on_time() {
    let mut session = Session::new(GameConfig::default(), Catalog::standard(), 2024).unwrap();
    session.start();
    let ended_at = play_round(&mut session, 0);

    let state = session.state();
    assert_eq!(state.phase, Phase::Ended);
    assert_eq!(state.remaining_time, 0);
    // Countdown fires at 60_000; the loop stops on the first step at or after it
    assert!((60_000..60_016).contains(&ended_at), "{ended_at}");
    assert_eq!(session.clock_state(), ClockState::Stopped);
}

#[test]
fn autopilot_round_scores_consistently() {
    let mut session = Session::new(GameConfig::default(), Catalog::standard(), 99).unwrap();
    session.start();
    play_round(&mut session, 0);

    let summary = session.summary();
    let state = session.state();
    assert!(!state.history.is_empty(), "autopilot should catch something");
    assert_eq!(summary.total_points, state.score);
    assert_eq!(summary.total_catches(), state.history.len());
    assert!(summary.healthy_count > 0);

    let calories: u64 = state.history.iter().map(|r| u64::from(r.food.calories)).sum();
    assert_eq!(summary.total_calories, calories);
    assert!(state.history.windows(2).all(|w| w[0].at_ms <= w[1].at_ms));
}

#[test]
fn history_grows_only_on_catches() {
    let mut session = Session::new(GameConfig::default(), Catalog::standard(), 5).unwrap();
    let log: Rc<RefCell<Vec<SessionState>>> = Rc::default();
    let sink = log.clone();
    session.subscribe(move |state| sink.borrow_mut().push(state.clone()));

    session.start();
    play_round(&mut session, 0);

    let snapshots = log.borrow();
    for pair in snapshots.windows(2) {
        let (before, after) = (&pair[0], &pair[1]);
        if after.phase != Phase::Running || before.phase != Phase::Running {
            continue;
        }
        let new = &after.history[before.history.len()..];
        let delta: i64 = new.iter().map(|r| i64::from(r.food.points)).sum();
        assert_eq!(after.score - before.score, delta);
        if !new.is_empty() {
            assert_eq!(after.last_score_delta, new[new.len() - 1].food.points);
        }
    }
}

#[test]
fn surviving_items_stay_inside_playfield() {
    let config = GameConfig::default();
    let height = config.playfield_height;
    let mut session = Session::new(config, Catalog::standard(), 31).unwrap();
    let ok = Rc::new(RefCell::new(true));
    let sink = ok.clone();
    session.subscribe(move |state| {
        if state.in_flight.iter().any(|i| i.y >= height) {
            *sink.borrow_mut() = false;
        }
    });

    session.start();
    play_round(&mut session, 0);
    assert!(*ok.borrow());
}

#[test]
fn replay_after_results_starts_clean() {
    let mut session = Session::new(GameConfig::default(), Catalog::standard(), 7).unwrap();
    session.start();
    let ended_at = play_round(&mut session, 0);
    assert!(!session.start(), "start is only valid from Idle");

    assert!(session.restart());
    let state = session.state();
    assert_eq!(state.phase, Phase::Running);
    assert_eq!(state.score, 0);
    assert_eq!(state.remaining_time, 60);
    assert!(state.in_flight.is_empty());
    assert!(state.history.is_empty());

    play_round(&mut session, ended_at);
    assert_eq!(session.phase(), Phase::Ended);

    assert!(session.return_home());
    assert_eq!(session.phase(), Phase::Idle);
    assert!(!session.move_lane(Direction::Right));
}

#[test]
fn unhealthy_only_catalog_goes_negative() {
    let catalog = Catalog::new(vec![FoodDefinition::new(
        "Donut",
        "🍩",
        Category::Unhealthy,
        -15,
        452,
    )])
    .unwrap();
    let config = GameConfig {
        lanes: 1,
        round_secs: 10,
        ..Default::default()
    };
    let mut session = Session::new(config, catalog, 1).unwrap();
    session.start();
    play_round(&mut session, 0);

    // One lane: every item is caught
    let state = session.state();
    assert!(state.score < 0);
    assert_eq!(state.score, -15 * state.history.len() as i64);
    assert_eq!(
        session.summary(),
        RoundSummary {
            healthy_count: 0,
            unhealthy_count: state.history.len(),
            total_calories: 452 * state.history.len() as u64,
            total_points: state.score,
        }
    );
}

#[test]
fn json_config_drives_round_length() {
    let config = GameConfig::from_json(r#"{ "round_secs": 3 }"#).unwrap();
    let mut session = Session::new(config, Catalog::standard(), 1).unwrap();
    session.start();
    let ended_at = play_round(&mut session, 0);
    assert!((3_000..3_016).contains(&ended_at), "{ended_at}");
}
