use fight_client::{Controller, MatchOptions, load_content, run_match};
use fight_core::Side;
use fight_runtime::ReplayLog;

#[test]
fn idle_match_runs_out_of_frames_without_a_winner() {
    let options = MatchOptions {
        controllers: [Controller::Idle, Controller::Idle],
        max_frames: 240,
        ..MatchOptions::default()
    };
    let summary = run_match(&options).unwrap();

    assert_eq!(summary.winner, None);
    assert_eq!(summary.frames, 240);
    assert_eq!(summary.hits, [0, 0]);
    assert_eq!(summary.round_wins, [0, 0]);
}

#[test]
fn cpu_beats_idle_and_saves_the_round() {
    let dir = tempfile::tempdir().unwrap();
    let replay_path = dir.path().join("replays").join("first.replay");
    let options = MatchOptions {
        controllers: [Controller::Idle, Controller::Cpu],
        seed: 2023,
        rounds_to_win: Some(1),
        replay_out: Some(replay_path.clone()),
        ..MatchOptions::default()
    };
    let summary = run_match(&options).unwrap();

    assert_eq!(summary.winner, Some(Side::P2));
    assert_eq!(summary.round_wins, [0, 1]);
    assert!(summary.hits[1] > 0);
    assert_eq!(summary.hits[0], 0);

    let log = ReplayLog::load(&replay_path).unwrap();
    assert!(!log.is_empty());
    assert_eq!(log.fighters, ["ronin".to_owned(), "ronin".to_owned()]);
}

#[test]
fn missing_data_dir_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let options = MatchOptions {
        data_dir: Some(dir.path().join("nowhere")),
        ..MatchOptions::default()
    };
    assert!(load_content(&options).is_err());
}
