//! End-to-end tests: session, input mapping and rendering together

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_raycaster::core::{GridMap, MoveOutcome};
use tui_raycaster::engine::{
    sample_column, DirectiveLog, Session, SessionError, SessionSettings, StepOutcome,
};
use tui_raycaster::input::{command_for_key, should_quit, KeyPoller};
use tui_raycaster::types::{Command, Pose, RaySettings, ShadeMode, ViewSettings};

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

#[test]
fn test_centre_column_hits_wall_ahead() {
    let map = GridMap::default_arena();
    let view = ViewSettings::default();
    let ray = RaySettings {
        max_depth: 20.0,
        step: 0.05,
    };
    let pose = Pose::new(2.0, 2.0, 0.0);

    let centre = view.width / 2;
    let sample = sample_column(&map, &pose, &view, &ray, centre);
    assert!(sample.hit.hit);

    // The wall row starts at y = 19; the centre ray leans slightly off +y.
    let expected = 17.0 / sample.angle.cos();
    assert!(
        (sample.hit.distance - expected).abs() <= ray.step + 1e-3,
        "distance {} vs expected {}",
        sample.hit.distance,
        expected
    );
}

#[test]
fn test_toggle_changes_only_the_render_path() {
    let mut session =
        Session::new(GridMap::default_arena(), Pose::default(), SessionSettings::default())
            .unwrap();
    session.step(Some(Command::MoveForward));
    session.step(Some(Command::RotateRight));

    let pose = session.pose();
    let map = session.map().clone();

    let mut before = DirectiveLog::new();
    session.render(&mut before).unwrap();

    assert_eq!(
        session.step(Some(Command::ToggleShading)),
        StepOutcome::ShadingToggled(ShadeMode::Color)
    );
    assert_eq!(session.pose(), pose);
    assert_eq!(session.map(), &map);

    let mut after = DirectiveLog::new();
    session.render(&mut after).unwrap();

    // Same geometry, different tokens.
    let rows_before: Vec<_> = before.spans().map(|(c, r, _)| (c, r.clone())).collect();
    let rows_after: Vec<_> = after.spans().map(|(c, r, _)| (c, r.clone())).collect();
    assert_eq!(rows_before, rows_after);
    assert!(after.spans().all(|(_, _, t)| t.background.is_some()));
    assert!(before.spans().all(|(_, _, t)| t.background.is_none()));
}

#[test]
fn test_k_rotations_each_way_restore_heading() {
    let mut session =
        Session::new(GridMap::default_arena(), Pose::default(), SessionSettings::default())
            .unwrap();
    let start = session.pose().heading;

    for k in [1, 7, 40, 157] {
        for _ in 0..k {
            session.step(command_for_key(key('k')));
        }
        for _ in 0..k {
            session.step(command_for_key(key('l')));
        }
        assert!((session.pose().heading - start).abs() < 1e-4, "k = {}", k);
    }
}

#[test]
fn test_scripted_keys_drive_the_session() {
    let mut session =
        Session::new(GridMap::default_arena(), Pose::default(), SessionSettings::default())
            .unwrap();

    let script = vec![
        Some(key('w')),
        None,
        Some(key('x')),
        Some(key('c')),
        Some(key('s')),
        Some(key('q')),
    ];
    let mut keys = script.into_iter();

    let mut outcomes = Vec::new();
    loop {
        let pressed = keys.poll_key().unwrap();
        if pressed.is_some_and(should_quit) {
            break;
        }
        outcomes.push(session.step(pressed.and_then(command_for_key)));
    }

    assert_eq!(
        outcomes,
        vec![
            StepOutcome::Player(MoveOutcome::Moved),
            StepOutcome::Idle,
            StepOutcome::Idle,
            StepOutcome::ShadingToggled(ShadeMode::Color),
            StepOutcome::Player(MoveOutcome::Moved),
        ]
    );
    assert_eq!(session.pose(), Pose::default());
    assert_eq!(session.mode(), ShadeMode::Color);
}

#[test]
fn test_spawn_inside_wall_is_rejected() {
    let result = Session::new(
        GridMap::default_arena(),
        Pose::new(0.5, 0.5, 0.0),
        SessionSettings::default(),
    );
    assert!(matches!(result, Err(SessionError::SpawnBlocked { .. })));
}

#[test]
fn test_render_counts_frames() {
    let mut session =
        Session::new(GridMap::default_arena(), Pose::default(), SessionSettings::default())
            .unwrap();
    let mut log = DirectiveLog::new();
    for _ in 0..3 {
        session.render(&mut log).unwrap();
    }
    assert_eq!(session.frame(), 3);
    assert_eq!(log.spans().count(), ViewSettings::default().width as usize);
}
