use game_core::{Arena, Side};
use proto::{Command, DifficultyLevel, GameMode, Notification, SessionState, SettingKey, SkinId};
use session::Session;

fn new_session() -> Session {
    let mut session = Session::new(Arena::default(), 2024);
    session.handle(Command::Continue);
    session
}

fn start_one_player(session: &mut Session, level: DifficultyLevel) {
    session.handle(Command::SelectMode(GameMode::OnePlayer));
    session.handle(Command::SelectDifficulty(level));
    assert_eq!(session.state(), SessionState::Playing);
}

fn start_two_player(session: &mut Session, name1: &str, name2: &str) {
    session.handle(Command::SelectMode(GameMode::TwoPlayer));
    session.handle(Command::SubmitPlayerNames {
        name1: name1.into(),
        name2: name2.into(),
    });
    assert_eq!(session.state(), SessionState::Playing);
}

/// Tick until the round ends, returning every notification seen
fn play_out(session: &mut Session, max_ticks: u32) -> (u32, Vec<Notification>) {
    let mut seen = Vec::new();
    for tick in 1..=max_ticks {
        seen.extend(session.tick());
        if session.state() == SessionState::RoundEnd {
            return (tick, seen);
        }
    }
    panic!("round did not end within {max_ticks} ticks");
}

fn winner_labels(notifications: &[Notification]) -> Vec<String> {
    notifications
        .iter()
        .filter_map(|n| match n {
            Notification::RoundEnded { winner_label } => Some(winner_label.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_easy_match_plays_to_round_end() {
    let mut session = new_session();
    // Fastest ball keeps the test short
    session.handle(Command::OpenSettings);
    for _ in 0..10 {
        session.handle(Command::AdjustSetting {
            key: SettingKey::BallSpeed,
            delta: 0.05,
        });
    }
    session.handle(Command::ReturnToMenu);
    start_one_player(&mut session, DifficultyLevel::Easy);

    let (_, seen) = play_out(&mut session, 2_000_000);

    let labels = winner_labels(&seen);
    assert_eq!(labels.len(), 1);
    assert!(
        labels[0] == "Player A wins!" || labels[0] == "AI wins!",
        "unexpected label {}",
        labels[0]
    );
    assert_eq!(session.last_winner(), Some(labels[0].as_str()));

    let score = session.current_match().unwrap().score();
    assert!(score.a == 5 || score.b == 5);
    assert!(score.a <= 5 && score.b <= 5);

    // Scores in order, one point at a time
    let mut last = (0, 0);
    for n in &seen {
        if let Notification::Scored {
            score_a, score_b, ..
        } = n
        {
            assert_eq!(score_a + score_b, last.0 + last.1 + 1);
            last = (*score_a, *score_b);
        }
    }
    assert_eq!(last, (score.a, score.b));

    // Nothing changes after the round ended
    for _ in 0..1_000 {
        assert!(session.tick().is_empty());
    }
    assert_eq!(session.current_match().unwrap().score(), score);
}

#[test]
fn test_every_tick_reports_ball_position() {
    let mut session = new_session();
    start_one_player(&mut session, DifficultyLevel::Hard);

    for _ in 0..500 {
        let out = session.tick();
        let moved = out
            .iter()
            .filter(|n| matches!(n, Notification::BallMoved { .. }))
            .count();
        assert_eq!(moved, 1);
    }
}

#[test]
fn test_pause_freezes_play() {
    let mut session = new_session();
    start_one_player(&mut session, DifficultyLevel::Medium);
    for _ in 0..50 {
        session.tick();
    }

    session.handle(Command::TogglePause);
    assert_eq!(session.state(), SessionState::Paused);
    let frozen = session.current_match().unwrap().ball().unwrap();
    let ticks = session.current_match().unwrap().ticks();

    for _ in 0..200 {
        assert!(session.tick().is_empty());
    }
    session.handle(Command::MovePaddle { side: 0, dir: 1 });

    let game = session.current_match().unwrap();
    assert_eq!(game.ball().unwrap(), frozen);
    assert_eq!(game.ticks(), ticks);
    assert_eq!(game.paddle_y(Side::Left), Some(0.0));

    let out = session.handle(Command::TogglePause);
    assert!(out.contains(&Notification::PausedChanged { paused: false }));
    session.tick();
    assert_ne!(session.current_match().unwrap().ball().unwrap(), frozen);
}

#[test]
fn test_two_player_clock_ends_round() {
    let mut session = new_session();
    start_two_player(&mut session, "  Ada ", "Grace Brewster Hopper");
    assert_eq!(session.names().a, "Ada");
    assert_eq!(session.names().b, "Grace Brewst");

    let first = session.tick();
    assert!(first.contains(&Notification::TimerTick {
        seconds_left: 299.99
    }));

    let (ticks, seen) = play_out(&mut session, 40_000);
    assert_eq!(ticks + 1, 30_000);

    let labels = winner_labels(&seen);
    let score = session.current_match().unwrap().score();
    let expected = if score.a > score.b {
        "Ada wins!"
    } else if score.b > score.a {
        "Grace Brewst wins!"
    } else {
        "It's a tie!"
    };
    assert_eq!(labels, [expected]);
}

#[test]
fn test_rematch_resets_match_but_keeps_settings() {
    let mut session = new_session();
    session.handle(Command::OpenSkins);
    session.handle(Command::SelectSkin(SkinId::TennisBall));
    session.handle(Command::OpenSettings);
    session.handle(Command::AdjustSetting {
        key: SettingKey::PaddleSpeed,
        delta: 5.0,
    });
    session.handle(Command::ReturnToMenu);
    let settings = *session.settings();

    start_one_player(&mut session, DifficultyLevel::Easy);
    play_out(&mut session, 2_000_000);

    let out = session.handle(Command::Rematch);
    assert_eq!(
        out,
        vec![Notification::StateChanged {
            state: SessionState::Playing
        }]
    );
    assert_eq!(session.matches_started(), 2);
    assert_eq!(session.last_winner(), None);

    let game = session.current_match().unwrap();
    assert_eq!(game.score(), game_core::Score::new());
    assert_eq!(game.paddle_y(Side::Left), Some(0.0));
    assert_eq!(game.paddle_y(Side::Right), Some(0.0));
    assert_eq!(game.ball().unwrap().pos, glam::Vec2::ZERO);
    assert_eq!(game.config().paddle_speed, settings.paddle_speed);
    assert_eq!(*session.settings(), settings);
    assert_eq!(session.settings().skin, SkinId::TennisBall);
}

#[test]
fn test_return_to_menu_drops_match() {
    let mut session = new_session();
    start_one_player(&mut session, DifficultyLevel::Hard);
    session.tick();

    session.handle(Command::ReturnToMenu);
    assert_eq!(session.state(), SessionState::MainMenu);
    assert!(session.current_match().is_none());
    assert!(session.tick().is_empty());

    // Difficulty sticks for the next one-player match
    session.handle(Command::SelectMode(GameMode::OnePlayer));
    session.handle(Command::ReturnToMenu);
    assert_eq!(session.difficulty(), game_core::Difficulty::Hard);
}

#[test]
fn test_navigate_by_clicking() {
    let mut session = Session::new(Arena::default(), 5);
    session.click(glam::Vec2::new(123.0, 45.0));
    assert_eq!(session.state(), SessionState::MainMenu);

    let solo = session.menu().find("Solo Player").unwrap();
    session.click(solo);
    assert_eq!(session.state(), SessionState::DifficultySelect);

    let hard = session.menu().find("Hard").unwrap();
    session.click(hard);
    assert_eq!(session.state(), SessionState::Playing);
    assert_eq!(session.difficulty(), game_core::Difficulty::Hard);
    assert!(session
        .menu()
        .labels()
        .any(|label| label == "Player A: 0  AI: 0"));

    let menu_button = session.menu().find("Menu").unwrap();
    session.click(menu_button);
    assert_eq!(session.state(), SessionState::MainMenu);
}

#[test]
fn test_exit_ends_session() {
    let mut session = new_session();
    let out = session.handle(Command::Exit);
    assert_eq!(
        out,
        vec![Notification::StateChanged {
            state: SessionState::Exited
        }]
    );
    assert!(session.is_exited());

    assert!(session.handle(Command::ReturnToMenu).is_empty());
    assert!(session
        .handle(Command::SelectMode(GameMode::OnePlayer))
        .is_empty());
    assert!(session.tick().is_empty());
}

#[test]
fn test_skin_selection_returns_to_menu() {
    let mut session = new_session();
    session.handle(Command::OpenSkins);
    let out = session.handle(Command::SelectSkin(SkinId::Basketball));

    assert_eq!(out.len(), 2);
    assert!(matches!(
        out[0],
        Notification::SettingsChanged {
            skin: SkinId::Basketball,
            ..
        }
    ));
    assert_eq!(out[0].sound_cue(), Some("click"));
    assert_eq!(session.state(), SessionState::MainMenu);
}

#[test]
fn test_nan_setting_from_the_wire_cannot_freeze_play() {
    let mut session = new_session();
    session.handle(Command::OpenSettings);

    let bytes = Command::AdjustSetting {
        key: SettingKey::BallSpeed,
        delta: f32::NAN,
    }
    .to_bytes()
    .unwrap();
    let out = session.handle(Command::from_bytes(&bytes).unwrap());
    assert!(out.is_empty());
    assert!(session.settings().ball_speed.is_finite());

    session.handle(Command::ReturnToMenu);
    start_one_player(&mut session, DifficultyLevel::Easy);
    let ball = session.current_match().unwrap().ball().unwrap();
    assert_eq!(ball.vel.x.abs(), session.settings().ball_speed);

    let (_, seen) = play_out(&mut session, 2_000_000);
    assert_eq!(winner_labels(&seen).len(), 1);
}
