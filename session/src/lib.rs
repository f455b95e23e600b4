//! Pong session: menus, settings and the match lifecycle
//!
//! [`Session`] is the single entry point for a UI. Feed it [`Command`]s and
//! call [`Session::tick`] once per fixed simulation step; both return the
//! [`Notification`]s the UI should render or play sounds for.

pub mod fsm;
pub mod input;
pub mod menu;
pub mod names;
pub mod scheduler;
pub mod settings;
pub mod simulation;

pub use fsm::{Effect, SessionAction, SessionFsm, SessionState, Transition, TransitionResult};
pub use input::command_for_key;
pub use menu::{Menu, MenuElement};
pub use names::PlayerNames;
pub use scheduler::{FixedTicker, TitleAnimation};
pub use settings::Settings;
pub use simulation::{Match, MatchSetup};

use game_core::{Arena, Difficulty, GameEvent, Mode, Side};
use glam::Vec2;
use proto::{Command, DifficultyLevel, GameMode, Notification, SettingKey, SIDE_LEFT, SIDE_RIGHT};

pub struct Session {
    fsm: SessionFsm,
    arena: Arena,
    settings: Settings,
    mode: Mode,
    difficulty: Difficulty,
    names: PlayerNames,
    current: Option<Match>,
    title: TitleAnimation,
    last_winner: Option<String>,
    seed: u64,
    matches_started: u64,
}

impl Session {
    pub fn new(arena: Arena, seed: u64) -> Self {
        let mut session = Self {
            fsm: SessionFsm::new(),
            settings: Settings::for_arena(&arena),
            mode: Mode::OnePlayer,
            difficulty: Difficulty::default(),
            names: PlayerNames::default(),
            current: None,
            title: TitleAnimation::new(&arena),
            last_winner: None,
            arena,
            seed,
            matches_started: 0,
        };
        session.apply(fsm::TITLE_EFFECTS, &mut Vec::new());
        session
    }

    /// Apply one input command
    pub fn handle(&mut self, command: Command) -> Vec<Notification> {
        let mut out = Vec::new();

        match command {
            Command::MovePaddle { side, dir } => {
                if self.fsm.state() == SessionState::Playing {
                    if let (Some(side), Some(game)) = (side_from_wire(side), &mut self.current) {
                        game.move_paddle(side, dir);
                    }
                }
            }
            Command::TogglePause => self.transition(SessionAction::TogglePause, &mut out),
            Command::ReturnToMenu => self.transition(SessionAction::Back, &mut out),
            Command::Continue => self.transition(SessionAction::Continue, &mut out),
            Command::SelectMode(mode) => {
                let action = match mode {
                    GameMode::OnePlayer => SessionAction::ChooseOnePlayer,
                    GameMode::TwoPlayer => SessionAction::ChooseTwoPlayer,
                };
                if self.fsm.can_transition(action) {
                    self.mode = mode_of(mode);
                }
                self.transition(action, &mut out);
            }
            Command::SelectDifficulty(level) => {
                if self.fsm.can_transition(SessionAction::ChooseDifficulty) {
                    self.difficulty = difficulty_of(level);
                }
                self.transition(SessionAction::ChooseDifficulty, &mut out);
            }
            Command::SubmitPlayerNames { name1, name2 } => {
                if self.fsm.can_transition(SessionAction::SubmitNames) {
                    self.names = PlayerNames::from_input(&name1, &name2);
                }
                self.transition(SessionAction::SubmitNames, &mut out);
            }
            Command::OpenSkins => self.transition(SessionAction::OpenSkins, &mut out),
            Command::OpenSettings => self.transition(SessionAction::OpenSettings, &mut out),
            Command::SelectSkin(skin) => {
                if self.fsm.can_transition(SessionAction::PickSkin)
                    && self.settings.select_skin(skin)
                {
                    out.push(self.settings.notification());
                }
                self.transition(SessionAction::PickSkin, &mut out);
            }
            Command::AdjustSetting { key, delta } => {
                let allowed = match self.fsm.state() {
                    SessionState::Settings => true,
                    // Only the audio button is reachable during a match
                    SessionState::Playing | SessionState::Paused => key == SettingKey::Audio,
                    _ => false,
                };
                if allowed && self.settings.adjust(key, delta) {
                    out.push(self.settings.notification());
                }
            }
            Command::Rematch => self.transition(SessionAction::Rematch, &mut out),
            Command::Exit => self.transition(SessionAction::Exit, &mut out),
        }

        out
    }

    /// Advance one fixed step
    pub fn tick(&mut self) -> Vec<Notification> {
        let mut out = Vec::new();

        match self.fsm.state() {
            SessionState::Title => {
                self.title.tick();
            }
            SessionState::Playing => {
                let Some(game) = self.current.as_mut() else {
                    return out;
                };
                let events = game.tick();
                let over = game.is_over();
                for event in events {
                    out.push(self.notification(event));
                }
                if over {
                    self.transition(SessionAction::MatchOver, &mut out);
                }
            }
            _ => {}
        }

        out
    }

    /// Hit-test the current screen and apply whatever was clicked
    pub fn click(&mut self, point: Vec2) -> Vec<Notification> {
        match self.menu().click(point) {
            Some(command) => self.handle(command),
            None => Vec::new(),
        }
    }

    /// Elements of the current screen
    pub fn menu(&self) -> Menu {
        let state = self.fsm.state();
        let mut menu = Menu::for_state(state, &self.arena, &self.settings);

        match state {
            SessionState::Playing | SessionState::Paused => {
                if let Some(game) = &self.current {
                    let score = game.score();
                    let scoreboard = format!(
                        "{}: {}  {}: {}",
                        self.names.name(Side::Left, self.mode),
                        score.a,
                        self.names.name(Side::Right, self.mode),
                        score.b
                    );
                    menu.push(MenuElement::Drawable {
                        label: scoreboard,
                        at: Vec2::new(0.0, self.arena.boundary_y - 50.0),
                    });
                    if let Some(clock) = game.clock() {
                        menu.push(MenuElement::Drawable {
                            label: format!("Time: {:.0}", clock.seconds_left().ceil()),
                            at: Vec2::new(0.0, self.arena.boundary_y - 90.0),
                        });
                    }
                }
            }
            SessionState::RoundEnd => {
                if let Some(label) = &self.last_winner {
                    menu.push(MenuElement::Drawable {
                        label: label.clone(),
                        at: self.arena.percent(0.0, 20.0),
                    });
                }
            }
            _ => {}
        }
        menu
    }

    pub fn state(&self) -> SessionState {
        self.fsm.state()
    }

    pub fn is_exited(&self) -> bool {
        self.fsm.is_exited()
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    pub fn current_match(&self) -> Option<&Match> {
        self.current.as_ref()
    }

    pub fn title(&self) -> &TitleAnimation {
        &self.title
    }

    /// Label of the most recent result, kept until the next match starts
    pub fn last_winner(&self) -> Option<&str> {
        self.last_winner.as_deref()
    }

    pub fn matches_started(&self) -> u64 {
        self.matches_started
    }

    fn transition(&mut self, action: SessionAction, out: &mut Vec<Notification>) {
        let result = self.fsm.transition(action);
        if !result.success() {
            return;
        }
        self.apply(result.effects(), out);
        out.push(Notification::StateChanged {
            state: result.to_state(),
        });
    }

    fn apply(&mut self, effects: &[Effect], out: &mut Vec<Notification>) {
        for effect in effects {
            match *effect {
                Effect::StartMatch => self.start_match(),
                Effect::EndMatch => {
                    self.current = None;
                }
                Effect::SetPaused(paused) => {
                    let event = self.current.as_mut().and_then(|game| game.set_paused(paused));
                    if let Some(event) = event {
                        out.push(self.notification(event));
                    }
                }
                Effect::ActivateTitleAnimation(active) => self.title.set_active(active),
                Effect::Quit => tracing::info!("session exited"),
            }
        }
    }

    fn start_match(&mut self) {
        let seed = self.seed.wrapping_add(self.matches_started);
        self.matches_started += 1;
        self.last_winner = None;
        self.current = Some(Match::new(MatchSetup {
            mode: self.mode,
            difficulty: self.difficulty,
            arena: self.arena,
            config: self.settings.match_config(&self.arena),
            seed,
        }));
    }

    fn notification(&mut self, event: GameEvent) -> Notification {
        match event {
            GameEvent::BallMoved(pos) => Notification::BallMoved { x: pos.x, y: pos.y },
            GameEvent::WallHit => Notification::WallHit,
            GameEvent::PaddleHit(side) => Notification::PaddleHit {
                side: wire_side(side),
            },
            GameEvent::Scored { side, score } => Notification::Scored {
                side: wire_side(side),
                score_a: score.a,
                score_b: score.b,
            },
            GameEvent::TimerTick { seconds_left } => Notification::TimerTick {
                seconds_left: seconds_left as f32,
            },
            GameEvent::PausedChanged(paused) => Notification::PausedChanged { paused },
            GameEvent::RoundEnded(outcome) => {
                let winner_label = self.names.winner_label(outcome, self.mode);
                self.last_winner = Some(winner_label.clone());
                Notification::RoundEnded { winner_label }
            }
        }
    }
}

/// Side as carried in commands and notifications
pub fn wire_side(side: Side) -> u8 {
    match side {
        Side::Left => SIDE_LEFT,
        Side::Right => SIDE_RIGHT,
    }
}

pub fn side_from_wire(side: u8) -> Option<Side> {
    match side {
        SIDE_LEFT => Some(Side::Left),
        SIDE_RIGHT => Some(Side::Right),
        _ => None,
    }
}

fn mode_of(mode: GameMode) -> Mode {
    match mode {
        GameMode::OnePlayer => Mode::OnePlayer,
        GameMode::TwoPlayer => Mode::TwoPlayer,
    }
}

fn difficulty_of(level: DifficultyLevel) -> Difficulty {
    match level {
        DifficultyLevel::Easy => Difficulty::Easy,
        DifficultyLevel::Medium => Difficulty::Medium,
        DifficultyLevel::Hard => Difficulty::Hard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Arena::default(), 99)
    }

    #[test]
    fn test_wire_side_values() {
        assert_eq!(wire_side(Side::Left), SIDE_LEFT);
        assert_eq!(wire_side(Side::Right), SIDE_RIGHT);
        assert_eq!(side_from_wire(SIDE_RIGHT), Some(Side::Right));
        assert_eq!(side_from_wire(7), None);
    }

    #[test]
    fn test_session_starts_on_animated_title() {
        let session = session();
        assert_eq!(session.state(), SessionState::Title);
        assert!(session.title().is_active());
        assert!(session.current_match().is_none());
    }

    #[test]
    fn test_continue_stops_title_animation() {
        let mut session = session();
        let out = session.handle(Command::Continue);
        assert_eq!(
            out,
            vec![Notification::StateChanged {
                state: SessionState::MainMenu
            }]
        );
        assert!(!session.title().is_active());
    }

    #[test]
    fn test_rejected_command_changes_nothing() {
        let mut session = session();
        assert!(session.handle(Command::Rematch).is_empty());
        assert!(session
            .handle(Command::SelectDifficulty(DifficultyLevel::Hard))
            .is_empty());
        assert_eq!(session.difficulty(), Difficulty::Medium);
        assert_eq!(session.state(), SessionState::Title);
    }

    #[test]
    fn test_difficulty_binds_before_match_starts() {
        let mut session = session();
        session.handle(Command::Continue);
        session.handle(Command::SelectMode(GameMode::OnePlayer));
        session.handle(Command::SelectDifficulty(DifficultyLevel::Easy));

        assert_eq!(session.state(), SessionState::Playing);
        let game = session.current_match().unwrap();
        assert_eq!(game.ai().unwrap().profile, Difficulty::Easy.profile());
    }

    #[test]
    fn test_pause_emits_paused_changed() {
        let mut session = session();
        session.handle(Command::Continue);
        session.handle(Command::SelectMode(GameMode::OnePlayer));
        session.handle(Command::SelectDifficulty(DifficultyLevel::Medium));

        let out = session.handle(Command::TogglePause);
        assert_eq!(
            out,
            vec![
                Notification::PausedChanged { paused: true },
                Notification::StateChanged {
                    state: SessionState::Paused
                }
            ]
        );
        assert!(session.tick().is_empty());
    }

    #[test]
    fn test_in_match_settings_only_toggle_audio() {
        let mut session = session();
        session.handle(Command::Continue);
        session.handle(Command::SelectMode(GameMode::TwoPlayer));
        session.handle(Command::SubmitPlayerNames {
            name1: String::new(),
            name2: String::new(),
        });
        let speed = session.settings().ball_speed;

        assert!(session
            .handle(Command::AdjustSetting {
                key: SettingKey::BallSpeed,
                delta: 0.05
            })
            .is_empty());
        assert_eq!(session.settings().ball_speed, speed);

        let out = session.handle(Command::AdjustSetting {
            key: SettingKey::Audio,
            delta: 1.0,
        });
        assert_eq!(out.len(), 1);
        assert!(!session.settings().audio_enabled);
    }

    #[test]
    fn test_move_paddle_reaches_match() {
        let mut session = session();
        session.handle(Command::Continue);
        session.handle(Command::SelectMode(GameMode::TwoPlayer));
        session.handle(Command::SubmitPlayerNames {
            name1: "Ada".into(),
            name2: "Grace".into(),
        });

        session.handle(Command::MovePaddle { side: 1, dir: 1 });
        session.handle(Command::MovePaddle { side: 7, dir: 1 });

        let game = session.current_match().unwrap();
        assert_eq!(game.paddle_y(Side::Right), Some(game.config().paddle_speed));
        assert_eq!(game.paddle_y(Side::Left), Some(0.0));
    }
}
