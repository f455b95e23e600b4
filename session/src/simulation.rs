use game_core::{
    create_ball, create_paddle, paddle_controller, paddle_y, shift_paddle, step, AiController, Arena, Ball, Config,
    Controller, Difficulty, Events, GameEvent, GameRng, Mode, Outcome, RoundClock, Score, Side,
    WinCondition,
};
use glam::Vec2;
use hecs::World;

/// Everything a new match needs from the session
#[derive(Debug, Clone)]
pub struct MatchSetup {
    pub mode: Mode,
    pub difficulty: Difficulty,
    pub arena: Arena,
    pub config: Config,
    pub seed: u64,
}

/// One match from serve to result. Owns the world and every piece of
/// per-match state, so starting a new match resets all of it.
pub struct Match {
    world: World,
    arena: Arena,
    config: Config,
    mode: Mode,
    rules: WinCondition,
    score: Score,
    events: Events,
    rng: GameRng,
    ai: Option<AiController>,
    clock: Option<RoundClock>,
    paused: bool,
    outcome: Option<Outcome>,
    ticks: u64,
}

impl Match {
    pub fn new(setup: MatchSetup) -> Self {
        let MatchSetup {
            mode,
            difficulty,
            arena,
            config,
            seed,
        } = setup;
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        // Create paddles
        create_paddle(&mut world, Side::Left, &arena, Controller::Human);
        let right = match mode {
            Mode::OnePlayer => Controller::Ai,
            Mode::TwoPlayer => Controller::Human,
        };
        create_paddle(&mut world, Side::Right, &arena, right);

        // Create ball
        let mut ball = Ball::new(arena.ball_spawn(), Vec2::ZERO);
        ball.serve(config.ball_speed, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel);

        let ai = mode
            .ai_side()
            .map(|side| AiController::new(side, difficulty.profile()));
        let clock = match mode {
            Mode::OnePlayer => None,
            Mode::TwoPlayer => Some(RoundClock::from_config(&config)),
        };

        tracing::info!(?mode, difficulty = difficulty.name(), seed, "match started");

        Self {
            world,
            arena,
            rules: WinCondition::for_mode(mode, difficulty),
            config,
            mode,
            score: Score::new(),
            events: Events::new(),
            rng,
            ai,
            clock,
            paused: false,
            outcome: None,
            ticks: 0,
        }
    }

    /// Advance one tick and return what happened. Does nothing while paused
    /// or once the match is decided.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        if self.paused || self.outcome.is_some() {
            return Vec::new();
        }

        self.ticks += 1;
        self.outcome = step(
            &mut self.world,
            &self.arena,
            &self.config,
            &self.rules,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
            self.ai.as_mut(),
            self.clock.as_mut(),
        );
        self.events.drain()
    }

    /// Move a human paddle one step in `dir` (+1 up, -1 down). Moves for the
    /// AI side, while paused or after the match are ignored.
    pub fn move_paddle(&mut self, side: Side, dir: i8) -> Option<f32> {
        if self.paused || self.outcome.is_some() {
            return None;
        }
        if paddle_controller(&self.world, side) != Some(Controller::Human) {
            return None;
        }
        let delta = f32::from(dir.signum()) * self.config.paddle_speed;
        shift_paddle(&mut self.world, side, delta, &self.arena)
    }

    /// Set the pause flag. Returns the event to publish when it changed.
    pub fn set_paused(&mut self, paused: bool) -> Option<GameEvent> {
        if self.paused == paused {
            return None;
        }
        self.paused = paused;
        tracing::debug!(paused, "pause toggled");
        Some(GameEvent::PausedChanged(paused))
    }

    pub fn toggle_pause(&mut self) -> Option<GameEvent> {
        self.set_paused(!self.paused)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn clock(&self) -> Option<&RoundClock> {
        self.clock.as_ref()
    }

    pub fn ai(&self) -> Option<&AiController> {
        self.ai.as_ref()
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle_y(&self, side: Side) -> Option<f32> {
        paddle_y(&self.world, side)
    }
}
