use glam::Vec2;

use crate::{Outcome, Side};

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub a: u32, // Left player
    pub b: u32, // Right player
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.a += 1,
            Side::Right => self.b += 1,
        }
    }

    /// Side with more points, or None when level
    pub fn leader(&self) -> Option<Side> {
        match self.a.cmp(&self.b) {
            std::cmp::Ordering::Greater => Some(Side::Left),
            std::cmp::Ordering::Less => Some(Side::Right),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Bernoulli draw; out-of-range probabilities are clamped
    pub fn chance(&mut self, p: f64) -> bool {
        use rand::Rng;
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform draw in [-spread, spread]
    pub fn spread(&mut self, spread: f32) -> f32 {
        use rand::Rng;
        if !spread.is_finite() || spread <= 0.0 {
            return 0.0;
        }
        self.0.gen_range(-spread..=spread)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Something the UI layer may want to render or play a sound for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    BallMoved(Vec2),
    WallHit,
    PaddleHit(Side),
    Scored { side: Side, score: Score },
    TimerTick { seconds_left: f64 },
    PausedChanged(bool),
    RoundEnded(Outcome),
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub queue: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn push(&mut self, event: GameEvent) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.queue)
    }

    pub fn ball_hit_wall(&self) -> bool {
        self.queue.iter().any(|e| matches!(e, GameEvent::WallHit))
    }

    pub fn ball_hit_paddle(&self) -> Option<Side> {
        self.queue.iter().find_map(|e| match e {
            GameEvent::PaddleHit(side) => Some(*side),
            _ => None,
        })
    }

    pub fn scored(&self) -> Option<Side> {
        self.queue.iter().find_map(|e| match e {
            GameEvent::Scored { side, .. } => Some(*side),
            _ => None,
        })
    }

    pub fn round_ended(&self) -> Option<Outcome> {
        self.queue.iter().find_map(|e| match e {
            GameEvent::RoundEnded(outcome) => Some(*outcome),
            _ => None,
        })
    }
}

/// Two-player match timer. Counts whole ticks so expiry never drifts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundClock {
    remaining_ticks: u32,
    tick_seconds: f64,
}

impl RoundClock {
    pub fn new(limit_ticks: u32, tick_seconds: f64) -> Self {
        Self {
            remaining_ticks: limit_ticks,
            tick_seconds,
        }
    }

    pub fn from_config(config: &crate::Config) -> Self {
        Self::new(config.time_limit_ticks(), config.tick_seconds)
    }

    /// Advance one tick. Returns true once the clock has run out.
    pub fn tick(&mut self) -> bool {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        self.is_expired()
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_ticks == 0
    }

    pub fn remaining_ticks(&self) -> u32 {
        self.remaining_ticks
    }

    pub fn seconds_left(&self) -> f64 {
        self.remaining_ticks as f64 * self.tick_seconds
    }
}
