use glam::Vec2;
use rand::Rng;

/// Which end of the arena a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // Player A
    Right, // Player B or the AI
}

impl Side {
    /// -1 for left, 1 for right
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Ai,
}

/// Paddle component. x is fixed for the whole match.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32) -> Self {
        Self { side, x, y }
    }
}

/// Ball component. Velocity is in units per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Center the ball and pick a fresh diagonal serve direction
    pub fn serve(&mut self, speed: f32, rng: &mut crate::GameRng) {
        self.pos = Vec2::ZERO;
        let dx = if rng.0.gen_bool(0.5) { speed } else { -speed };
        let dy = if rng.0.gen_bool(0.5) { speed } else { -speed };
        self.vel = Vec2::new(dx, dy);
    }

    /// True when the ball travels toward the given side's goal
    pub fn heading_to(&self, side: Side) -> bool {
        self.vel.x * side.sign() > 0.0
    }
}
