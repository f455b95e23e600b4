use crate::{Arena, Params};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_half_height: f32,
    pub paddle_width: f32,
    pub paddle_collision_margin: f32,
    pub paddle_speed: f32,
    pub ball_edge: f32,
    pub ball_speed: f32,
    pub tick_seconds: f64,
    pub time_limit_seconds: f64,
    pub ai_accuracy_noise_divisor: f32,
    pub ai_recovery_ticks: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_half_height: Params::PADDLE_HALF_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_collision_margin: Params::PADDLE_COLLISION_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ball_edge: Params::BALL_EDGE,
            ball_speed: Params::BALL_SPEED,
            tick_seconds: Params::TICK_SECONDS,
            time_limit_seconds: Params::TIME_LIMIT_SECONDS,
            ai_accuracy_noise_divisor: Params::AI_ACCURACY_NOISE_DIVISOR,
            ai_recovery_ticks: Params::AI_RECOVERY_TICKS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config with speeds scaled to the arena size
    pub fn for_arena(arena: &Arena) -> Self {
        let scale = arena.scale_factor();
        let mut config = Self::default();
        config.set_ball_speed(Params::BALL_SPEED * scale);
        config.set_paddle_speed(Params::PADDLE_SPEED * scale);
        config
    }

    /// NaN falls back to the unscaled default; infinities clamp to the limits
    pub fn clamp_ball_speed(speed: f32) -> f32 {
        if speed.is_nan() {
            return Params::BALL_SPEED;
        }
        speed.clamp(Params::BALL_SPEED_MIN, Params::BALL_SPEED_MAX)
    }

    pub fn clamp_paddle_speed(speed: f32) -> f32 {
        if speed.is_nan() {
            return Params::PADDLE_SPEED;
        }
        speed.clamp(Params::PADDLE_SPEED_MIN, Params::PADDLE_SPEED_MAX)
    }

    pub fn set_ball_speed(&mut self, speed: f32) {
        self.ball_speed = Self::clamp_ball_speed(speed);
    }

    pub fn set_paddle_speed(&mut self, speed: f32) {
        self.paddle_speed = Self::clamp_paddle_speed(speed);
    }

    /// X threshold (unsigned) a ball must cross to touch a paddle
    pub fn paddle_contact_x(&self, arena: &Arena) -> f32 {
        arena.paddle_x - self.paddle_collision_margin
    }

    /// Number of whole ticks in the two-player time limit
    pub fn time_limit_ticks(&self) -> u32 {
        (self.time_limit_seconds / self.tick_seconds).round() as u32
    }
}
