/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (center origin, y up)
    pub const ARENA_WIDTH: f32 = 1000.0;
    pub const ARENA_HEIGHT: f32 = 800.0;
    pub const ARENA_MIN_WIDTH: f32 = 800.0;
    pub const ARENA_MIN_HEIGHT: f32 = 600.0;
    pub const WALL_MARGIN: f32 = 10.0;
    pub const PADDLE_INSET: f32 = 0.9; // paddle x as a fraction of boundary_x
    pub const PADDLE_TRAVEL_MARGIN: f32 = 100.0;
    pub const EFFECTIVE_HEIGHT_MARGIN: f32 = 20.0;

    // Paddle
    pub const PADDLE_HALF_HEIGHT: f32 = 70.0;
    pub const PADDLE_WIDTH: f32 = 30.0;
    pub const PADDLE_COLLISION_MARGIN: f32 = 20.0;
    pub const PADDLE_SPEED: f32 = 20.0; // units per keypress, before scaling
    pub const PADDLE_SPEED_MIN: f32 = 5.0;
    pub const PADDLE_SPEED_MAX: f32 = 40.0;

    // Ball
    pub const BALL_EDGE: f32 = 10.0;
    pub const BALL_SPEED: f32 = 0.15; // units per tick on each axis, before scaling
    pub const BALL_SPEED_MIN: f32 = 0.05;
    pub const BALL_SPEED_MAX: f32 = 0.4;

    // AI
    pub const AI_IDLE_JITTER_CHANCE: f64 = 0.1;
    pub const AI_IDLE_JITTER: f32 = 5.0;
    pub const AI_DEADZONE: f32 = 10.0;
    pub const AI_TARGET_MARGIN: f32 = 50.0;
    pub const AI_EDGE_BAND: f32 = 0.25; // outer fraction of boundary_y
    pub const AI_ACCURACY_NOISE_DIVISOR: f32 = 2.0;
    pub const AI_RECOVERY_TICKS: u32 = 30;

    // Clock
    pub const TICK_SECONDS: f64 = 0.01;
    pub const TIME_LIMIT_SECONDS: f64 = 300.0;
}
