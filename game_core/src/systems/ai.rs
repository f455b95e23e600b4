//! Predictive AI opponent.
//!
//! The AI looks where the ball will cross its paddle line, folding the
//! straight-line path across the walls, then degrades that answer with
//! difficulty-dependent noise so it plays like a person.

use crate::{Arena, Ball, Config, DifficultyProfile, GameRng, Paddle, Params, Side};
use hecs::World;

/// What the AI decided to do on one of its action ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AiAction {
    /// Ball heading away, stay put
    Hold,
    /// Ball heading away, small random twitch
    Jitter(f32),
    /// Simulated lapse, ignore the ball this time
    Miss,
    /// Move toward this y
    Track(f32),
}

/// AI state for one paddle
#[derive(Debug, Clone)]
pub struct AiController {
    pub side: Side,
    pub profile: DifficultyProfile,
    frame_counter: u32,
    recovery_ticks: u32,
}

impl AiController {
    pub fn new(side: Side, profile: DifficultyProfile) -> Self {
        Self {
            side,
            profile,
            frame_counter: 0,
            recovery_ticks: 0,
        }
    }

    /// Stay idle for a while, used after the AI concedes a point
    pub fn start_recovery(&mut self, ticks: u32) {
        self.recovery_ticks = ticks;
    }

    pub fn is_recovering(&self) -> bool {
        self.recovery_ticks > 0
    }

    /// Advance reaction counters. Returns true when the AI acts this tick.
    pub fn tick(&mut self) -> bool {
        if self.recovery_ticks > 0 {
            self.recovery_ticks -= 1;
        }
        self.frame_counter += 1;
        if self.frame_counter >= self.profile.reaction_delay_ticks && self.recovery_ticks == 0 {
            self.frame_counter = 0;
            true
        } else {
            false
        }
    }

    /// Pick an action for the current ball and paddle
    pub fn decide(
        &self,
        ball: &Ball,
        paddle: &Paddle,
        arena: &Arena,
        config: &Config,
        rng: &mut GameRng,
    ) -> AiAction {
        if !ball.heading_to(self.side) {
            if rng.chance(Params::AI_IDLE_JITTER_CHANCE) {
                return AiAction::Jitter(rng.spread(Params::AI_IDLE_JITTER));
            }
            return AiAction::Hold;
        }

        if rng.chance(self.profile.miss_chance as f64) {
            return AiAction::Miss;
        }

        let mut target = predict_ball_y(ball, paddle.x, arena);
        target += rng.spread(self.profile.prediction_error * arena.height / 4.0);
        target = apply_edge_weakness(target, self.profile.edge_weakness, arena);

        let accuracy = self.profile.accuracy.clamp(0.0, 1.0);
        if rng.chance(1.0 - accuracy as f64) {
            let noise = (1.0 - accuracy) * arena.height / config.ai_accuracy_noise_divisor;
            target += rng.spread(noise);
        }

        let limit = arena.boundary_y - Params::AI_TARGET_MARGIN;
        AiAction::Track(target.clamp(-limit, limit))
    }

    /// New paddle y after applying an action
    pub fn apply(&self, action: AiAction, paddle_y: f32, arena: &Arena) -> f32 {
        let y = match action {
            AiAction::Hold | AiAction::Miss => paddle_y,
            AiAction::Jitter(delta) => paddle_y + delta,
            AiAction::Track(target) => {
                let diff = target - paddle_y;
                if diff.abs() > Params::AI_DEADZONE {
                    paddle_y + diff.signum() * self.profile.max_speed.min(diff.abs())
                } else {
                    paddle_y
                }
            }
        };
        arena.clamp_paddle_y(y)
    }
}

/// Where the ball will be vertically when it reaches `paddle_x`, with wall
/// bounces folded in. A ball with no horizontal speed never arrives, so its
/// current height is returned.
pub fn predict_ball_y(ball: &Ball, paddle_x: f32, arena: &Arena) -> f32 {
    if ball.vel.x == 0.0 {
        return ball.pos.y;
    }

    let steps = (paddle_x - ball.pos.x).abs() / ball.vel.x.abs();
    let straight_y = ball.pos.y + ball.vel.y * steps;
    fold_into_range(straight_y, arena.effective_height() / 2.0)
}

/// Mirror `y` across `±half` until it lies inside. The mirrored path repeats
/// every `4 * half`, so whole periods are removed first and at most one
/// reflection remains.
pub fn fold_into_range(y: f32, half: f32) -> f32 {
    if half <= 0.0 || y.is_nan() {
        return 0.0;
    }
    if y.is_infinite() {
        return half.copysign(y);
    }

    let period = 4.0 * half;
    // In [-half, 3 * half)
    let mut folded = (y + half).rem_euclid(period) - half;
    if folded > half {
        folded = 2.0 * half - folded;
    }
    folded.clamp(-half, half)
}

/// Pull targets in the outer band of the arena toward the center, harder
/// the deeper they sit in the band
pub fn apply_edge_weakness(target: f32, weakness: f32, arena: &Arena) -> f32 {
    let band = arena.boundary_y * Params::AI_EDGE_BAND;
    let band_start = arena.boundary_y - band;
    if band <= 0.0 || target.abs() <= band_start {
        return target;
    }
    let depth = ((target.abs() - band_start) / band).min(1.0);
    target * (1.0 - weakness * depth)
}

/// Run the AI for its paddle if it is due to act this tick
pub fn run_ai(
    world: &mut World,
    ai: &mut AiController,
    arena: &Arena,
    config: &Config,
    rng: &mut GameRng,
) {
    if !ai.tick() {
        return;
    }

    let ball = match world.query::<&Ball>().iter().next().map(|(_e, b)| *b) {
        Some(ball) => ball,
        None => return,
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != ai.side {
            continue;
        }
        let action = ai.decide(&ball, paddle, arena, config, rng);
        let new_y = ai.apply(action, paddle.y, arena);
        tracing::trace!(?action, from = paddle.y, to = new_y, "ai move");
        paddle.y = new_y;
        break;
    }
}
