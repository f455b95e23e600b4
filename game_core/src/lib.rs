pub mod arena;
pub mod components;
pub mod config;
pub mod difficulty;
pub mod params;
pub mod resources;
pub mod rules;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use difficulty::*;
pub use params::*;
pub use resources::*;
pub use rules::*;
pub use systems::*;

use hecs::World;

/// Run one tick of the Pong simulation.
///
/// Order matters: the ball moves, the AI reacts, then walls, scoring and
/// paddles are checked in that order, so a ball that scores on a tick is
/// never bounced on the same tick. The clock only runs when one is given.
/// Returns the outcome once the match is decided; the caller must stop
/// stepping after that.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    rules: &WinCondition,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    mut ai: Option<&mut AiController>,
    mut clock: Option<&mut RoundClock>,
) -> Option<Outcome> {
    // Clear events at start of tick
    events.clear();

    // 1. Move ball
    move_ball(world);

    // 2. Let the AI react
    if let Some(ai) = ai.as_deref_mut() {
        run_ai(world, ai, arena, config, rng);
    }

    // 3. Walls, then scoring, then paddles
    check_walls(world, arena, events);

    if let Some(scorer) = check_scoring(world, arena, config, score, events, rng) {
        if let Some(ai) = ai.as_deref_mut() {
            if scorer != ai.side {
                ai.start_recovery(config.ai_recovery_ticks);
            }
        }

        if let Some(outcome) = rules.evaluate(score, clock.as_deref()) {
            return Some(finish(outcome, score, events));
        }
    }

    check_paddles(world, arena, config, events);

    if let Some(pos) = ball_position(world) {
        events.push(GameEvent::BallMoved(pos));
    }

    // 4. Two-player clock
    if let Some(clock) = clock.as_deref_mut() {
        if tick_clock(clock, events) {
            if let Some(outcome) = rules.evaluate(score, Some(&*clock)) {
                return Some(finish(outcome, score, events));
            }
        }
    }

    None
}

fn finish(outcome: Outcome, score: &Score, events: &mut Events) -> Outcome {
    tracing::info!(?outcome, a = score.a, b = score.b, "match over");
    events.push(GameEvent::RoundEnded(outcome));
    outcome
}

/// Helper to create a paddle entity at y = 0 on its side of the arena
pub fn create_paddle(
    world: &mut World,
    side: Side,
    arena: &Arena,
    controller: Controller,
) -> hecs::Entity {
    let x = side.sign() * arena.paddle_x;
    world.spawn((Paddle::new(side, x, 0.0), controller))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Current ball position, if a ball exists
pub fn ball_position(world: &World) -> Option<glam::Vec2> {
    world.query::<&Ball>().iter().next().map(|(_e, ball)| ball.pos)
}

/// Current y of the paddle on `side`, if it exists
pub fn paddle_y(world: &World, side: Side) -> Option<f32> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == side)
        .map(|(_e, p)| p.y)
}

/// Who drives the paddle on `side`, if it exists
pub fn paddle_controller(world: &World, side: Side) -> Option<Controller> {
    world
        .query::<(&Paddle, &Controller)>()
        .iter()
        .find(|(_e, (p, _))| p.side == side)
        .map(|(_e, (_, c))| *c)
}
