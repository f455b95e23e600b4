use crate::{Arena, Ball, Config, Events, GameEvent, GameRng, Score, Side};
use hecs::World;

/// Check if the ball left the arena. Crossing the right edge credits the
/// left player and vice versa; the ball is served again from the center.
pub fn check_scoring(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x > arena.boundary_x {
            Side::Left
        } else if ball.pos.x < -arena.boundary_x {
            Side::Right
        } else {
            continue;
        };

        score.increment(scorer);
        tracing::debug!(?scorer, a = score.a, b = score.b, "point scored");
        events.push(GameEvent::Scored {
            side: scorer,
            score: *score,
        });
        ball.serve(config.ball_speed, rng);
        return Some(scorer);
    }

    None
}
