use crate::{Arena, Ball, Config, Events, GameEvent, Paddle, Side};
use hecs::World;

/// Flip vertical velocity when the ball reaches the top or bottom wall.
/// The ball is not pushed back inside; the flipped velocity brings it back.
pub fn check_walls(world: &mut World, arena: &Arena, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y.abs() >= arena.boundary_y {
            ball.vel.y = -ball.vel.y;
            events.push(GameEvent::WallHit);
        }
    }
}

/// Whether the ball touches the paddle guarding `x_boundary`.
///
/// `x_boundary` is positive for the right paddle and negative for the left.
/// The ball only counts as touching while it travels toward the paddle, so a
/// ball still overlapping after a bounce cannot bounce again.
pub fn paddle_contact(ball: &Ball, paddle_y: f32, x_boundary: f32, config: &Config) -> bool {
    let within_height = paddle_y - config.paddle_half_height < ball.pos.y
        && ball.pos.y < paddle_y + config.paddle_half_height;
    if !within_height {
        return false;
    }

    if x_boundary > 0.0 {
        ball.pos.x + config.ball_edge >= x_boundary - config.paddle_width && ball.vel.x > 0.0
    } else if x_boundary < 0.0 {
        ball.pos.x - config.ball_edge <= x_boundary + config.paddle_width && ball.vel.x < 0.0
    } else {
        false
    }
}

/// Bounce the ball off whichever paddle it touches, right paddle first.
/// Returns the side that was hit.
pub fn check_paddles(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    events: &mut Events,
) -> Option<Side> {
    // Collect paddle data without holding borrows
    let mut paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();
    paddles.sort_by_key(|(side, _)| *side != Side::Right);

    let contact_x = config.paddle_contact_x(arena);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for &(side, paddle_y) in &paddles {
            if paddle_contact(ball, paddle_y, contact_x * side.sign(), config) {
                // Always leave the paddle that was struck
                ball.vel.x = -side.sign() * ball.vel.x.abs();
                events.push(GameEvent::PaddleHit(side));
                return Some(side);
            }
        }
    }

    None
}
