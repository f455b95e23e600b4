use crate::{Arena, Ball, Paddle, Side};
use hecs::World;

/// Move ball by one tick of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

/// Shift a paddle vertically, keeping it inside its travel limit.
/// Returns the new y, or None when no paddle guards that side.
pub fn shift_paddle(world: &mut World, side: Side, delta: f32, arena: &Arena) -> Option<f32> {
    world
        .query_mut::<&mut Paddle>()
        .into_iter()
        .find(|(_e, paddle)| paddle.side == side)
        .map(|(_e, paddle)| {
            paddle.y = arena.clamp_paddle_y(paddle.y + delta);
            paddle.y
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    #[test]
    fn test_move_ball_adds_velocity() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(10.0, -4.0), Vec2::new(0.5, -0.25));

        move_ball(&mut world);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(10.5, -4.25));
            assert_eq!(ball.vel, Vec2::new(0.5, -0.25), "Velocity is untouched");
        }
    }

    #[test]
    fn test_shift_paddle_clamps_to_travel_limit() {
        let arena = Arena::default();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &arena, crate::Controller::Human);

        assert_eq!(shift_paddle(&mut world, Side::Left, 25.0, &arena), Some(25.0));
        assert_eq!(shift_paddle(&mut world, Side::Left, 1000.0, &arena), Some(290.0));
        assert_eq!(shift_paddle(&mut world, Side::Left, -2000.0, &arena), Some(-290.0));
    }

    #[test]
    fn test_shift_missing_paddle() {
        let arena = Arena::default();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &arena, crate::Controller::Human);
        assert_eq!(shift_paddle(&mut world, Side::Right, 10.0, &arena), None);
    }
}
