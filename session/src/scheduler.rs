use std::time::Duration;

use game_core::Arena;
use glam::Vec2;

/// Most ticks a single `advance` call may yield. Anything beyond is dropped
/// so a stalled frame never turns into a burst of simulation.
pub const MAX_CATCH_UP_TICKS: u32 = 25;

/// Turns real elapsed time into whole simulation ticks
#[derive(Debug, Clone)]
pub struct FixedTicker {
    tick_seconds: f64,
    accumulator: f64,
    max_catch_up: u32,
}

impl FixedTicker {
    pub fn new(tick_seconds: f64) -> Self {
        Self::with_catch_up(tick_seconds, MAX_CATCH_UP_TICKS)
    }

    pub fn with_catch_up(tick_seconds: f64, max_catch_up: u32) -> Self {
        Self {
            tick_seconds,
            accumulator: 0.0,
            max_catch_up: max_catch_up.max(1),
        }
    }

    /// Add `elapsed` real time and return how many ticks are now due
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.tick_seconds <= 0.0 {
            return 0;
        }

        self.accumulator += elapsed.as_secs_f64();
        let mut due = 0;
        while self.accumulator >= self.tick_seconds && due < self.max_catch_up {
            self.accumulator -= self.tick_seconds;
            due += 1;
        }

        if self.accumulator >= self.tick_seconds {
            tracing::debug!(
                dropped = (self.accumulator / self.tick_seconds).floor(),
                "ticker fell behind, dropping ticks"
            );
            self.accumulator %= self.tick_seconds;
        }
        due
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(self.tick_seconds.max(0.0))
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

/// Decorative balls bouncing behind the title screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleBall {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Simulation ticks between two title animation frames
pub const TITLE_FRAME_TICKS: u32 = 5;

#[derive(Debug, Clone)]
pub struct TitleAnimation {
    pub balls: [TitleBall; 3],
    border: Vec2,
    active: bool,
    frame_counter: u32,
}

impl TitleAnimation {
    pub fn new(arena: &Arena) -> Self {
        let balls = std::array::from_fn(|i| {
            let i = i as f32;
            TitleBall {
                pos: Vec2::new(-200.0 + i * 100.0, -50.0 + i * 40.0),
                vel: Vec2::new(2.0 + i * 0.5, 1.0 + i * 0.3),
            }
        });
        Self {
            balls,
            border: Vec2::new(arena.width * 0.44, arena.height * 0.34),
            active: false,
            frame_counter: 0,
        }
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        self.frame_counter = 0;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance by one simulation tick. Returns the number of bounces in the
    /// frame that was drawn, if any.
    pub fn tick(&mut self) -> u32 {
        if !self.active {
            return 0;
        }
        self.frame_counter += 1;
        if self.frame_counter < TITLE_FRAME_TICKS {
            return 0;
        }
        self.frame_counter = 0;
        self.step_frame()
    }

    fn step_frame(&mut self) -> u32 {
        let mut bounces = 0;
        for ball in &mut self.balls {
            ball.pos += ball.vel;
            if ball.pos.x.abs() > self.border.x {
                ball.vel.x = -ball.vel.x;
                bounces += 1;
            }
            if ball.pos.y.abs() > self.border.y {
                ball.vel.y = -ball.vel.y;
                bounces += 1;
            }
        }
        bounces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_yields_whole_ticks() {
        let mut ticker = FixedTicker::new(0.01);
        assert_eq!(ticker.advance(Duration::from_millis(4)), 0);
        assert_eq!(ticker.advance(Duration::from_millis(7)), 1);
        assert_eq!(ticker.advance(Duration::from_millis(35)), 3);
        assert_eq!(ticker.advance(Duration::from_millis(7)), 1);
    }

    #[test]
    fn test_ticker_caps_catch_up() {
        let mut ticker = FixedTicker::with_catch_up(0.01, 4);
        assert_eq!(ticker.advance(Duration::from_secs(2)), 4);
        // The backlog was dropped
        assert_eq!(ticker.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_ticker_reset() {
        let mut ticker = FixedTicker::new(0.01);
        ticker.advance(Duration::from_millis(9));
        ticker.reset();
        assert_eq!(ticker.advance(Duration::from_millis(9)), 0);
        assert_eq!(ticker.tick_duration(), Duration::from_millis(10));
    }

    #[test]
    fn test_title_balls_start_spread_out() {
        let title = TitleAnimation::new(&Arena::default());
        assert_eq!(title.balls[0].pos, Vec2::new(-200.0, -50.0));
        assert_eq!(title.balls[2].pos, Vec2::new(0.0, 30.0));
        assert_eq!(title.balls[1].vel.x, 2.5);
        assert!(!title.is_active());
    }

    #[test]
    fn test_inactive_title_does_not_move() {
        let mut title = TitleAnimation::new(&Arena::default());
        let before = title.balls;
        for _ in 0..50 {
            title.tick();
        }
        assert_eq!(title.balls, before);
    }

    #[test]
    fn test_title_moves_every_few_ticks() {
        let mut title = TitleAnimation::new(&Arena::default());
        title.set_active(true);
        let start = title.balls[0].pos;

        for _ in 0..TITLE_FRAME_TICKS - 1 {
            title.tick();
        }
        assert_eq!(title.balls[0].pos, start);
        title.tick();
        assert_eq!(title.balls[0].pos, start + Vec2::new(2.0, 1.0));
    }

    #[test]
    fn test_title_balls_stay_near_border() {
        let arena = Arena::default();
        let mut title = TitleAnimation::new(&arena);
        title.set_active(true);
        let mut bounces = 0;

        for _ in 0..20_000 {
            bounces += title.tick();
            for ball in &title.balls {
                assert!(ball.pos.x.abs() <= arena.width * 0.44 + 4.0);
                assert!(ball.pos.y.abs() <= arena.height * 0.34 + 4.0);
            }
        }
        assert!(bounces > 0);

        title.set_active(false);
        let frozen = title.balls;
        title.tick();
        assert_eq!(title.balls, frozen);
    }
}
