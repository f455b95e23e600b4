use game_core::Side;
use session::Session;

/// Plays a paddle like a distracted human: glances at the ball every few
/// ticks and presses toward it while it is coming their way.
pub struct ScriptedPlayer {
    side: Side,
    reaction_ticks: u32,
    counter: u32,
    tolerance: f32,
}

impl ScriptedPlayer {
    pub fn new(side: Side, reaction_ticks: u32) -> Self {
        Self {
            side,
            reaction_ticks: reaction_ticks.max(1),
            counter: 0,
            tolerance: 20.0,
        }
    }

    /// Key to press this tick, if any
    pub fn key(&mut self, session: &Session) -> Option<&'static str> {
        self.counter += 1;
        if self.counter < self.reaction_ticks {
            return None;
        }
        self.counter = 0;

        let game = session.current_match()?;
        let ball = game.ball()?;
        if !ball.heading_to(self.side) {
            return None;
        }

        let diff = ball.pos.y - game.paddle_y(self.side)?;
        if diff > self.tolerance {
            Some(self.up_key())
        } else if diff < -self.tolerance {
            Some(self.down_key())
        } else {
            None
        }
    }

    fn up_key(&self) -> &'static str {
        match self.side {
            Side::Left => "w",
            Side::Right => "Up",
        }
    }

    fn down_key(&self) -> &'static str {
        match self.side {
            Side::Left => "s",
            Side::Right => "Down",
        }
    }
}
