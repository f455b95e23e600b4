use crate::{Events, GameEvent, RoundClock};

/// Count the two-player clock down by one tick and report the time left.
/// Returns true when time has run out.
pub fn tick_clock(clock: &mut RoundClock, events: &mut Events) -> bool {
    let expired = clock.tick();
    events.push(GameEvent::TimerTick {
        seconds_left: clock.seconds_left(),
    });
    expired
}
