use crate::{Difficulty, RoundClock, Score, Side};

/// One player against the AI, or two humans sharing a keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    OnePlayer,
    TwoPlayer,
}

impl Mode {
    /// Side driven by the AI, if any. The human always plays left.
    pub fn ai_side(self) -> Option<Side> {
        match self {
            Mode::OnePlayer => Some(Side::Right),
            Mode::TwoPlayer => None,
        }
    }
}

/// Result of a finished match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Side),
    Tie,
}

/// How a match is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinCondition {
    /// First side to its own target wins; targets may differ
    FirstTo { left: u32, right: u32 },
    /// Highest score when the round clock runs out
    TimeLimit,
}

impl WinCondition {
    pub fn for_mode(mode: Mode, difficulty: Difficulty) -> Self {
        match mode {
            Mode::OnePlayer => {
                let profile = difficulty.profile();
                WinCondition::FirstTo {
                    left: profile.human_target,
                    right: profile.ai_target,
                }
            }
            Mode::TwoPlayer => WinCondition::TimeLimit,
        }
    }

    /// Check whether the match is over
    pub fn evaluate(&self, score: &Score, clock: Option<&RoundClock>) -> Option<Outcome> {
        match *self {
            WinCondition::FirstTo { left, right } => {
                if score.a >= left {
                    Some(Outcome::Winner(Side::Left))
                } else if score.b >= right {
                    Some(Outcome::Winner(Side::Right))
                } else {
                    None
                }
            }
            WinCondition::TimeLimit => match clock {
                Some(clock) if clock.is_expired() => Some(match score.leader() {
                    Some(side) => Outcome::Winner(side),
                    None => Outcome::Tie,
                }),
                _ => None,
            },
        }
    }
}
