use game_core::{Mode, Outcome, Side};

pub const MAX_NAME_LEN: usize = 12;
pub const DEFAULT_NAME_A: &str = "Player A";
pub const DEFAULT_NAME_B: &str = "Player B";
pub const AI_NAME: &str = "AI";

/// Display names for the two sides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerNames {
    pub a: String,
    pub b: String,
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self {
            a: DEFAULT_NAME_A.to_string(),
            b: DEFAULT_NAME_B.to_string(),
        }
    }
}

impl PlayerNames {
    /// Build names from raw text entry
    pub fn from_input(name1: &str, name2: &str) -> Self {
        Self {
            a: normalize(name1, DEFAULT_NAME_A),
            b: normalize(name2, DEFAULT_NAME_B),
        }
    }

    /// Name shown for `side`. The AI always plays under its own name.
    pub fn name(&self, side: Side, mode: Mode) -> &str {
        if mode.ai_side() == Some(side) {
            return AI_NAME;
        }
        match side {
            Side::Left => &self.a,
            Side::Right => &self.b,
        }
    }

    pub fn winner_label(&self, outcome: Outcome, mode: Mode) -> String {
        match outcome {
            Outcome::Winner(side) => format!("{} wins!", self.name(side, mode)),
            Outcome::Tie => "It's a tie!".to_string(),
        }
    }
}

/// Trim and cap a name at `MAX_NAME_LEN` characters, falling back to
/// `default` when nothing is left.
pub fn normalize(raw: &str, default: &str) -> String {
    let name: String = raw.trim().chars().take(MAX_NAME_LEN).collect();
    let name = name.trim_end();
    if name.is_empty() {
        default.to_string()
    } else {
        name.to_string()
    }
}
