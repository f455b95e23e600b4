/// AI difficulty level picked from the difficulty menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Tuning for the AI opponent. Replaced wholesale when the difficulty changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Chance in [0, 1] that the final target is left noise-free
    pub accuracy: f32,
    /// The AI acts once every this many ticks
    pub reaction_delay_ticks: u32,
    /// Largest paddle move per AI action
    pub max_speed: f32,
    /// Prediction error as a fraction of a quarter of the arena height
    pub prediction_error: f32,
    /// How strongly predictions near the walls are pulled toward center
    pub edge_weakness: f32,
    /// Chance of ignoring an approaching ball for one action
    pub miss_chance: f32,
    /// Points the human needs to win a one-player match
    pub human_target: u32,
    /// Points the AI needs to win a one-player match
    pub ai_target: u32,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                accuracy: 0.5,
                reaction_delay_ticks: 10,
                max_speed: 10.0,
                prediction_error: 0.5,
                edge_weakness: 0.8,
                miss_chance: 0.15,
                human_target: 5,
                ai_target: 5,
            },
            Difficulty::Medium => DifficultyProfile {
                accuracy: 0.7,
                reaction_delay_ticks: 6,
                max_speed: 15.0,
                prediction_error: 0.3,
                edge_weakness: 0.5,
                miss_chance: 0.08,
                human_target: 10,
                ai_target: 3,
            },
            Difficulty::Hard => DifficultyProfile {
                accuracy: 0.85,
                reaction_delay_ticks: 2,
                max_speed: 18.0,
                prediction_error: 0.15,
                edge_weakness: 0.3,
                miss_chance: 0.03,
                human_target: 15,
                ai_target: 5,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}
