//! Message contract between the Pong core and its collaborators
//!
//! A UI layer sends [`Command`]s in and renders or sonifies the
//! [`Notification`]s that come back. Both use postcard for compact binary
//! encoding when they have to cross a process boundary.

use postcard::{from_bytes, to_allocvec};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire value for the left paddle (Player A)
pub const SIDE_LEFT: u8 = 0;
/// Wire value for the right paddle (Player B or the AI)
pub const SIDE_RIGHT: u8 = 1;

#[derive(Debug, Error)]
pub enum ProtoError {
    #[error("failed to encode message: {0}")]
    Encode(#[source] postcard::Error),
    #[error("failed to decode message: {0}")]
    Decode(#[source] postcard::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    OnePlayer,
    TwoPlayer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
}

/// Ball skins. Purely visual; the core only remembers the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SkinId {
    #[default]
    Default,
    Basketball,
    PingpongBall,
    TennisBall,
}

impl SkinId {
    pub const ALL: [SkinId; 4] = [
        SkinId::Default,
        SkinId::Basketball,
        SkinId::PingpongBall,
        SkinId::TennisBall,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkinId::Default => "Default",
            SkinId::Basketball => "Basketball",
            SkinId::PingpongBall => "Pingpong Ball",
            SkinId::TennisBall => "Tennis Ball",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingKey {
    BallSpeed,
    PaddleSpeed,
    /// Any non-zero delta toggles audio
    Audio,
}

/// Screens the session can be on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Title,
    MainMenu,
    DifficultySelect,
    NameEntry,
    SkinSelect,
    Settings,
    Playing,
    Paused,
    RoundEnd,
    Exited,
}

// ============================================================================
// Commands (collaborator to core)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Move a paddle one step: `dir` is +1 for up, -1 for down
    MovePaddle { side: u8, dir: i8 },
    TogglePause,
    ReturnToMenu,
    /// Leave the title screen
    Continue,
    SelectMode(GameMode),
    SelectDifficulty(DifficultyLevel),
    SubmitPlayerNames { name1: String, name2: String },
    OpenSkins,
    OpenSettings,
    SelectSkin(SkinId),
    AdjustSetting { key: SettingKey, delta: f32 },
    Rematch,
    Exit,
}

// ============================================================================
// Notifications (core to collaborator)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Notification {
    BallMoved {
        x: f32,
        y: f32,
    },
    WallHit,
    PaddleHit {
        side: u8,
    },
    Scored {
        side: u8,
        score_a: u32,
        score_b: u32,
    },
    RoundEnded {
        winner_label: String,
    },
    TimerTick {
        seconds_left: f32,
    },
    PausedChanged {
        paused: bool,
    },
    StateChanged {
        state: SessionState,
    },
    SettingsChanged {
        ball_speed: f32,
        paddle_speed: f32,
        audio_enabled: bool,
        skin: SkinId,
    },
}

impl Notification {
    /// Name of the sound a collaborator should play, if any.
    /// A collaborator without the asset just ignores the cue.
    pub fn sound_cue(&self) -> Option<&'static str> {
        match self {
            Notification::PaddleHit { .. } => Some("paddle_hit"),
            Notification::WallHit => Some("wall_hit"),
            Notification::Scored { .. } => Some("score"),
            Notification::StateChanged { .. } | Notification::SettingsChanged { .. } => {
                Some("click")
            }
            _ => None,
        }
    }
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl Command {
    /// Serialize a command to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, ProtoError> {
        to_allocvec(self).map_err(ProtoError::Encode)
    }

    /// Deserialize a command from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProtoError> {
        from_bytes(bytes).map_err(ProtoError::Decode)
    }
}

impl Notification {
    /// Serialize a notification to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, ProtoError> {
        to_allocvec(self).map_err(ProtoError::Encode)
    }

    /// Deserialize a notification from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProtoError> {
        from_bytes(bytes).map_err(ProtoError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_serialization() {
        let msg = Command::SubmitPlayerNames {
            name1: "Ada".into(),
            name2: "Grace".into(),
        };
        let bytes = msg.to_bytes().expect("Serialization should succeed");
        let decoded = Command::from_bytes(&bytes).expect("Deserialization should succeed");
        assert_eq!(decoded, msg);
    }

    #[test]
    fn test_notification_serialization() {
        let msg = Notification::Scored {
            side: SIDE_RIGHT,
            score_a: 2,
            score_b: 3,
        };
        let bytes = msg.to_bytes().expect("Serialization should succeed");
        match Notification::from_bytes(&bytes).expect("Deserialization should succeed") {
            Notification::Scored {
                side,
                score_a,
                score_b,
            } => {
                assert_eq!(side, 1);
                assert_eq!(score_a, 2);
                assert_eq!(score_b, 3);
            }
            other => panic!("Message type mismatch: {other:?}"),
        }
    }

    #[test]
    fn test_truncated_bytes_fail_to_decode() {
        let bytes = Command::AdjustSetting {
            key: SettingKey::BallSpeed,
            delta: 0.05,
        }
        .to_bytes()
        .expect("Serialization should succeed");

        let err = Command::from_bytes(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(matches!(err, ProtoError::Decode(_)));
        assert!(err.to_string().starts_with("failed to decode message"));
    }

    #[test]
    fn test_sound_cues() {
        assert_eq!(
            Notification::PaddleHit { side: SIDE_LEFT }.sound_cue(),
            Some("paddle_hit")
        );
        assert_eq!(Notification::WallHit.sound_cue(), Some("wall_hit"));
        assert_eq!(
            Notification::Scored {
                side: SIDE_LEFT,
                score_a: 1,
                score_b: 0
            }
            .sound_cue(),
            Some("score")
        );
        assert_eq!(
            Notification::StateChanged {
                state: SessionState::MainMenu
            }
            .sound_cue(),
            Some("click")
        );
        assert_eq!(Notification::BallMoved { x: 0.0, y: 0.0 }.sound_cue(), None);
        assert_eq!(
            Notification::TimerTick { seconds_left: 1.0 }.sound_cue(),
            None
        );
    }

    #[test]
    fn test_skin_labels() {
        let labels: Vec<_> = SkinId::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            ["Default", "Basketball", "Pingpong Ball", "Tennis Ball"]
        );
        assert_eq!(SkinId::default(), SkinId::Default);
    }
}
