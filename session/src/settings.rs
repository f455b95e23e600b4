use game_core::{Arena, Config};
use proto::{Notification, SettingKey, SkinId};

/// Player-tunable settings. They outlive matches and menu round trips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub ball_speed: f32,
    pub paddle_speed: f32,
    pub audio_enabled: bool,
    pub skin: SkinId,
}

impl Default for Settings {
    fn default() -> Self {
        Self::for_arena(&Arena::default())
    }
}

impl Settings {
    /// Defaults scaled to the arena, as the match config is
    pub fn for_arena(arena: &Arena) -> Self {
        let config = Config::for_arena(arena);
        Self {
            ball_speed: config.ball_speed,
            paddle_speed: config.paddle_speed,
            audio_enabled: true,
            skin: SkinId::default(),
        }
    }

    /// Apply a settings change. Speeds are clamped to their ranges and any
    /// non-zero delta toggles audio. Non-finite deltas are ignored. Returns
    /// whether anything changed.
    pub fn adjust(&mut self, key: SettingKey, delta: f32) -> bool {
        if !delta.is_finite() {
            tracing::debug!(?key, delta, "ignoring non-finite setting delta");
            return false;
        }
        let before = *self;
        match key {
            SettingKey::BallSpeed => {
                self.ball_speed = Config::clamp_ball_speed(self.ball_speed + delta);
            }
            SettingKey::PaddleSpeed => {
                self.paddle_speed = Config::clamp_paddle_speed(self.paddle_speed + delta);
            }
            SettingKey::Audio => {
                if delta != 0.0 {
                    self.audio_enabled = !self.audio_enabled;
                }
            }
        }
        *self != before
    }

    pub fn select_skin(&mut self, skin: SkinId) -> bool {
        let changed = self.skin != skin;
        self.skin = skin;
        changed
    }

    /// Match config for `arena` with these speeds applied
    pub fn match_config(&self, arena: &Arena) -> Config {
        let mut config = Config::for_arena(arena);
        config.set_ball_speed(self.ball_speed);
        config.set_paddle_speed(self.paddle_speed);
        config
    }

    /// Ball speed as shown on the settings screen
    pub fn ball_speed_display(&self) -> f32 {
        (self.ball_speed * 500.0).round()
    }

    pub fn notification(&self) -> Notification {
        Notification::SettingsChanged {
            ball_speed: self.ball_speed,
            paddle_speed: self.paddle_speed,
            audio_enabled: self.audio_enabled,
            skin: self.skin,
        }
    }
}

/// Settings-screen step for each adjustable speed
pub fn adjust_step(key: SettingKey) -> f32 {
    match key {
        SettingKey::BallSpeed => 0.05,
        SettingKey::PaddleSpeed => 5.0,
        SettingKey::Audio => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Params;

    #[test]
    fn test_defaults_scale_with_arena() {
        let settings = Settings::default();
        assert!((settings.ball_speed - 0.1875).abs() < 1e-6);
        assert!((settings.paddle_speed - 25.0).abs() < 1e-6);
        assert!(settings.audio_enabled);
        assert_eq!(settings.skin, SkinId::Default);

        let small = Settings::for_arena(&Arena::new(800.0, 600.0));
        assert_eq!(small.ball_speed, 0.15);
        assert_eq!(small.paddle_speed, 20.0);
    }

    #[test]
    fn test_ball_speed_clamps() {
        let mut settings = Settings::default();
        for _ in 0..20 {
            settings.adjust(SettingKey::BallSpeed, adjust_step(SettingKey::BallSpeed));
        }
        assert_eq!(settings.ball_speed, Params::BALL_SPEED_MAX);
        assert!(!settings.adjust(SettingKey::BallSpeed, 0.05), "already at max");

        settings.adjust(SettingKey::BallSpeed, -10.0);
        assert_eq!(settings.ball_speed, Params::BALL_SPEED_MIN);
    }

    #[test]
    fn test_paddle_speed_clamps() {
        let mut settings = Settings::default();
        assert!(settings.adjust(SettingKey::PaddleSpeed, 5.0));
        assert_eq!(settings.paddle_speed, 30.0);
        settings.adjust(SettingKey::PaddleSpeed, 100.0);
        assert_eq!(settings.paddle_speed, 40.0);
        settings.adjust(SettingKey::PaddleSpeed, -100.0);
        assert_eq!(settings.paddle_speed, 5.0);
    }

    #[test]
    fn test_non_finite_delta_is_ignored() {
        let mut settings = Settings::default();
        let before = settings;

        assert!(!settings.adjust(SettingKey::BallSpeed, f32::NAN));
        assert!(!settings.adjust(SettingKey::PaddleSpeed, f32::INFINITY));
        assert!(!settings.adjust(SettingKey::Audio, f32::NAN));
        assert_eq!(settings, before);

        let config = settings.match_config(&Arena::default());
        assert!(config.ball_speed.is_finite());
    }

    #[test]
    fn test_audio_toggles_on_any_nonzero_delta() {
        let mut settings = Settings::default();
        assert!(settings.adjust(SettingKey::Audio, -1.0));
        assert!(!settings.audio_enabled);
        assert!(settings.adjust(SettingKey::Audio, 0.5));
        assert!(settings.audio_enabled);
        assert!(!settings.adjust(SettingKey::Audio, 0.0));
    }

    #[test]
    fn test_match_config_uses_settings() {
        let mut settings = Settings::default();
        settings.adjust(SettingKey::BallSpeed, 0.1);
        let config = settings.match_config(&Arena::default());
        assert_eq!(config.ball_speed, settings.ball_speed);
        assert_eq!(config.paddle_speed, settings.paddle_speed);
    }
}
