use glam::Vec2;

use crate::Params;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict containment; points on the edge are outside
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.min.x && point.x < self.max.x && point.y > self.min.y && point.y < self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// Playfield geometry. The origin is the arena center, y grows upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub boundary_x: f32,
    pub boundary_y: f32,
    pub paddle_x: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(Params::ARENA_WIDTH, Params::ARENA_HEIGHT)
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        let boundary_x = (width / 2.0).floor() - Params::WALL_MARGIN;
        let boundary_y = (height / 2.0).floor() - Params::WALL_MARGIN;
        Self {
            width,
            height,
            boundary_x,
            boundary_y,
            paddle_x: (boundary_x * Params::PADDLE_INSET).trunc(),
        }
    }

    /// Size the arena to 95% of a window, capped at the default size
    pub fn for_window(window_width: f32, window_height: f32) -> Self {
        let width = window_width.max(Params::ARENA_MIN_WIDTH);
        let height = window_height.max(Params::ARENA_MIN_HEIGHT);
        Self::new(
            (width * 0.95).floor().min(Params::ARENA_WIDTH),
            (height * 0.95).floor().min(Params::ARENA_HEIGHT),
        )
    }

    pub fn scale_factor(&self) -> f32 {
        (self.width / Params::ARENA_MIN_WIDTH).min(self.height / Params::ARENA_MIN_HEIGHT)
    }

    /// Furthest a paddle center may travel from y = 0
    pub fn paddle_limit(&self) -> f32 {
        self.boundary_y - Params::PADDLE_TRAVEL_MARGIN
    }

    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let limit = self.paddle_limit();
        y.clamp(-limit, limit)
    }

    /// Height the AI folds its trajectory prediction into
    pub fn effective_height(&self) -> f32 {
        self.height - Params::EFFECTIVE_HEIGHT_MARGIN
    }

    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Point as a percentage of the arena size, used for menu layout
    pub fn percent(&self, x_pct: f32, y_pct: f32) -> Vec2 {
        Vec2::new(self.width * x_pct / 100.0, self.height * y_pct / 100.0)
    }
}
