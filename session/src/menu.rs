//! Menu screens as plain data
//!
//! Every screen is a list of elements laid out in arena coordinates. A UI
//! draws them however it likes and forwards clicks back through
//! [`Menu::click`], which hit-tests the clickable elements.

use game_core::{Aabb, Arena, Difficulty};
use glam::Vec2;
use proto::{Command, DifficultyLevel, GameMode, SessionState, SettingKey, SkinId};

use crate::settings::{adjust_step, Settings};

/// Side of the square in-game buttons
const GAME_BUTTON_SIZE: f32 = 40.0;
/// Distance of the in-game buttons from the side walls
const GAME_BUTTON_MARGIN: f32 = 40.0;

#[derive(Debug, Clone, PartialEq)]
pub enum MenuElement {
    Drawable {
        label: String,
        at: Vec2,
    },
    Clickable {
        bounds: Aabb,
        label: String,
        action: Command,
    },
}

impl MenuElement {
    fn text(label: impl Into<String>, at: Vec2) -> Self {
        MenuElement::Drawable {
            label: label.into(),
            at,
        }
    }

    fn button(label: impl Into<String>, center: Vec2, size: Vec2, action: Command) -> Self {
        MenuElement::Clickable {
            bounds: Aabb::from_center_size(center, size),
            label: label.into(),
            action,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MenuElement::Drawable { label, .. } | MenuElement::Clickable { label, .. } => {
                label.as_str()
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Menu {
    pub elements: Vec<MenuElement>,
}

impl Menu {
    /// Layout of the screen shown in `state`
    pub fn for_state(state: SessionState, arena: &Arena, settings: &Settings) -> Self {
        let elements = match state {
            SessionState::Title => title_screen(arena),
            SessionState::MainMenu => main_menu(arena),
            SessionState::DifficultySelect => difficulty_menu(arena),
            SessionState::NameEntry => name_entry(arena),
            SessionState::SkinSelect => skin_menu(arena, settings),
            SessionState::Settings => settings_menu(arena, settings),
            SessionState::Playing => game_overlay(arena, settings),
            SessionState::Paused => {
                let mut elements = game_overlay(arena, settings);
                elements.push(MenuElement::text("Paused", Vec2::ZERO));
                elements
            }
            SessionState::RoundEnd => round_end(arena),
            SessionState::Exited => Vec::new(),
        };
        Self { elements }
    }

    pub fn push(&mut self, element: MenuElement) {
        self.elements.push(element);
    }

    /// Command bound to the first clickable element under `point`
    pub fn click(&self, point: Vec2) -> Option<Command> {
        self.elements.iter().find_map(|element| match element {
            MenuElement::Clickable { bounds, action, .. } if bounds.contains(point) => {
                Some(action.clone())
            }
            _ => None,
        })
    }

    /// Center of the clickable labelled `label`
    pub fn find(&self, label: &str) -> Option<Vec2> {
        self.elements.iter().find_map(|element| match element {
            MenuElement::Clickable {
                bounds, label: l, ..
            } if l == label => Some(bounds.center()),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(MenuElement::label)
    }
}

fn title_screen(arena: &Arena) -> Vec<MenuElement> {
    vec![
        MenuElement::text("PONG", arena.percent(0.0, 12.5)),
        MenuElement::text("Press Anywhere to Start", arena.percent(0.0, 5.0)),
        // Any click on the playfield continues
        MenuElement::button(
            "Start",
            Vec2::ZERO,
            Vec2::new(arena.width, arena.height),
            Command::Continue,
        ),
    ]
}

fn main_menu(arena: &Arena) -> Vec<MenuElement> {
    let items = [
        ("Solo Player", Command::SelectMode(GameMode::OnePlayer)),
        ("Two Player", Command::SelectMode(GameMode::TwoPlayer)),
        ("Exit Game", Command::Exit),
        ("Select Skin", Command::OpenSkins),
        ("Settings", Command::OpenSettings),
    ];
    let size = arena.percent(25.0, 7.0);

    let mut elements = vec![MenuElement::text("PONG GAME", arena.percent(0.0, 25.0))];
    for (i, (label, action)) in items.into_iter().enumerate() {
        let center = arena.percent(0.0, 10.0 - 10.0 * i as f32);
        elements.push(MenuElement::button(label, center, size, action));
    }
    elements
}

fn difficulty_menu(arena: &Arena) -> Vec<MenuElement> {
    let title_y = arena.height / 4.0;
    let first_y = title_y - 100.0;
    let spacing = 80.0;
    let size = Vec2::new(200.0, 50.0);

    let mut elements = vec![MenuElement::text("Select Difficulty", Vec2::new(0.0, title_y))];
    for (i, difficulty) in Difficulty::ALL.into_iter().enumerate() {
        let level = match difficulty {
            Difficulty::Easy => DifficultyLevel::Easy,
            Difficulty::Medium => DifficultyLevel::Medium,
            Difficulty::Hard => DifficultyLevel::Hard,
        };
        elements.push(MenuElement::button(
            capitalize(difficulty.name()),
            Vec2::new(0.0, first_y - spacing * i as f32),
            size,
            Command::SelectDifficulty(level),
        ));
    }
    elements.push(MenuElement::button(
        "Back",
        Vec2::new(0.0, first_y - spacing * 3.0),
        Vec2::new(200.0, 37.5),
        Command::ReturnToMenu,
    ));
    elements
}

fn name_entry(arena: &Arena) -> Vec<MenuElement> {
    vec![
        MenuElement::text("Enter Player Names", arena.percent(0.0, 25.0)),
        MenuElement::text("Player A (W/S)", arena.percent(0.0, 10.0)),
        MenuElement::text("Player B (Up/Down)", arena.percent(0.0, 0.0)),
        MenuElement::button(
            "Back",
            arena.percent(0.0, -20.0),
            arena.percent(25.0, 7.0),
            Command::ReturnToMenu,
        ),
    ]
}

fn skin_menu(arena: &Arena, settings: &Settings) -> Vec<MenuElement> {
    let spacing = (arena.width / 6.0).min(160.0);
    let size = Vec2::splat(spacing * 0.6);

    let mut elements = vec![MenuElement::text(
        "Select Ball Skin",
        Vec2::new(0.0, arena.height / 4.0),
    )];
    for (i, skin) in SkinId::ALL.into_iter().enumerate() {
        let center = Vec2::new(-spacing * 1.5 + spacing * i as f32, 0.0);
        elements.push(MenuElement::button(
            skin.label(),
            center,
            size,
            Command::SelectSkin(skin),
        ));
        if skin == settings.skin {
            elements.push(MenuElement::text(
                "Selected",
                center - Vec2::new(0.0, spacing * 0.5),
            ));
        }
    }
    elements.push(MenuElement::button(
        "Back",
        Vec2::new(0.0, -spacing * 1.5),
        Vec2::new(200.0, 37.5),
        Command::ReturnToMenu,
    ));
    elements
}

fn settings_menu(arena: &Arena, settings: &Settings) -> Vec<MenuElement> {
    let size = arena.percent(37.5, 7.0);
    let audio = if settings.audio_enabled { "On" } else { "Off" };

    vec![
        MenuElement::text("Settings", arena.percent(0.0, 20.0)),
        MenuElement::button(
            format!("Audio: {audio}"),
            arena.percent(0.0, 10.0),
            size,
            adjust(SettingKey::Audio),
        ),
        MenuElement::button(
            format!("Ball Speed: {:.0}", settings.ball_speed_display()),
            arena.percent(0.0, 3.0),
            size,
            adjust(SettingKey::BallSpeed),
        ),
        MenuElement::button(
            format!("Paddle Speed: {:.0}", settings.paddle_speed),
            arena.percent(0.0, -4.0),
            size,
            adjust(SettingKey::PaddleSpeed),
        ),
        MenuElement::button(
            "Back to Menu",
            arena.percent(0.0, -11.0),
            arena.percent(25.0, 7.0),
            Command::ReturnToMenu,
        ),
    ]
}

/// Menu and audio buttons in the corners of the scoreboard row
fn game_overlay(arena: &Arena, settings: &Settings) -> Vec<MenuElement> {
    let font_size = (arena.height / 30.0).trunc().clamp(18.0, 24.0);
    let row_y = arena.boundary_y - font_size * 0.1;
    let size = Vec2::splat(GAME_BUTTON_SIZE);
    let audio = if settings.audio_enabled {
        "Audio On"
    } else {
        "Audio Off"
    };

    vec![
        MenuElement::button(
            "Menu",
            Vec2::new(-arena.boundary_x + GAME_BUTTON_MARGIN, row_y),
            size,
            Command::ReturnToMenu,
        ),
        MenuElement::button(
            audio,
            Vec2::new(arena.boundary_x - GAME_BUTTON_MARGIN, row_y),
            size,
            adjust(SettingKey::Audio),
        ),
    ]
}

fn round_end(arena: &Arena) -> Vec<MenuElement> {
    let size = arena.percent(25.0, 7.0);
    vec![
        MenuElement::button("Rematch", arena.percent(0.0, 0.0), size, Command::Rematch),
        MenuElement::button(
            "Main Menu",
            arena.percent(0.0, -10.0),
            size,
            Command::ReturnToMenu,
        ),
    ]
}

fn adjust(key: SettingKey) -> Command {
    Command::AdjustSetting {
        key,
        delta: adjust_step(key),
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
