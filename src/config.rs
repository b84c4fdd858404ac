use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::border::Bounds;
use crate::error::{Error, Result};
use crate::geometry::{Direction, Point};
use crate::snake::Motion;

/// RGBA colour, written as `#RRGGBB` or `#RRGGBBAA` in config files.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color([r, g, b, 0xFF])
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Color> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| (h.len() == 6 || h.len() == 8) && h.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| Error::InvalidColor(s.clone()))?;
        let mut rgba = [0xFF; 4];
        for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
            let pair = std::str::from_utf8(chunk).map_err(|_| Error::InvalidColor(s.clone()))?;
            rgba[i] = u8::from_str_radix(pair, 16).map_err(|_| Error::InvalidColor(s.clone()))?;
        }
        Ok(Color(rgba))
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String {
        c.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        if a == 0xFF {
            write!(f, "#{r:02X}{g:02X}{b:02X}")
        } else {
            write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

/// Upper bound on `apple_cap`.
pub const MAX_APPLE_CAP: usize = 1_000;

/// Every tunable of a session. Missing keys in a config file fall back to
/// the defaults below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub tick_ms: u64,
    pub speed: f32,
    pub extend_bonus: f32,
    pub shrink_threshold: f32,
    pub capture_radius: f32,
    pub apple_cap: usize,
    pub spawn_inset: u32,
    pub initial_head: Point,
    pub initial_tail: Point,
    pub initial_direction: Direction,
    pub snake_width: f32,
    pub apple_radius: f32,
    pub snake_color: Color,
    pub apple_color: Color,
    pub background_color: Color,
    pub game_over_color: Color,
    pub window_scale: f64,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            tick_ms: 100,
            speed: 5.0,
            extend_bonus: 5.0,
            shrink_threshold: 5.0,
            capture_radius: 10.0,
            apple_cap: 10,
            spawn_inset: 10,
            initial_head: Point::new(100.0, 100.0),
            initial_tail: Point::new(60.0, 100.0),
            initial_direction: Direction::Right,
            snake_width: 10.0,
            apple_radius: 2.0,
            snake_color: Color::rgb(0x00, 0x00, 0xFF),
            apple_color: Color::rgb(0x00, 0xFF, 0x00),
            background_color: Color::rgb(0xFF, 0xFF, 0xFF),
            game_over_color: Color::rgb(0xFF, 0x00, 0x00),
            window_scale: 1.0,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Reads a JSON config file and validates it.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    pub fn motion(&self) -> Motion {
        Motion {
            speed: self.speed,
            extend_bonus: self.extend_bonus,
            shrink_threshold: self.shrink_threshold,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(invalid("field width and height must be positive"));
        }
        if self.tick_ms == 0 {
            return Err(invalid("tick_ms must be positive"));
        }
        if self.apple_cap > MAX_APPLE_CAP {
            return Err(invalid(&format!(
                "apple_cap must be at most {MAX_APPLE_CAP}, got {}",
                self.apple_cap
            )));
        }
        let positive = [
            ("speed", self.speed),
            ("capture_radius", self.capture_radius),
            ("snake_width", self.snake_width),
            ("window_scale", self.window_scale as f32),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(&format!("{name} must be a positive number, got {value}")));
            }
        }
        let non_negative = [
            ("extend_bonus", self.extend_bonus),
            ("shrink_threshold", self.shrink_threshold),
            ("apple_radius", self.apple_radius),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(&format!("{name} must not be negative, got {value}")));
            }
        }

        let bounds = self.bounds();
        if !bounds.contains(self.initial_head) || !bounds.contains(self.initial_tail) {
            return Err(invalid("initial snake must lie inside the field"));
        }
        let length = self.initial_head.distance(self.initial_tail);
        let expected_head = self.initial_tail.advanced(self.initial_direction, length);
        if length == 0.0 || expected_head.distance(self.initial_head) > 1e-3 {
            return Err(invalid(
                "initial_head must lie ahead of initial_tail along initial_direction",
            ));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> Error {
    Error::InvalidConfig(msg.to_string())
}
