//! Page template configuration.
//!
//! A template fixes everything the renderer needs that is not in the
//! document itself: page margins, the base typeface and size, line
//! height and colors. Values deserialize from the same kebab-case form
//! the rest of the configuration surface uses.

use polar_ir::Color;
use serde::{Deserialize, Serialize};

/// Points per centimeter, for margin conversion at the composer seam.
pub const POINTS_PER_CM: f32 = 28.346_457;

fn default_margin() -> f32 {
    2.0
}

/// Page margins in centimeters.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(default_margin())
    }
}

impl Margins {
    pub const fn uniform(cm: f32) -> Self {
        Self { top: cm, right: cm, bottom: cm, left: cm }
    }

    pub fn to_points(self) -> [f32; 4] {
        [
            self.top * POINTS_PER_CM,
            self.right * POINTS_PER_CM,
            self.bottom * POINTS_PER_CM,
            self.left * POINTS_PER_CM,
        ]
    }
}

fn default_font_family() -> String {
    "Calibri".to_string()
}

fn default_font_size() -> f32 {
    11.0
}

fn default_line_height() -> f32 {
    1.15
}

fn default_heading_sizes() -> [f32; 6] {
    [2.0, 1.5, 1.17, 1.0, 0.83, 0.67]
}

fn default_background() -> Color {
    Color::rgb(255, 255, 255)
}

/// Everything a paginated backend needs to lay a document out.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct TemplateConfig {
    pub margins: Margins,
    pub font_family: String,
    /// Base font size in points. Heading sizes are multiples of it.
    pub font_size: f32,
    pub line_height: f32,
    pub text_color: Color,
    pub background_color: Color,
    /// Per-level size multipliers for heading levels 1 through 6.
    pub heading_sizes: [f32; 6],
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            line_height: default_line_height(),
            text_color: Color::default(),
            background_color: default_background(),
            heading_sizes: default_heading_sizes(),
        }
    }
}

impl TemplateConfig {
    /// Formal template: wide margins, Arial, generous line spacing.
    pub fn government() -> Self {
        Self {
            margins: Margins::uniform(2.5),
            font_family: "Arial".to_string(),
            font_size: 12.0,
            line_height: 1.5,
            ..Self::default()
        }
    }

    /// Everyday template and the configuration default.
    pub fn generic() -> Self {
        Self::default()
    }

    /// Font size for a heading level, base size times the level
    /// multiplier. Levels outside 1 through 6 fall back to the base.
    pub fn heading_size(&self, level: u8) -> f32 {
        let factor = match level {
            1..=6 => self.heading_sizes[(level - 1) as usize],
            _ => 1.0,
        };
        self.font_size * factor
    }
}
