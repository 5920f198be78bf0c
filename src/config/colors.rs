// Color configuration - danger badge and UI colors
//
// Colors are written in config.toml either as a name ("red") or an RGB
// triple ([255, 0, 0]).

use crate::catalog::DangerLevel;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Colors for the three danger levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DangerColors {
    #[serde(default = "default_green")]
    pub low: ColorSpec,

    #[serde(default = "default_yellow")]
    pub medium: ColorSpec,

    #[serde(default = "default_red")]
    pub high: ColorSpec,

    /// Non-danger UI elements
    #[serde(default)]
    pub ui: UiColors,
}

impl Default for DangerColors {
    fn default() -> Self {
        Self {
            low: default_green(),
            medium: default_yellow(),
            high: default_red(),
            ui: UiColors::default(),
        }
    }
}

impl DangerColors {
    pub fn for_level(&self, level: DangerLevel) -> Color {
        match level {
            DangerLevel::Low => self.low.to_color(),
            DangerLevel::Medium => self.medium.to_color(),
            DangerLevel::High => self.high.to_color(),
        }
    }
}

/// UI element colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiColors {
    /// Pane borders
    #[serde(default = "default_gray")]
    pub border: ColorSpec,

    /// Focused pane border and selection highlight
    #[serde(default = "default_cyan")]
    pub accent: ColorSpec,

    /// Key hints and completion candidates
    #[serde(default = "default_dark_gray")]
    pub hint: ColorSpec,
}

impl Default for UiColors {
    fn default() -> Self {
        Self {
            border: default_gray(),
            accent: default_cyan(),
            hint: default_dark_gray(),
        }
    }
}

/// Color specification - supports named colors and RGB
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (e.g., "red", "green", "cyan")
    Named(String),
    /// RGB color (e.g., [255, 0, 0])
    Rgb(u8, u8, u8),
}

impl ColorSpec {
    /// Convert to ratatui Color
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Named(name) => parse_named_color(name),
            ColorSpec::Rgb(r, g, b) => Color::Rgb(*r, *g, *b),
        }
    }

    pub fn is_known(&self) -> bool {
        match self {
            ColorSpec::Named(name) => named_color(name).is_some(),
            ColorSpec::Rgb(..) => true,
        }
    }
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => return None,
    };
    Some(color)
}

/// Parse named color string, falling back to white
fn parse_named_color(name: &str) -> Color {
    named_color(name).unwrap_or(Color::White)
}

fn default_green() -> ColorSpec {
    ColorSpec::Named("green".to_string())
}

fn default_yellow() -> ColorSpec {
    ColorSpec::Named("yellow".to_string())
}

fn default_red() -> ColorSpec {
    ColorSpec::Named("red".to_string())
}

fn default_gray() -> ColorSpec {
    ColorSpec::Named("gray".to_string())
}

fn default_dark_gray() -> ColorSpec {
    ColorSpec::Named("darkgray".to_string())
}

fn default_cyan() -> ColorSpec {
    ColorSpec::Named("cyan".to_string())
}
