//! Presentation theme configuration.
//!
//! Consumed only by the shell when it renders or exports charts; the core
//! never reads these. Defaults reproduce the dashboard's dark look.

use serde::{Deserialize, Serialize};

pub mod accents {
    pub const BACKGROUND: &str = "#0e1117";
    pub const TEXT: &str = "white";
    pub const BLUE: &str = "#4A90E2";
    pub const ORANGE: &str = "#F58518";
    pub const GREEN: &str = "#54A24B";
    pub const RED: &str = "#DC143C";
    pub const GOLD: &str = "#FFD700";
    pub const GRID: &str = "#2C2C2C";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub background: String,
    pub text: String,
    pub grid: String,
    pub accent_blue: String,
    pub accent_orange: String,
    pub accent_green: String,
    pub accent_red: String,
    pub accent_gold: String,
    /// Categorical color cycle for nominal legends.
    pub category_range: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: accents::BACKGROUND.to_string(),
            text: accents::TEXT.to_string(),
            grid: accents::GRID.to_string(),
            accent_blue: accents::BLUE.to_string(),
            accent_orange: accents::ORANGE.to_string(),
            accent_green: accents::GREEN.to_string(),
            accent_red: accents::RED.to_string(),
            accent_gold: accents::GOLD.to_string(),
            category_range: [
                accents::GOLD,
                accents::RED,
                accents::BLUE,
                accents::GREEN,
                accents::ORANGE,
                "#9B59B6",
                "#95A5A6",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        }
    }
}

impl ThemeConfig {
    /// Two-color ramp used for "gradient" color scales (low -> high).
    pub fn gradient_range(&self) -> [&str; 2] {
        [&self.accent_orange, &self.accent_blue]
    }
}
