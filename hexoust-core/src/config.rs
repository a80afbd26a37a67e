//! Game configuration - board size and pixel layout

use crate::board::DEFAULT_RADIUS;
use crate::hex::Layout;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Static geometry a game is played with
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board radius N (the board has 3N^2 + 3N + 1 cells)
    pub radius: i32,
    /// Pixel layout used to resolve clicks
    pub layout: Layout,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            layout: Layout::default(),
        }
    }
}

impl GameConfig {
    pub fn with_radius(radius: i32) -> Self {
        Self {
            radius,
            ..Default::default()
        }
    }

    /// Reject geometry no board can be built from
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.radius < 1 {
            anyhow::bail!("board radius must be at least 1, got {}", self.radius);
        }
        let l = &self.layout;
        if !(l.size.is_finite() && l.size > 0.0) {
            anyhow::bail!("cell size must be a positive number, got {}", l.size);
        }
        if !(l.origin_x.is_finite() && l.origin_y.is_finite()) {
            anyhow::bail!("board origin must be finite, got ({}, {})", l.origin_x, l.origin_y);
        }
        Ok(())
    }

    /// Load from a JSON file; missing fields fall back to defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save to a JSON file that `load` reads back
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}
