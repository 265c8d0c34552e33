//! User configuration handling.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::layout;

/// Optional overrides for the widget's tuning knobs. Missing fields
/// fall back to the constants in `layout`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub gutter_hit_zone_px: Option<f32>,
    pub placeholder_height_lines: Option<u32>,
}

impl WidgetConfig {
    /// Accepted offset into the gutter's line-decorations band.
    #[must_use]
    pub fn hit_zone_px(&self) -> f32 {
        self.gutter_hit_zone_px
            .unwrap_or(layout::GUTTER_HIT_ZONE_PX)
    }

    /// Zone height used before the first content measurement.
    #[must_use]
    pub fn placeholder_height(&self) -> u32 {
        self.placeholder_height_lines
            .unwrap_or(layout::PLACEHOLDER_HEIGHT_LINES)
    }
}

/// Load widget configuration from the user's config directory.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be read or parsed.
pub fn load_widget_config() -> anyhow::Result<Option<WidgetConfig>> {
    let Some(path) = config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    Ok(Some(config))
}

/// Save widget configuration to the user's config directory.
///
/// # Errors
///
/// Returns an error if the config directory cannot be created or the file cannot be written.
pub fn save_widget_config(config: &WidgetConfig) -> anyhow::Result<()> {
    let Some(path) = config_path() else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, contents)?;
    Ok(())
}

fn config_path() -> Option<PathBuf> {
    let base = if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg)
    } else if let Ok(home) = std::env::var("HOME") {
        Path::new(&home).join(".config")
    } else {
        return None;
    };

    Some(base.join("review-zone").join("widget.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fall_back_to_layout_constants() {
        let config = WidgetConfig::default();
        assert!((config.hit_zone_px() - layout::GUTTER_HIT_ZONE_PX).abs() < f32::EPSILON);
        assert_eq!(config.placeholder_height(), layout::PLACEHOLDER_HEIGHT_LINES);
    }

    #[test]
    fn overrides_win_over_defaults() {
        let config: WidgetConfig =
            serde_json::from_str(r#"{"gutter_hit_zone_px": 20.0}"#).unwrap();
        assert!((config.hit_zone_px() - 20.0).abs() < f32::EPSILON);
        assert_eq!(config.placeholder_height(), layout::PLACEHOLDER_HEIGHT_LINES);
    }
}
