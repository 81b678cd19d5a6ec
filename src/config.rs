//! View tuning knobs, loaded from a RON file.
//!
//! Every field has a default, so a config file only needs to list what it overrides:
//!
//! ```ron
//! (
//!     hp_tween_frames: 45,
//!     dialog_lines_per_page: 3,
//! )
//! ```

use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Upper bound for any frame count: one minute at 60 frames per second.
pub const MAX_FRAMES: u32 = 3_600;

/// A straight sprite motion: how far it travels and over how many frames.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MotionSpec {
    pub distance: f32,
    pub frames: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BattleViewConfig {
    /// Frames an HP bar needs to cover a full-bar change. Bars never move slower than 1 HP per frame.
    pub hp_tween_frames: u32,
    /// Default attack animation: a lunge toward the opponent and back.
    pub attack_lunge: MotionSpec,
    /// Sprite slide of a recalled unit, and of its replacement coming in.
    pub switch_slide: MotionSpec,
    /// Sprite drop when a unit faints.
    pub faint_drop: MotionSpec,
    /// Characters per dialog line.
    pub dialog_line_width: usize,
    /// Lines per dialog page.
    pub dialog_lines_per_page: usize,
}

impl Default for BattleViewConfig {
    fn default() -> Self {
        Self {
            hp_tween_frames: 30,
            attack_lunge: MotionSpec {
                distance: 24.0,
                frames: 6,
            },
            switch_slide: MotionSpec {
                distance: 160.0,
                frames: 12,
            },
            faint_drop: MotionSpec {
                distance: 96.0,
                frames: 16,
            },
            dialog_line_width: 28,
            dialog_lines_per_page: 2,
        }
    }
}

impl BattleViewConfig {
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded battle view config");
        Ok(config)
    }

    pub fn from_ron_str(content: &str) -> ConfigResult<Self> {
        let config: BattleViewConfig = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(1..=MAX_FRAMES).contains(&self.hp_tween_frames) {
            return Err(invalid("hp_tween_frames", "must be between 1 and 3600"));
        }
        for (field, motion) in [
            ("attack_lunge", &self.attack_lunge),
            ("switch_slide", &self.switch_slide),
            ("faint_drop", &self.faint_drop),
        ] {
            if !(1..=MAX_FRAMES).contains(&motion.frames) {
                return Err(invalid(field, "frames must be between 1 and 3600"));
            }
            if !motion.distance.is_finite() {
                return Err(invalid(field, "distance must be finite"));
            }
        }
        if self.dialog_line_width == 0 {
            return Err(invalid("dialog_line_width", "must be at least 1"));
        }
        if self.dialog_lines_per_page == 0 {
            return Err(invalid("dialog_lines_per_page", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
}
