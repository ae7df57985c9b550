//! Table settings and their optional RON file
//!
//! Tuning constants for the throw, settle detection, and the sound cue.
//! Loaded once at startup from `dicetable.ron` if present; a missing or
//! malformed file logs a warning and falls back to defaults.

use bevy::log::warn;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default settings file name, resolved against the working directory.
pub const SETTINGS_PATH: &str = "dicetable.ron";

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSettings {
    /// Scale applied to the unit impulse sampled from a throw profile
    #[serde(default = "default_impulse_scale")]
    pub impulse_scale: f32,

    /// Linear speed below which the die counts as resting
    #[serde(default = "default_rest_linear")]
    pub rest_linear_threshold: f32,

    /// Angular speed below which the die counts as resting
    #[serde(default = "default_rest_angular")]
    pub rest_angular_threshold: f32,

    /// How long the die must stay below the rest thresholds to settle
    #[serde(default = "default_settle_grace")]
    pub settle_grace_secs: f32,

    /// Hard cap on a roll; past this the trigger re-enables regardless
    #[serde(default = "default_max_roll")]
    pub max_roll_secs: f32,

    /// Delay between an accepted throw and its sound cue
    #[serde(default = "default_cue_delay")]
    pub audio_cue_delay_secs: f32,

    /// Linear volume of the sound cue
    #[serde(default = "default_cue_volume")]
    pub audio_cue_volume: f32,
}

fn default_impulse_scale() -> f32 {
    35.0
}
fn default_rest_linear() -> f32 {
    0.1
}
fn default_rest_angular() -> f32 {
    0.1
}
fn default_settle_grace() -> f32 {
    0.5
}
fn default_max_roll() -> f32 {
    3.5
}
fn default_cue_delay() -> f32 {
    0.8
}
fn default_cue_volume() -> f32 {
    0.5
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            impulse_scale: default_impulse_scale(),
            rest_linear_threshold: default_rest_linear(),
            rest_angular_threshold: default_rest_angular(),
            settle_grace_secs: default_settle_grace(),
            max_roll_secs: default_max_roll(),
            audio_cue_delay_secs: default_cue_delay(),
            audio_cue_volume: default_cue_volume(),
        }
    }
}

impl TableSettings {
    /// Load settings from `path`, falling back to defaults on any failure.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => match ron::from_str(&contents) {
                Ok(settings) => settings,
                Err(err) => {
                    warn!("ignoring malformed settings file {}: {}", path.display(), err);
                    Self::default()
                }
            },
            // Missing file is the common case, not worth a warning.
            Err(_) => Self::default(),
        }
    }
}
