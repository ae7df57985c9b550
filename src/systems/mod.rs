//! Systems module for the dice tray
//!
//! This module contains all the Bevy systems, organized into submodules by
//! functionality:
//!
//! - `setup`: Scene initialization (camera, lights, tray, die body, UI)
//! - `assets`: Async loading of the die model and sound cue
//! - `input`: Keyboard and Throw-button handling
//! - `roll`: Roll controller — throw application and settle detection
//! - `sync`: Per-frame copy of the body pose onto the visual model
//! - `audio`: The delayed sound cue
//! - `camera`: Camera rotation and zoom controls

mod assets;
mod audio;
mod camera;
mod input;
mod roll;
mod setup;
mod sync;

// Re-export all public systems
pub use assets::{
    load_dice_assets, report_sound_failure, spawn_die_visual_when_ready, AssetStatus, DiceAssets,
};
pub use audio::{play_roll_cue, RollCue};
pub use camera::{log_viewport_resize, rotate_camera};
pub use input::{handle_input, handle_throw_button, update_throw_button};
pub use roll::{begin_roll, check_die_settled, update_status_text};
pub use setup::setup;
pub use sync::sync_die_visual;
