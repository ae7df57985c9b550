//! Type definitions for the dice tray
//!
//! This module is organized into submodules:
//! - `dice` - Die components, roll state machine, and roll results
//! - `throw` - Throw zones and per-zone impulse profiles
//! - `camera` - Camera-related components and zoom state
//! - `settings` - Table settings loaded from an optional RON file
//! - `ui` - UI marker components

pub mod camera;
pub mod dice;
pub mod settings;
pub mod throw;
pub mod ui;

// Re-export all public types for convenient access
pub use camera::*;
pub use dice::*;
pub use settings::*;
pub use throw::*;
pub use ui::*;
