//! UI marker components

use bevy::prelude::*;

/// The single Throw button
#[derive(Component)]
pub struct ThrowButton;

/// Label inside the Throw button
#[derive(Component)]
pub struct ThrowButtonLabel;

/// Status line showing the roll phase and last result
#[derive(Component)]
pub struct RollStatusText;
