//! Pose synchronization
//!
//! Copies the physics body's position and orientation onto the visual model
//! once per frame. The model loads asynchronously, so either side may be
//! absent; absence is a no-op, never a fault.

use bevy::prelude::*;

use crate::types::{Die, DieVisual};

pub fn sync_die_visual(
    body_query: Query<&Transform, (With<Die>, Without<DieVisual>)>,
    mut visual_query: Query<&mut Transform, With<DieVisual>>,
) {
    let Some(body) = body_query.iter().next() else {
        return;
    };
    let Some(mut visual) = visual_query.iter_mut().next() else {
        return;
    };

    // Scale belongs to the model, only the pose follows the body.
    visual.translation = body.translation;
    visual.rotation = body.rotation;
}
