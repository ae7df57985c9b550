//! Camera control systems

use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::types::*;

/// System to handle camera rotation and keyboard zoom
pub fn rotate_camera(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
    mut zoom_state: ResMut<ZoomState>,
) {
    let rotation_speed = 1.0;
    let zoom_speed = 0.5;

    for mut transform in camera_query.iter_mut() {
        let mut angle = 0.0;

        if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
            angle += rotation_speed * time.delta_secs();
        }
        if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
            angle -= rotation_speed * time.delta_secs();
        }

        if angle != 0.0 {
            let rotation = Quat::from_rotation_y(angle);
            transform.translation = rotation * transform.translation;
            *transform = transform.looking_at(Vec3::ZERO, Vec3::Y);
        }

        if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
            zoom_state.level = (zoom_state.level - zoom_speed * time.delta_secs()).max(0.0);
        }
        if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
            zoom_state.level = (zoom_state.level + zoom_speed * time.delta_secs()).min(1.0);
        }

        // Apply zoom to camera
        let target_distance = zoom_state.get_distance();
        let current_dir = transform.translation.normalize();
        transform.translation = current_dir * target_distance;
        *transform = transform.looking_at(Vec3::ZERO, Vec3::Y);
    }
}

/// Aspect and render-target resizing are handled by the render pipeline;
/// this only keeps a trace of viewport changes.
pub fn log_viewport_resize(mut resize_events: MessageReader<WindowResized>) {
    for event in resize_events.read() {
        debug!("viewport resized to {:.0}x{:.0}", event.width, event.height);
    }
}
