//! Camera-related components and zoom state

use bevy::prelude::*;

/// Marker component for the main 3D camera
#[derive(Component)]
pub struct MainCamera;

/// Camera zoom level, 0.0 = closest, 1.0 = farthest
#[derive(Resource)]
pub struct ZoomState {
    pub level: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            level: 0.5,
            min_distance: 18.0,
            max_distance: 42.0,
        }
    }
}

impl ZoomState {
    pub fn get_distance(&self) -> f32 {
        self.min_distance + self.level * (self.max_distance - self.min_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_state_get_distance() {
        let zoom = ZoomState::default();
        // At level 0.5: 18.0 + 0.5 * (42.0 - 18.0) = 30.0
        assert!((zoom.get_distance() - 30.0).abs() < 0.01);

        let zoom_min = ZoomState {
            level: 0.0,
            ..default()
        };
        assert_eq!(zoom_min.get_distance(), 18.0);

        let zoom_max = ZoomState {
            level: 1.0,
            ..default()
        };
        assert_eq!(zoom_max.get_distance(), 42.0);
    }
}
