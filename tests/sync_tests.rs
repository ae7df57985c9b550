//! Tests for body-to-visual pose synchronization.

use bevy::prelude::*;

use dicetable::systems::sync_die_visual;
use dicetable::types::{Die, DieVisual};

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_systems(Update, sync_die_visual);
    app
}

#[test]
fn test_sync_is_a_noop_without_a_visual() {
    let mut app = test_app();

    let body = app
        .world_mut()
        .spawn((Die::d6(), Transform::from_xyz(1.0, 2.0, 3.0)))
        .id();

    // Model not loaded yet: nothing to copy onto, nothing to panic over.
    app.update();

    let transform = app.world().get::<Transform>(body).unwrap();
    assert_eq!(transform.translation, Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_sync_copies_pose_but_not_scale() {
    let mut app = test_app();

    let rotation = Quat::from_rotation_y(1.2);
    app.world_mut().spawn((
        Die::d6(),
        Transform::from_xyz(4.0, 1.0, -2.0).with_rotation(rotation),
    ));
    let visual = app
        .world_mut()
        .spawn((DieVisual, Transform::from_scale(Vec3::splat(2.0))))
        .id();

    app.update();

    let transform = app.world().get::<Transform>(visual).unwrap();
    assert_eq!(transform.translation, Vec3::new(4.0, 1.0, -2.0));
    assert_eq!(transform.rotation, rotation);
    assert_eq!(transform.scale, Vec3::splat(2.0));
}

#[test]
fn test_sync_follows_body_every_frame() {
    let mut app = test_app();

    let body = app
        .world_mut()
        .spawn((Die::d6(), Transform::from_xyz(0.0, 3.0, 0.0)))
        .id();
    let visual = app.world_mut().spawn((DieVisual, Transform::default())).id();

    app.update();
    assert_eq!(
        app.world().get::<Transform>(visual).unwrap().translation,
        Vec3::new(0.0, 3.0, 0.0)
    );

    app.world_mut().get_mut::<Transform>(body).unwrap().translation = Vec3::new(2.0, 1.0, 2.0);
    app.update();
    assert_eq!(
        app.world().get::<Transform>(visual).unwrap().translation,
        Vec3::new(2.0, 1.0, 2.0)
    );
}
