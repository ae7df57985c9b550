//! Scene setup system
//!
//! Initializes the 3D scene: camera, lights, the tray the die rolls inside,
//! the die's physics body, and the UI shell (Throw button, status line).

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::types::*;

/// Tray interior: x spans -15..15, z spans -10..8, matching the throw
/// profiles' corner spawn points.
pub const TRAY_HALF_X: f32 = 15.0;
pub const TRAY_NORTH_Z: f32 = -10.0;
pub const TRAY_SOUTH_Z: f32 = 8.0;

const WALL_HEIGHT: f32 = 6.0;
const WALL_THICKNESS: f32 = 0.3;

pub const BUTTON_READY_BG: Color = Color::srgb(0.18, 0.32, 0.18);
pub const BUTTON_ROLLING_BG: Color = Color::srgb(0.25, 0.25, 0.25);

/// Main setup system - initializes the entire scene
pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    zoom_state: Res<ZoomState>,
) {
    // Camera - position based on zoom state
    let camera_distance = zoom_state.get_distance();
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, camera_distance * 0.7, camera_distance * 0.7)
            .looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));

    // Lights
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(-6.9, 4.4, 1.4).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });

    let tray_width = TRAY_HALF_X * 2.0;
    let tray_depth = TRAY_SOUTH_Z - TRAY_NORTH_Z;
    let tray_center_z = (TRAY_SOUTH_Z + TRAY_NORTH_Z) / 2.0;

    // Floor
    let floor_mat = materials.add(StandardMaterial {
        base_color: Color::srgb(0.98, 0.98, 0.98),
        perceptual_roughness: 0.9,
        ..default()
    });
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(tray_width + 1.0, 0.3, tray_depth + 1.0))),
        MeshMaterial3d(floor_mat),
        Transform::from_xyz(0.0, -0.15, tray_center_z),
        Collider::cuboid((tray_width + 1.0) / 2.0, 0.15, (tray_depth + 1.0) / 2.0),
        RigidBody::Fixed,
        Restitution::coefficient(0.0),
        Friction::coefficient(0.9),
        DiceTray,
    ));

    // Walls: collider-only, so the view into the tray stays clear
    for (pos, size) in [
        (
            Vec3::new(0.0, WALL_HEIGHT / 2.0, TRAY_NORTH_Z - WALL_THICKNESS / 2.0),
            Vec3::new(tray_width + 1.0, WALL_HEIGHT, WALL_THICKNESS),
        ),
        (
            Vec3::new(0.0, WALL_HEIGHT / 2.0, TRAY_SOUTH_Z + WALL_THICKNESS / 2.0),
            Vec3::new(tray_width + 1.0, WALL_HEIGHT, WALL_THICKNESS),
        ),
        (
            Vec3::new(-TRAY_HALF_X - WALL_THICKNESS / 2.0, WALL_HEIGHT / 2.0, tray_center_z),
            Vec3::new(WALL_THICKNESS, WALL_HEIGHT, tray_depth + 1.0),
        ),
        (
            Vec3::new(TRAY_HALF_X + WALL_THICKNESS / 2.0, WALL_HEIGHT / 2.0, tray_center_z),
            Vec3::new(WALL_THICKNESS, WALL_HEIGHT, tray_depth + 1.0),
        ),
    ] {
        commands.spawn((
            Transform::from_translation(pos),
            Collider::cuboid(size.x / 2.0, size.y / 2.0, size.z / 2.0),
            RigidBody::Fixed,
            Restitution::coefficient(0.0),
            Friction::coefficient(0.9),
            DiceTray,
        ));
    }

    // Invisible lid to keep a hard throw from hopping out of the tray
    commands.spawn((
        Transform::from_xyz(0.0, WALL_HEIGHT + 0.2, tray_center_z),
        Collider::cuboid(tray_width / 2.0 + 1.0, 0.2, tray_depth / 2.0 + 1.0),
        RigidBody::Fixed,
        Restitution::coefficient(0.05),
        Friction::coefficient(0.3),
        DiceTray,
    ));

    // The die body. The visual model is spawned separately once its glTF
    // scene finishes loading; until then the body simulates on its own.
    commands.spawn((
        RigidBody::Dynamic,
        Collider::cuboid(1.0, 1.0, 1.0),
        ColliderMassProperties::Mass(1.0),
        Velocity::zero(),
        ExternalImpulse::default(),
        Restitution::coefficient(0.0),
        Friction::coefficient(0.9),
        Transform::from_xyz(0.0, 3.0, 0.0),
        Die::d6(),
    ));

    spawn_ui(&mut commands);
}

fn spawn_ui(commands: &mut Commands) {
    // Status line at the top
    commands.spawn((
        Text::new("Press SPACE or click Throw"),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::srgb(0.15, 0.15, 0.15)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        RollStatusText,
    ));

    // Throw button at the bottom left
    commands
        .spawn((
            Button,
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(20.0),
                left: Val::Px(20.0),
                width: Val::Px(140.0),
                height: Val::Px(44.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_READY_BG),
            ThrowButton,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Throw"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                ThrowButtonLabel,
            ));
        });
}
