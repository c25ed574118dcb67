use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;

use crate::engine::core::window_config::create_window_config;
use crate::engine::pose::Bounds;
use crate::engine::scene_bridge::{ArPlane, LocalBounds};
use crate::tools::object_editor::ObjectEditorPlugin;
use constants::palette::FLOOR_COLOR;

/// Half-size of the simulated floor plane.
const FLOOR_HALF_SIZE: f32 = 10.0;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(ObjectEditorPlugin)
        .insert_resource(AmbientLight {
            brightness: 300.0,
            ..default()
        })
        .add_systems(Startup, setup);

    app
}

pub fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    info!("=== MR OBJECT EDITOR ===");

    spawn_lighting(&mut commands);
    spawn_camera(&mut commands);
    spawn_floor(&mut commands, &mut meshes, &mut materials);
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}

fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(-2.5, 4.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

// Stands in for a detected AR plane: placeable, never selectable
fn spawn_floor(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    commands.spawn((
        ArPlane,
        Name::new("Floor"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(FLOOR_HALF_SIZE * 2.0, FLOOR_HALF_SIZE * 2.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: FLOOR_COLOR,
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::default(),
        LocalBounds(Bounds::new(
            Vec3::new(0.0, -0.005, 0.0),
            Vec3::new(FLOOR_HALF_SIZE, 0.005, FLOOR_HALF_SIZE),
        )),
    ));
}
