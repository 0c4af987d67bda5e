use bevy::{prelude::{Plugin, App, Startup, Update, Commands, Query, Transform, With, Without, Res, Camera, Camera2dBundle, ClearColor, Color}, time::Time};
use sr_common::components::player::Player;
use sr_util::constants::{CAMERA_SCALE, CAMERA_FOLLOW_SPEED};

#[derive(Debug, Default)]
pub struct CameraPlugin {}

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(ClearColor(Color::rgb(0.92, 0.94, 0.96)))
            .add_systems(Startup, spawn_camera)
            .add_systems(Update, follow_player_with_camera);
    }
}

fn spawn_camera(mut commands: Commands) {
    let mut camera = Camera2dBundle::default();
    camera.projection.scale = CAMERA_SCALE;

    commands.spawn(camera);
}

pub fn follow_player_with_camera(
    q_player: Query<&Transform, (With<Player>, Without<Camera>)>,
    mut q_camera: Query<&mut Transform, With<Camera>>,
    time: Res<Time>,
) {
    let Ok(player) = q_player.get_single() else {
        return;
    };

    let Ok(mut camera) = q_camera.get_single_mut() else {
        return;
    };

    let target = player.translation.truncate();
    let current = camera.translation.truncate();
    let blend = (CAMERA_FOLLOW_SPEED * time.delta_seconds()).min(1.0);
    let next = current.lerp(target, blend);

    camera.translation.x = next.x;
    camera.translation.y = next.y;
}
