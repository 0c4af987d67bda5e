use std::time::Duration;

use bevy::{prelude::{Plugin, App, Startup, Update, Res, ResMut, Input, KeyCode, Vec2, default}, time::fixed_timestep::FixedTime, log::info};
use bevy_rapier2d::{prelude::{RapierPhysicsPlugin, NoUserData, RapierConfiguration, TimestepMode}, render::{RapierDebugRenderPlugin, DebugRenderContext}};
use sr_common::settings::ControllerSettings;
use sr_util::constants::GRAVITY;

pub const DEBUG_RENDER_TOGGLE_KEY: KeyCode = KeyCode::F2;

/// Rapier stepping inside `FixedUpdate`, world units in meters.
#[derive(Debug, Default)]
pub struct PhysicsPlugin {}

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app
        .add_plugins(RapierDebugRenderPlugin {
            enabled: false,
            ..default()
        })
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
        .add_systems(Startup, configure_physics)
        .add_systems(Update, toggle_debug_render);
    }
}

pub fn configure_physics(
    settings: Res<ControllerSettings>,
    mut fixed_time: ResMut<FixedTime>,
    mut rapier_config: ResMut<RapierConfiguration>,
    mut debug_render: ResMut<DebugRenderContext>,
) {
    let dt = settings.physics_period();

    fixed_time.period = Duration::from_secs_f32(dt);
    rapier_config.gravity = Vec2::new(0.0, GRAVITY);
    rapier_config.timestep_mode = TimestepMode::Fixed { dt, substeps: 1 };
    debug_render.enabled = settings.physics_debug_render;

    info!("physics stepping at {:.1} Hz", settings.physics_hz);
}

fn toggle_debug_render(
    keyboard_input: Res<Input<KeyCode>>,
    mut debug_render: ResMut<DebugRenderContext>,
) {
    if keyboard_input.just_pressed(DEBUG_RENDER_TOGGLE_KEY) {
        debug_render.enabled = !debug_render.enabled;
    }
}
