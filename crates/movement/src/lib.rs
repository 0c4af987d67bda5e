use bevy::{prelude::{Plugin, App, Update, FixedUpdate, IntoSystemConfigs}, ecs::schedule::SystemConfigs};
use bevy_rapier2d::prelude::PhysicsSet;
use gizmos::{toggle_gizmos, draw_ground_gizmos, draw_platform_paths};
use ground::check_ground;
use horizontal::handle_movement;
use input::read_player_input;
use jumping::apply_jump;
use platform::move_platforms;
use report::log_movement_events;

pub mod gizmos;
pub mod ground;
pub mod horizontal;
pub mod input;
pub mod jumping;
pub mod platform;
pub mod report;

#[derive(Debug, Default)]
pub struct MovementPlugin {}

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_systems(Update, (
                read_player_input,
                toggle_gizmos,
                draw_ground_gizmos,
                draw_platform_paths,
                log_movement_events,
            ))
            .add_systems(FixedUpdate, fixed_step_systems());
    }
}

/// Per physics step: platforms move, then ground check, jump and movement, then rapier.
pub fn fixed_step_systems() -> SystemConfigs {
    (
        move_platforms,
        check_ground,
        apply_jump,
        handle_movement,
    ).chain().before(PhysicsSet::SyncBackend)
}
