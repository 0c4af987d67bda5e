use bevy::prelude::{Plugin, App};
use components::{jump::Jump, platform::MovingPlatform, player::Player, input::PlayerInput};
use events::{GroundTransition, Jumped};
use settings::ControllerSettings;

pub mod bundles;
pub mod components;
pub mod events;
pub mod layers;
pub mod settings;

#[derive(Debug, Default)]
pub struct CommonPlugin {}

impl Plugin for CommonPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<ControllerSettings>()
            .add_event::<GroundTransition>()
            .add_event::<Jumped>()
            .register_type::<Player>()
            .register_type::<PlayerInput>()
            .register_type::<Jump>()
            .register_type::<MovingPlatform>()
            .register_type::<ControllerSettings>();
    }
}
