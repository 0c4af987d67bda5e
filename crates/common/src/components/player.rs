use bevy::{prelude::{Component, ReflectComponent}, reflect::Reflect};
use bevy_inspector_egui::{InspectorOptions, prelude::ReflectInspectorOptions};

use crate::settings::ControllerSettings;

#[derive(Component, InspectorOptions, Reflect, Debug, Clone)]
#[reflect(Component, InspectorOptions)]
pub struct Player {
    pub move_speed: f32,
    pub jump_force: f32,
    pub stick_to_ground_force: f32,
    /// Degrees. Ground steeper than this does not count as ground.
    #[inspector(min = 0.0, max = 90.0)]
    pub max_slope_angle: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self::from_settings(&ControllerSettings::default())
    }
}

impl Player {
    pub fn from_settings(settings: &ControllerSettings) -> Self {
        Self {
            move_speed: settings.move_speed,
            jump_force: settings.jump_force,
            stick_to_ground_force: settings.stick_to_ground_force,
            max_slope_angle: settings.max_slope_angle,
        }
    }
}
