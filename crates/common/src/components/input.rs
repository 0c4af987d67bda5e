use bevy::{prelude::Component, reflect::Reflect};

/// Raw horizontal axis sampled once per frame, read by the fixed step.
#[derive(Component, Debug, Default, Clone, Copy, Reflect)]
pub struct PlayerInput {
    pub move_axis: f32,
}
