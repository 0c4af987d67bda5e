use bevy::{prelude::{Component, ReflectComponent}, reflect::Reflect};
use bevy_inspector_egui::{InspectorOptions, prelude::ReflectInspectorOptions};

#[derive(Component, InspectorOptions, Default, Reflect, Debug)]
#[reflect(Component, InspectorOptions)]
pub struct Jump {
    /// Set by input, consumed by the next physics step whether or not it jumps.
    pub requested: bool,
    /// Movement is skipped for one physics step after a jump, otherwise the
    /// stick force pulls the player back onto the slope.
    pub skip_next_move: bool,
}

impl Jump {
    pub fn take_request(&mut self) -> bool {
        std::mem::take(&mut self.requested)
    }
}
