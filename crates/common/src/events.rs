use bevy::prelude::{Entity, Event};

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum GroundTransition {
    Landed { entity: Entity, impact_speed: f32 },
    LeftGround { entity: Entity },
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct Jumped {
    pub entity: Entity,
}
