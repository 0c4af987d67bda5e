use bevy::{prelude::EventReader, log::debug};
use sr_common::events::{GroundTransition, Jumped};

pub fn log_movement_events(
    mut ev_transitions: EventReader<GroundTransition>,
    mut ev_jumped: EventReader<Jumped>,
) {
    for transition in ev_transitions.iter() {
        match transition {
            GroundTransition::Landed { entity, impact_speed } => {
                debug!("{:?} landed at {:.2} m/s", entity, impact_speed);
            }
            GroundTransition::LeftGround { entity } => {
                debug!("{:?} left the ground", entity);
            }
        }
    }

    for jumped in ev_jumped.iter() {
        debug!("{:?} jumped", jumped.entity);
    }
}
