use bevy::prelude::{Entity, EventWriter, Query, Vec2};
use bevy_rapier2d::prelude::{ExternalImpulse, Velocity};
use sr_common::{
    components::{ground_detector::GroundDetector, jump::Jump, player::Player},
    events::{GroundTransition, Jumped},
};

/// Consumes buffered jump requests. Only grounded players jump, others lose the request.
pub fn apply_jump(
    mut q_player: Query<(Entity, &Player, &mut Jump, &mut GroundDetector, &mut Velocity, &mut ExternalImpulse)>,
    mut ev_jumped: EventWriter<Jumped>,
    mut ev_transitions: EventWriter<GroundTransition>,
) {
    for (entity, player, mut jump, mut ground_detector, mut velocity, mut impulse) in q_player.iter_mut() {
        if !jump.take_request() || !ground_detector.grounded() {
            continue;
        }

        jump.skip_next_move = true;
        ground_detector.take_off();

        velocity.linvel.y = 0.0;
        impulse.impulse = Vec2::Y * player.jump_force;

        ev_jumped.send(Jumped { entity });
        ev_transitions.send(GroundTransition::LeftGround { entity });
    }
}

#[cfg(test)]
mod tests {
    use bevy::prelude::{App, Events, Update};
    use sr_common::components::ground_detector::GroundContact;

    use super::*;

    fn jump_app() -> App {
        let mut app = App::new();
        app.add_event::<Jumped>();
        app.add_event::<GroundTransition>();
        app.add_systems(Update, apply_jump);
        app
    }

    fn spawn_player(app: &mut App, grounded: bool, linvel: Vec2) -> Entity {
        let mut ground_detector = GroundDetector::default();
        if grounded {
            ground_detector.apply(GroundContact::Grounded { normal: Vec2::Y, platform: Some(Entity::from_raw(99)) });
        }

        app.world.spawn((
            Player::default(),
            Jump { requested: true, ..Default::default() },
            ground_detector,
            Velocity::linear(linvel),
            ExternalImpulse::default(),
        )).id()
    }

    #[test]
    fn grounded_jump_resets_vertical_speed_and_pushes_up() {
        let mut app = jump_app();
        let player = spawn_player(&mut app, true, Vec2::new(3.0, -2.0));

        app.update();

        let velocity = app.world.get::<Velocity>(player).unwrap();
        assert_eq!(velocity.linvel, Vec2::new(3.0, 0.0));

        let impulse = app.world.get::<ExternalImpulse>(player).unwrap();
        assert_eq!(impulse.impulse, Vec2::Y * Player::default().jump_force);

        let jump = app.world.get::<Jump>(player).unwrap();
        assert!(jump.skip_next_move);
        assert!(!jump.requested);

        let ground_detector = app.world.get::<GroundDetector>(player).unwrap();
        assert!(!ground_detector.grounded());
        assert!(ground_detector.platform.is_none());
        assert!(ground_detector.taking_off);

        assert_eq!(app.world.resource::<Events<Jumped>>().len(), 1);

        let transitions: Vec<_> = app.world.resource::<Events<GroundTransition>>()
            .iter_current_update_events()
            .copied()
            .collect();
        assert_eq!(transitions, vec![GroundTransition::LeftGround { entity: player }]);
    }

    #[test]
    fn airborne_request_is_dropped() {
        let mut app = jump_app();
        let player = spawn_player(&mut app, false, Vec2::new(1.0, -4.0));

        app.update();

        let jump = app.world.get::<Jump>(player).unwrap();
        assert!(!jump.requested);
        assert!(!jump.skip_next_move);
        assert_eq!(app.world.get::<Velocity>(player).unwrap().linvel, Vec2::new(1.0, -4.0));
        assert_eq!(app.world.get::<ExternalImpulse>(player).unwrap().impulse, Vec2::ZERO);
        assert!(app.world.resource::<Events<Jumped>>().is_empty());
        assert!(app.world.resource::<Events<GroundTransition>>().is_empty());
    }
}
