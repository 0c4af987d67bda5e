use bevy::prelude::{Entity, EventWriter, Query, Res, Transform, Vec2, With};
use bevy_rapier2d::prelude::{Collider, QueryFilter, RapierContext, Velocity};
use sr_common::{
    components::{
        ground_detector::{classify_ground, GroundContact, GroundDetector},
        platform::MovingPlatform,
        player::Player,
    },
    events::GroundTransition,
    layers::ground_query_groups,
};

/// Scene query filter that only sees ground colliders other than `entity`.
pub fn ground_filter(entity: Entity) -> QueryFilter<'static> {
    QueryFilter::default()
        .exclude_sensors()
        .exclude_collider(entity)
        .exclude_rigid_body(entity)
        .groups(ground_query_groups())
}

pub fn check_ground(
    mut q_player: Query<(Entity, &Transform, &Player, &Velocity, &mut GroundDetector)>,
    q_platforms: Query<(), With<MovingPlatform>>,
    rapier_context: Res<RapierContext>,
    mut ev_transitions: EventWriter<GroundTransition>,
) {
    for (entity, transform, player, velocity, mut detector) in q_player.iter_mut() {
        let feet = transform.translation.truncate() + detector.offset;
        let filter = ground_filter(entity);
        let shape = Collider::ball(detector.radius);

        let contact = match rapier_context.intersection_with_shape(feet, 0.0, &shape, filter) {
            Some(ground) => {
                let platform = q_platforms.contains(ground).then_some(ground);

                // A miss keeps the last sampled normal, e.g. when hanging over a ledge.
                let normal = rapier_context
                    .cast_ray_and_get_normal(feet, Vec2::NEG_Y, detector.ray_length, true, filter)
                    .map(|(_, hit)| hit.normal)
                    .unwrap_or(detector.slope_normal);

                classify_ground(true, normal, platform, player.max_slope_angle)
            }
            None => GroundContact::Airborne,
        };

        let contact = detector.resolve_takeoff(contact, velocity.linvel.y);
        detector.apply(contact);

        if detector.just_landed() {
            detector.landing_speed = velocity.linvel.y;
            ev_transitions.send(GroundTransition::Landed {
                entity,
                impact_speed: detector.landing_speed,
            });
        } else if detector.just_left() {
            ev_transitions.send(GroundTransition::LeftGround { entity });
        }
    }
}
