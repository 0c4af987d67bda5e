use bevy::prelude::{Query, Vec2};
use bevy_rapier2d::prelude::{ExternalForce, Velocity};
use sr_common::components::{
    ground_detector::GroundDetector, input::PlayerInput, jump::Jump, platform::MovingPlatform,
    player::Player,
};

/// Grounded velocity: input plus the host platform's horizontal motion. The
/// vertical part is left to the physics, the body already rides the platform.
pub fn movement_velocity(move_axis: f32, move_speed: f32, platform_velocity: Vec2, current: Vec2) -> Vec2 {
    Vec2::new(move_axis * move_speed + platform_velocity.x, current.y)
}

/// Pushes into the surface along its normal.
pub fn stick_force(slope_normal: Vec2, strength: f32) -> Vec2 {
    -slope_normal * strength
}

pub fn handle_movement(
    mut q_player: Query<(&Player, &PlayerInput, &GroundDetector, &mut Jump, &mut Velocity, &mut ExternalForce)>,
    q_platforms: Query<&MovingPlatform>,
) {
    for (player, input, ground_detector, mut jump, mut velocity, mut external_force) in q_player.iter_mut() {
        external_force.force = Vec2::ZERO;

        if jump.skip_next_move {
            jump.skip_next_move = false;
            continue;
        }

        if !ground_detector.grounded() {
            continue;
        }

        let platform_velocity = ground_detector.platform
            .and_then(|platform| q_platforms.get(platform).ok())
            .map(|platform| platform.velocity)
            .unwrap_or(Vec2::ZERO);

        velocity.linvel = movement_velocity(input.move_axis, player.move_speed, platform_velocity, velocity.linvel);
        external_force.force = stick_force(ground_detector.slope_normal, player.stick_to_ground_force);
    }
}
