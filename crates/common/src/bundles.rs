use bevy::prelude::{Bundle, Vec2};
use bevy_rapier2d::prelude::{
    Collider, ColliderMassProperties, CollisionGroups, ExternalForce, ExternalImpulse, Friction,
    LockedAxes, RigidBody, Velocity,
};
use sr_util::constants::{PLAYER_FRICTION, PLAYER_HALF_HEIGHT, PLAYER_HALF_WIDTH, PLAYER_MASS};

use crate::{
    components::{
        ground_detector::GroundDetector, input::PlayerInput, jump::Jump,
        platform::MovingPlatform, player::Player,
    },
    layers::{ground_groups, player_groups},
    settings::ControllerSettings,
};

/// Physics and controller state of the player. Transform and visuals are added by the spawner.
#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: Player,
    pub input: PlayerInput,
    pub jump: Jump,
    pub ground_detector: GroundDetector,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub mass: ColliderMassProperties,
    pub groups: CollisionGroups,
    pub friction: Friction,
    pub locked_axes: LockedAxes,
    pub velocity: Velocity,
    pub external_force: ExternalForce,
    pub external_impulse: ExternalImpulse,
}

impl PlayerBundle {
    pub fn new(settings: &ControllerSettings) -> Self {
        Self {
            player: Player::from_settings(settings),
            input: PlayerInput::default(),
            jump: Jump::default(),
            ground_detector: GroundDetector::default(),
            rigid_body: RigidBody::Dynamic,
            collider: Collider::capsule_y(PLAYER_HALF_HEIGHT - PLAYER_HALF_WIDTH, PLAYER_HALF_WIDTH),
            mass: ColliderMassProperties::Mass(PLAYER_MASS),
            groups: player_groups(),
            friction: Friction::coefficient(PLAYER_FRICTION),
            locked_axes: LockedAxes::ROTATION_LOCKED,
            velocity: Velocity::zero(),
            external_force: ExternalForce::default(),
            external_impulse: ExternalImpulse::default(),
        }
    }
}

impl Default for PlayerBundle {
    fn default() -> Self {
        Self::new(&ControllerSettings::default())
    }
}

#[derive(Bundle)]
pub struct MovingPlatformBundle {
    pub platform: MovingPlatform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub groups: CollisionGroups,
}

impl MovingPlatformBundle {
    pub fn new(platform: MovingPlatform, half_size: Vec2) -> Self {
        Self {
            platform,
            rigid_body: RigidBody::KinematicPositionBased,
            collider: Collider::cuboid(half_size.x, half_size.y),
            groups: ground_groups(),
        }
    }
}

/// Static level geometry on the ground layer.
#[derive(Bundle)]
pub struct GroundBundle {
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub groups: CollisionGroups,
}

impl GroundBundle {
    pub fn new(collider: Collider) -> Self {
        Self {
            rigid_body: RigidBody::Fixed,
            collider,
            groups: ground_groups(),
        }
    }
}
