use bevy_rapier2d::prelude::{CollisionGroups, Group};

/// Anything the player can stand on.
pub const COLLISION_GROUP_GROUND: Group = Group::GROUP_1;
pub const COLLISION_GROUP_PLAYER: Group = Group::GROUP_2;

pub fn ground_groups() -> CollisionGroups {
    CollisionGroups::new(COLLISION_GROUP_GROUND, Group::ALL)
}

pub fn player_groups() -> CollisionGroups {
    CollisionGroups::new(COLLISION_GROUP_PLAYER, Group::ALL)
}

/// Filter for scene queries that should only see ground.
pub fn ground_query_groups() -> CollisionGroups {
    CollisionGroups::new(Group::ALL, COLLISION_GROUP_GROUND)
}
