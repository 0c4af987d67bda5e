use bevy::{prelude::{Commands, Query, Res, EventWriter, Entity, Input, KeyCode, Transform, Vec2, Vec3, Color, With, SpatialBundle, SpriteBundle, Sprite, BuildChildren, default}, log::info};
use bevy_prototype_lyon::prelude::{ShapeBundle, GeometryBuilder, Fill, Stroke, shapes};
use bevy_rapier2d::prelude::{Collider, Velocity};
use sr_common::{
    bundles::{GroundBundle, MovingPlatformBundle, PlayerBundle},
    components::{ground_detector::GroundDetector, platform::MovingPlatform, player::Player},
    events::GroundTransition,
    settings::ControllerSettings,
};
use sr_util::constants::{PLAYER_HALF_HEIGHT, PLAYER_HALF_WIDTH, PLAYER_SPAWN_X, PLAYER_SPAWN_Y, RESPAWN_BELOW_Y};

const GROUND_COLOR: Color = Color::rgb(0.35, 0.38, 0.42);
const STEEP_COLOR: Color = Color::rgb(0.62, 0.33, 0.30);
const PLATFORM_COLOR: Color = Color::rgb(0.25, 0.55, 0.75);
const PLAYER_COLOR: Color = Color::rgb(0.95, 0.65, 0.2);

fn spawn_block(commands: &mut Commands, center: Vec2, half_size: Vec2) {
    commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                color: GROUND_COLOR,
                custom_size: Some(half_size * 2.0),
                ..default()
            },
            transform: Transform::from_translation(center.extend(0.0)),
            ..default()
        },
        GroundBundle::new(Collider::cuboid(half_size.x, half_size.y)),
    ));
}

/// Right-angled ramp rising from `foot` to `foot + (run, rise)`, in world coordinates.
fn spawn_ramp(commands: &mut Commands, foot: Vec2, run: f32, rise: f32, color: Color) {
    let top = foot + Vec2::new(run, rise);
    let corner = Vec2::new(top.x, foot.y);

    let polygon = shapes::Polygon {
        points: vec![foot, corner, top],
        closed: true,
    };

    commands.spawn((
        ShapeBundle {
            path: GeometryBuilder::build_as(&polygon),
            ..default()
        },
        Fill::color(color),
        Stroke::new(Color::BLACK, 0.03),
        GroundBundle::new(Collider::triangle(foot, corner, top)),
    ));
}

fn spawn_moving_platform(commands: &mut Commands, start: Vec2, half_size: Vec2, platform: MovingPlatform) {
    commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                color: PLATFORM_COLOR,
                custom_size: Some(half_size * 2.0),
                ..default()
            },
            transform: Transform::from_translation(start.extend(0.0)),
            ..default()
        },
        MovingPlatformBundle::new(platform.anchored_at(start), half_size),
    ));
}

pub fn spawn_level(mut commands: Commands) {
    // floor
    spawn_block(&mut commands, Vec2::new(0.0, -0.5), Vec2::new(12.0, 0.5));

    // 30 degree ramp up to a ledge
    spawn_ramp(&mut commands, Vec2::new(2.0, 0.0), 4.0, 4.0 * 30f32.to_radians().tan(), GROUND_COLOR);
    spawn_block(&mut commands, Vec2::new(8.0, 1.155), Vec2::new(2.0, 1.155));

    // 70 degree wall, too steep to stand on
    spawn_ramp(&mut commands, Vec2::new(-12.0, 0.0), -1.5, 1.5 * 70f32.to_radians().tan(), STEEP_COLOR);

    // far side, reachable by platforms only
    spawn_block(&mut commands, Vec2::new(24.0, 1.5), Vec2::new(4.0, 0.5));

    spawn_moving_platform(
        &mut commands,
        Vec2::new(11.0, 2.0),
        Vec2::new(1.25, 0.2),
        MovingPlatform::new(Vec2::X, 6.0, 0.25),
    );
    spawn_moving_platform(
        &mut commands,
        Vec2::new(-4.0, 0.5),
        Vec2::new(1.0, 0.2),
        MovingPlatform::new(Vec2::Y, 3.0, 0.3),
    );

    info!("level spawned");
}

pub fn spawn_player(
    mut commands: Commands,
    settings: Res<ControllerSettings>,
) {
    commands.spawn((
        SpatialBundle::from_transform(Transform::from_xyz(PLAYER_SPAWN_X, PLAYER_SPAWN_Y, 1.0)),
        PlayerBundle::new(&settings),
    )).with_children(|parent| {
        parent.spawn(SpriteBundle {
            sprite: Sprite {
                color: PLAYER_COLOR,
                custom_size: Some(Vec2::new(PLAYER_HALF_WIDTH, PLAYER_HALF_HEIGHT) * 2.0),
                ..default()
            },
            ..default()
        });
    });
}

/// Back to the spawn point on R or after falling off the level.
pub fn respawn_player(
    mut q_player: Query<(Entity, &mut Transform, &mut Velocity, &mut GroundDetector), With<Player>>,
    input: Res<Input<KeyCode>>,
    mut transitions: EventWriter<GroundTransition>,
) {
    for (entity, mut transform, mut velocity, mut ground_detector) in q_player.iter_mut() {
        if !input.just_pressed(KeyCode::R) && transform.translation.y > RESPAWN_BELOW_Y {
            continue;
        }

        transform.translation = Vec3::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y, transform.translation.z);
        *velocity = Velocity::zero();
        ground_detector.clear_ground();

        if ground_detector.just_left() {
            transitions.send(GroundTransition::LeftGround { entity });
        }

        info!("player respawned");
    }
}

#[cfg(test)]
mod tests {
    use bevy::prelude::{App, Events, Update};
    use sr_common::components::ground_detector::GroundContact;

    use super::*;

    fn respawn_app() -> App {
        let mut app = App::new();
        app.init_resource::<Input<KeyCode>>();
        app.add_event::<GroundTransition>();
        app.add_systems(Update, respawn_player);
        app
    }

    #[test]
    fn falling_off_the_level_respawns() {
        let mut app = respawn_app();
        let player = app.world.spawn((
            Player::default(),
            Transform::from_xyz(3.0, RESPAWN_BELOW_Y - 1.0, 1.0),
            Velocity::linear(Vec2::new(0.0, -30.0)),
            GroundDetector::default(),
        )).id();

        app.update();

        let transform = app.world.get::<Transform>(player).unwrap();
        assert_eq!(transform.translation, Vec3::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y, 1.0));
        assert_eq!(app.world.get::<Velocity>(player).unwrap().linvel, Vec2::ZERO);
    }

    #[test]
    fn standing_player_stays_put() {
        let mut app = respawn_app();
        let mut ground_detector = GroundDetector::default();
        ground_detector.apply(GroundContact::Grounded { normal: Vec2::Y, platform: None });

        let player = app.world.spawn((
            Player::default(),
            Transform::from_xyz(3.0, 0.5, 1.0),
            Velocity::zero(),
            ground_detector,
        )).id();

        app.update();

        assert_eq!(app.world.get::<Transform>(player).unwrap().translation, Vec3::new(3.0, 0.5, 1.0));
        assert!(app.world.get::<GroundDetector>(player).unwrap().grounded());
    }

    #[test]
    fn respawning_from_the_ground_reports_leaving_it() {
        let mut app = respawn_app();
        let mut ground_detector = GroundDetector::default();
        ground_detector.apply(GroundContact::Grounded { normal: Vec2::Y, platform: None });

        let player = app.world.spawn((
            Player::default(),
            Transform::from_xyz(3.0, 0.5, 1.0),
            Velocity::zero(),
            ground_detector,
        )).id();

        app.world.resource_mut::<Input<KeyCode>>().press(KeyCode::R);
        app.update();

        assert!(!app.world.get::<GroundDetector>(player).unwrap().grounded());
        let transitions: Vec<_> = app.world.resource::<Events<GroundTransition>>()
            .iter_current_update_events()
            .copied()
            .collect();
        assert_eq!(transitions, vec![GroundTransition::LeftGround { entity: player }]);
    }
}
