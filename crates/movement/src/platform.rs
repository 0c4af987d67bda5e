use bevy::{prelude::{Query, Res, Transform}, time::fixed_timestep::FixedTime};
use sr_common::components::platform::MovingPlatform;

/// Moves kinematic platforms for this physics step and records their velocity.
pub fn move_platforms(
    mut q_platforms: Query<(&mut MovingPlatform, &mut Transform)>,
    fixed_time: Res<FixedTime>,
) {
    let dt = fixed_time.period.as_secs_f32();

    for (mut platform, mut transform) in q_platforms.iter_mut() {
        let position = platform.step(transform.translation.truncate(), dt);

        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}

#[cfg(test)]
mod tests {
    use bevy::prelude::{App, Update, Vec2, Vec3};

    use super::*;

    #[test]
    fn platform_moves_along_its_path() {
        let mut app = App::new();
        app.insert_resource(FixedTime::new_from_secs(0.1));
        app.add_systems(Update, move_platforms);

        let platform = app.world.spawn((
            MovingPlatform::new(Vec2::X, 3.0, 0.5),
            Transform::from_xyz(2.0, 1.0, 0.0),
        )).id();

        app.update();
        app.update();

        let transform = app.world.get::<Transform>(platform).unwrap();
        assert!((transform.translation - Vec3::new(2.3, 1.0, 0.0)).length() < 1e-4);

        let platform = app.world.get::<MovingPlatform>(platform).unwrap();
        assert_eq!(platform.start, Some(Vec2::new(2.0, 1.0)));
        assert!((platform.velocity - Vec2::new(1.5, 0.0)).length() < 1e-3);
    }

    #[test]
    fn vertical_platform_keeps_depth() {
        let mut app = App::new();
        app.insert_resource(FixedTime::new_from_secs(0.05));
        app.add_systems(Update, move_platforms);

        let platform = app.world.spawn((
            MovingPlatform::new(Vec2::Y, 2.0, 1.0),
            Transform::from_xyz(0.0, 0.0, 3.0),
        )).id();

        app.update();

        let transform = app.world.get::<Transform>(platform).unwrap();
        assert_eq!(transform.translation.z, 3.0);
        assert!(transform.translation.y > 0.0);
    }
}
