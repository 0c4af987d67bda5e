use bevy::prelude::{Query, Res, ResMut, Input, KeyCode, Transform, Gizmos, Color, With};
use sr_common::{
    components::{ground_detector::GroundDetector, platform::MovingPlatform, player::Player},
    settings::ControllerSettings,
};

pub const GIZMO_TOGGLE_KEY: KeyCode = KeyCode::F1;

pub fn toggle_gizmos(
    keyboard_input: Res<Input<KeyCode>>,
    mut settings: ResMut<ControllerSettings>,
) {
    if keyboard_input.just_pressed(GIZMO_TOGGLE_KEY) {
        settings.show_gizmos = !settings.show_gizmos;
    }
}

/// Feet sensor in green, sampled slope normal in blue.
pub fn draw_ground_gizmos(
    q_player: Query<(&Transform, &GroundDetector), With<Player>>,
    settings: Res<ControllerSettings>,
    mut gizmos: Gizmos,
) {
    if !settings.show_gizmos {
        return;
    }

    for (transform, ground_detector) in q_player.iter() {
        let feet = transform.translation.truncate() + ground_detector.offset;

        gizmos.circle_2d(feet, ground_detector.radius, Color::GREEN);
        gizmos.line_2d(feet, feet + ground_detector.slope_normal, Color::BLUE);
    }
}

pub fn draw_platform_paths(
    q_platforms: Query<&MovingPlatform>,
    settings: Res<ControllerSettings>,
    mut gizmos: Gizmos,
) {
    if !settings.show_gizmos {
        return;
    }

    for platform in q_platforms.iter() {
        if let Some(start) = platform.start {
            gizmos.line_2d(start, platform.target(start), Color::GRAY);
        }
    }
}
