use bevy::prelude::{Query, Res, Input, KeyCode};
use sr_common::components::{input::PlayerInput, jump::Jump};

pub const LEFT_KEYS: [KeyCode; 2] = [KeyCode::Left, KeyCode::A];
pub const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::Right, KeyCode::D];
pub const JUMP_KEYS: [KeyCode; 3] = [KeyCode::Space, KeyCode::W, KeyCode::Up];

/// Raw axis, no smoothing. Opposite keys cancel out.
pub fn horizontal_axis(left: bool, right: bool) -> f32 {
    let mut axis = 0.0;

    if left {
        axis -= 1.0;
    }

    if right {
        axis += 1.0;
    }

    axis
}

pub fn read_player_input(
    mut q_player: Query<(&mut PlayerInput, &mut Jump)>,
    keyboard_input: Res<Input<KeyCode>>,
) {
    let move_axis = horizontal_axis(
        keyboard_input.any_pressed(LEFT_KEYS),
        keyboard_input.any_pressed(RIGHT_KEYS),
    );
    let jump_pressed = keyboard_input.any_just_pressed(JUMP_KEYS);

    for (mut input, mut jump) in q_player.iter_mut() {
        input.move_axis = move_axis;

        if jump_pressed {
            jump.requested = true;
        }
    }
}
