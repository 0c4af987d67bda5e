pub const WINDOW_TITLE: &str = "Slope Runner";
pub const INITIAL_WINDOW_WIDTH: f32 = 1024.0;
pub const INITIAL_WINDOW_HEIGHT: f32 = 768.0;

// World units are meters, the camera zooms in on them.
pub const CAMERA_SCALE: f32 = 1.0 / 48.0;
pub const CAMERA_FOLLOW_SPEED: f32 = 5.0;

pub const PHYSICS_HZ: f64 = 60.0;
pub const GRAVITY: f32 = -9.81;

pub const PLAYER_HALF_WIDTH: f32 = 0.3;
pub const PLAYER_HALF_HEIGHT: f32 = 0.5;
pub const PLAYER_MASS: f32 = 1.0;
pub const PLAYER_FRICTION: f32 = 0.4;
pub const PLAYER_MOVE_SPEED: f32 = 8.0;
pub const PLAYER_JUMP_FORCE: f32 = 12.0;

pub const GROUND_CHECK_RADIUS: f32 = 0.15;
pub const GROUND_CHECK_RAY_LENGTH: f32 = 0.6;
pub const STICK_TO_GROUND_FORCE: f32 = 20.0;
pub const MAX_SLOPE_ANGLE: f32 = 60.0;

pub const PLATFORM_MOVE_DISTANCE: f32 = 3.0;
pub const PLATFORM_SPEED: f32 = 2.0;

pub const SETTINGS_DIR_NAME: &str = "slope-runner";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const PLAYER_SPAWN_X: f32 = -6.0;
pub const PLAYER_SPAWN_Y: f32 = 2.0;
pub const RESPAWN_BELOW_Y: f32 = -20.0;
