pub mod ground_detector;
pub mod input;
pub mod jump;
pub mod platform;
pub mod player;
