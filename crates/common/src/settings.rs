use bevy::{prelude::{Resource, ReflectResource}, reflect::Reflect};
use serde::{Deserialize, Serialize};
use sr_util::constants::{
    MAX_SLOPE_ANGLE, PHYSICS_HZ, PLAYER_JUMP_FORCE, PLAYER_MOVE_SPEED, STICK_TO_GROUND_FORCE,
};
use thiserror::Error;

/// Player tuning and debug switches, persisted between runs.
#[derive(Resource, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Resource)]
#[serde(default)]
pub struct ControllerSettings {
    pub move_speed: f32,
    pub jump_force: f32,
    pub stick_to_ground_force: f32,
    pub max_slope_angle: f32,
    pub physics_hz: f64,
    pub show_gizmos: bool,
    pub physics_debug_render: bool,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        ControllerSettings {
            move_speed: PLAYER_MOVE_SPEED,
            jump_force: PLAYER_JUMP_FORCE,
            stick_to_ground_force: STICK_TO_GROUND_FORCE,
            max_slope_angle: MAX_SLOPE_ANGLE,
            physics_hz: PHYSICS_HZ,
            show_gizmos: true,
            physics_debug_render: false,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("{field} must be a finite, non-negative number, got {value}")]
    InvalidValue { field: &'static str, value: f32 },
    #[error("max_slope_angle must be within 0..=90 degrees, got {0}")]
    SlopeAngleOutOfRange(f32),
    #[error("physics_hz must be positive, got {0}")]
    InvalidPhysicsRate(f64),
}

impl ControllerSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (field, value) in [
            ("move_speed", self.move_speed),
            ("jump_force", self.jump_force),
            ("stick_to_ground_force", self.stick_to_ground_force),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::InvalidValue { field, value });
            }
        }

        if !(0.0..=90.0).contains(&self.max_slope_angle) {
            return Err(SettingsError::SlopeAngleOutOfRange(self.max_slope_angle));
        }

        if !self.physics_hz.is_finite() || self.physics_hz <= 0.0 {
            return Err(SettingsError::InvalidPhysicsRate(self.physics_hz));
        }

        Ok(())
    }

    /// Returns these settings if valid, the defaults together with the reason otherwise.
    pub fn or_default(self) -> (Self, Option<SettingsError>) {
        match self.validate() {
            Ok(()) => (self, None),
            Err(error) => (Self::default(), Some(error)),
        }
    }

    pub fn physics_period(&self) -> f32 {
        (1.0 / self.physics_hz) as f32
    }
}
