use bevy::prelude::{Component, Entity, Vec2};
use sr_util::constants::{GROUND_CHECK_RADIUS, GROUND_CHECK_RAY_LENGTH, PLAYER_HALF_HEIGHT};

/// Feet sensor of a character: a small circle overlap plus a downward ray
/// that samples the slope normal.
#[derive(Debug, Component)]
pub struct GroundDetector {
    /// Feet point relative to the body origin.
    pub offset: Vec2,
    pub radius: f32,
    pub ray_length: f32,
    pub is_on_ground: WithPrevious<bool>,
    pub slope_normal: Vec2,
    pub platform: Option<Entity>,
    /// Vertical speed at the moment of the last landing.
    pub landing_speed: f32,
    /// Set by a jump until the body is clear of the ground or starts falling.
    pub taking_off: bool,
}

impl Default for GroundDetector {
    fn default() -> Self {
        Self {
            offset: Vec2::new(0.0, -PLAYER_HALF_HEIGHT),
            radius: GROUND_CHECK_RADIUS,
            ray_length: GROUND_CHECK_RAY_LENGTH,
            is_on_ground: WithPrevious::new(false),
            slope_normal: Vec2::Y,
            platform: None,
            landing_speed: 0.0,
            taking_off: false,
        }
    }
}

impl GroundDetector {
    pub fn grounded(&self) -> bool {
        self.is_on_ground.current
    }

    pub fn just_landed(&self) -> bool {
        self.is_on_ground.current && !self.is_on_ground.is_same_as_previous()
    }

    pub fn just_left(&self) -> bool {
        !self.is_on_ground.current && !self.is_on_ground.is_same_as_previous()
    }

    /// Drops ground state without waiting for the next check.
    pub fn clear_ground(&mut self) {
        self.is_on_ground.update_value(false);
        self.platform = None;
    }

    pub fn take_off(&mut self) {
        self.clear_ground();
        self.taking_off = true;
    }

    /// Ground touched while still rising from a jump is not a landing.
    pub fn resolve_takeoff(&mut self, contact: GroundContact, vertical_speed: f32) -> GroundContact {
        if self.taking_off && (contact == GroundContact::Airborne || vertical_speed <= 0.0) {
            self.taking_off = false;
        }

        if self.taking_off {
            GroundContact::Airborne
        } else {
            contact
        }
    }

    pub fn apply(&mut self, contact: GroundContact) {
        match contact {
            GroundContact::Grounded { normal, platform } => {
                self.is_on_ground.update_value(true);
                self.slope_normal = normal;
                self.platform = platform;
            }
            GroundContact::Steep { normal } => {
                self.is_on_ground.update_value(false);
                self.slope_normal = normal;
                self.platform = None;
            }
            GroundContact::Airborne => {
                self.is_on_ground.update_value(false);
                self.slope_normal = Vec2::Y;
                self.platform = None;
            }
        }
    }
}

/// Outcome of one ground check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroundContact {
    Airborne,
    Grounded { normal: Vec2, platform: Option<Entity> },
    /// Touching something too steep to stand on.
    Steep { normal: Vec2 },
}

/// Angle between `normal` and up, in degrees.
pub fn slope_angle(normal: Vec2) -> f32 {
    if normal == Vec2::ZERO {
        return 0.0;
    }

    normal.angle_between(Vec2::Y).abs().to_degrees()
}

/// Classifies a ground check. `normal` is the slope normal to use when
/// `overlapping` is set.
pub fn classify_ground(
    overlapping: bool,
    normal: Vec2,
    platform: Option<Entity>,
    max_slope_angle: f32,
) -> GroundContact {
    if !overlapping {
        return GroundContact::Airborne;
    }

    let normal = normal.try_normalize().unwrap_or(Vec2::Y);

    if slope_angle(normal) > max_slope_angle {
        return GroundContact::Steep { normal };
    }

    GroundContact::Grounded { normal, platform }
}

#[derive(Debug, Default)]
pub struct WithPrevious<T> {
    pub current: T,
    pub previous: Option<T>
}

impl<T> WithPrevious<T> {
    pub fn new(initial_value: T) -> WithPrevious<T> {
        WithPrevious {
            current: initial_value,
            previous: None,
        }
    }

    pub fn update_value(&mut self, new_value: T)
    where T: Clone, {
        self.previous = Some(self.current.clone());
        self.current = new_value;
    }

    pub fn is_same_as_previous(&self) -> bool
    where T: PartialEq {
        match &self.previous {
            Some(previous) => previous == &self.current,
            None => false,
        }
    }
}
