use bevy::{prelude::{Component, ReflectComponent, Vec2}, reflect::Reflect};
use sr_util::constants::{PLATFORM_MOVE_DISTANCE, PLATFORM_SPEED};

/// Kinematic platform oscillating between `start` and `target()`.
#[derive(Component, Clone, Debug, Reflect)]
#[reflect(Component)]
pub struct MovingPlatform {
    pub direction: Vec2,
    pub distance: f32,
    /// Round trips are `2 / speed` seconds long.
    pub speed: f32,
    pub start: Option<Vec2>,
    pub last_position: Vec2,
    pub elapsed: f32,
    /// Velocity over the last physics step.
    pub velocity: Vec2,
}

impl Default for MovingPlatform {
    fn default() -> Self {
        Self {
            direction: Vec2::X,
            distance: PLATFORM_MOVE_DISTANCE,
            speed: PLATFORM_SPEED,
            start: None,
            last_position: Vec2::ZERO,
            elapsed: 0.0,
            velocity: Vec2::ZERO,
        }
    }
}

impl MovingPlatform {
    pub fn new(direction: Vec2, distance: f32, speed: f32) -> Self {
        Self {
            direction,
            distance,
            speed,
            ..Default::default()
        }
    }

    pub fn anchored_at(mut self, start: Vec2) -> Self {
        self.start = Some(start);
        self.last_position = start;
        self
    }

    pub fn target(&self, start: Vec2) -> Vec2 {
        start + self.direction.normalize_or_zero() * self.distance
    }

    pub fn position_at(&self, start: Vec2, time: f32) -> Vec2 {
        let t = ping_pong(time * self.speed, 1.0);
        start.lerp(self.target(start), t)
    }

    /// Advances the platform by `dt` and returns where it should be.
    pub fn step(&mut self, current: Vec2, dt: f32) -> Vec2 {
        let start = match self.start {
            Some(start) => start,
            None => {
                self.start = Some(current);
                self.last_position = current;
                current
            }
        };

        self.elapsed += dt;
        let position = self.position_at(start, self.elapsed);

        if dt > 0.0 {
            self.velocity = (position - self.last_position) / dt;
        }

        self.last_position = position;
        position
    }
}

/// Triangle wave going 0 -> `length` -> 0 over `2 * length`.
pub fn ping_pong(t: f32, length: f32) -> f32 {
    if length <= 0.0 {
        return 0.0;
    }

    let period = length * 2.0;
    let t = t.abs().rem_euclid(period);

    if t > length {
        period - t
    } else {
        t
    }
}
