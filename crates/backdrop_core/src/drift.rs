//! Bounded drift motion
//!
//! Assets move at a constant per-frame velocity and spin at a constant
//! per-frame angular velocity. When an asset passes the boundary on a bounded
//! axis while still heading outward, that axis's velocity is negated. There is
//! no clamping, gravity, or collision between assets.

use std::f32::consts::PI;

use backdrop_math::{Axis, Vec3};
use rand::Rng;

/// Per-axis reflection thresholds
///
/// `None` leaves an axis unbounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftBounds {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub z: Option<f32>,
}

impl Default for DriftBounds {
    fn default() -> Self {
        Self {
            x: Some(20.0),
            y: Some(15.0),
            z: Some(15.0),
        }
    }
}

impl DriftBounds {
    /// No axis is bounded
    pub const UNBOUNDED: Self = Self { x: None, y: None, z: None };

    /// Create bounds from `[x, y, z]`; non-positive values leave the axis unbounded
    pub fn from_array(bounds: [f32; 3]) -> Self {
        let bound = |b: f32| if b > 0.0 { Some(b) } else { None };
        Self {
            x: bound(bounds[0]),
            y: bound(bounds[1]),
            z: bound(bounds[2]),
        }
    }

    /// Threshold for the given axis
    #[inline]
    pub fn get(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

/// Axes whose velocity was inverted during a step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reflections {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl Reflections {
    /// Whether any axis reflected
    pub fn any(&self) -> bool {
        self.x || self.y || self.z
    }

    fn set(&mut self, axis: Axis) {
        match axis {
            Axis::X => self.x = true,
            Axis::Y => self.y = true,
            Axis::Z => self.z = true,
        }
    }
}

/// Position, orientation and their per-frame rates of change
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DriftBody {
    /// World position
    pub position: Vec3,
    /// Euler rotation in radians (XYZ order)
    pub rotation: Vec3,
    /// Position change per frame
    pub velocity: Vec3,
    /// Rotation change per frame
    pub angular_velocity: Vec3,
}

impl DriftBody {
    /// Create a body at rest at the given position
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Set the linear velocity
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the angular velocity
    pub fn with_angular_velocity(mut self, angular_velocity: Vec3) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Set the rotation
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Advance one frame and reflect off the bounds
    pub fn step(&mut self, bounds: &DriftBounds) -> Reflections {
        self.position += self.velocity;
        self.rotation += self.angular_velocity;

        let mut reflections = Reflections::default();
        for axis in Axis::ALL {
            let Some(limit) = bounds.get(axis) else {
                continue;
            };
            let p = self.position.get(axis);
            let v = self.velocity.get_mut(axis);
            // Only reflect while heading outward so a body past the edge turns once
            if (p > limit && *v > 0.0) || (p < -limit && *v < 0.0) {
                *v = -*v;
                reflections.set(axis);
            }
        }
        reflections
    }
}

/// `-r..=r` spans `2r`, which must stay finite
fn samplable(r: f32) -> bool {
    r.is_finite() && r.abs() <= f32::MAX / 2.0
}

/// Ranges used to scatter newly loaded assets
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterSettings {
    /// Half-size of the spawn cube on every axis
    pub spawn_extent: f32,
    /// Largest per-axis linear speed, in units per frame
    pub max_linear_speed: f32,
    /// Largest per-axis angular speed, in radians per frame
    pub max_angular_speed: f32,
}

impl Default for ScatterSettings {
    fn default() -> Self {
        Self {
            spawn_extent: 12.5,
            max_linear_speed: 0.005,
            max_angular_speed: 0.005,
        }
    }
}

impl ScatterSettings {
    /// Magnitudes of the configured ranges, with values a range cannot be
    /// sampled from (non-finite, or wider than `f32` can span) replaced by the
    /// defaults
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let pick = |value: f32, default: f32| {
            if samplable(value) {
                value.abs()
            } else {
                default
            }
        };
        Self {
            spawn_extent: pick(self.spawn_extent, defaults.spawn_extent),
            max_linear_speed: pick(self.max_linear_speed, defaults.max_linear_speed),
            max_angular_speed: pick(self.max_angular_speed, defaults.max_angular_speed),
        }
    }

    /// Whether every range can be sampled as configured
    pub fn is_valid(&self) -> bool {
        samplable(self.spawn_extent)
            && samplable(self.max_linear_speed)
            && samplable(self.max_angular_speed)
    }

    /// Draw a random body: position in the spawn cube, rotation in `[0, π]`,
    /// velocities within the configured speeds
    pub fn scatter<R: Rng>(&self, rng: &mut R) -> DriftBody {
        let ScatterSettings {
            spawn_extent: extent,
            max_linear_speed: linear,
            max_angular_speed: angular,
        } = self.sanitized();

        let mut sample = |r: f32| {
            Vec3::new(
                rng.random_range(-r..=r),
                rng.random_range(-r..=r),
                rng.random_range(-r..=r),
            )
        };
        let position = sample(extent);
        let velocity = sample(linear);
        let angular_velocity = sample(angular);
        let rotation = Vec3::new(
            rng.random_range(0.0..=PI),
            rng.random_range(0.0..=PI),
            rng.random_range(0.0..=PI),
        );

        DriftBody {
            position,
            rotation,
            velocity,
            angular_velocity,
        }
    }
}
