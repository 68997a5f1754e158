//! Axis-angle rotation holder.
//!
//! Stores an axis and an angle and nothing more: there is no conversion to a
//! matrix and no application to vectors yet.

use super::Vector3;
use crate::angle::Angle;

/// A rotation by `angle` about `axis`. The axis is not normalised on input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rotation3 {
    axis: Vector3,
    angle: Angle,
}

impl Rotation3 {
    pub fn new(axis: Vector3, angle: Angle) -> Self {
        Self { axis, angle }
    }

    pub fn axis(&self) -> &Vector3 {
        &self.axis
    }

    pub fn axis_mut(&mut self) -> &mut Vector3 {
        &mut self.axis
    }

    pub fn angle(&self) -> &Angle {
        &self.angle
    }

    pub fn angle_mut(&mut self) -> &mut Angle {
        &mut self.angle
    }
}
