//! Spatial poses
//!
//! Mirrors `geometry_msgs/Pose` with its point/quaternion parts.

/// A position in 3-D space, in meters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    /// Create a point from its coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// An orientation in 3-D space as a unit quaternion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    /// The identity rotation.
    pub fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }
}

impl Default for Quaternion {
    /// Defaults to the identity rotation, not the all-zero (invalid)
    /// quaternion.
    fn default() -> Self {
        Self::identity()
    }
}

/// A position plus an orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pose {
    pub position: Point,
    pub orientation: Quaternion,
}

impl Pose {
    /// Create a pose from its parts.
    pub fn new(position: Point, orientation: Quaternion) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_orientation_is_identity() {
        let pose = Pose::default();
        assert_eq!(pose.orientation.w, 1.0);
        assert_eq!(pose.orientation.x, 0.0);
    }
}
