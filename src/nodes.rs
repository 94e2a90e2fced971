//! Labeled node records
//!
//! User-side convenience containers for tagged coordinates. These are never
//! transmitted to the engine as a unit; host scripts use them to keep track
//! of geometry they intend to feed to the object managers.

use serde::{Deserialize, Serialize};

/// A tagged 2D node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Node2d {
    pub tag: i32,
    pub x: f64,
    pub y: f64,
}

impl Node2d {
    pub fn new(tag: i32, x: f64, y: f64) -> Self {
        Self { tag, x, y }
    }
}

/// A tagged 3D node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Node3d {
    pub tag: i32,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Node3d {
    pub fn new(tag: i32, x: f64, y: f64, z: f64) -> Self {
        Self { tag, x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_zero() {
        let n2 = Node2d::default();
        assert_eq!((n2.tag, n2.x, n2.y), (0, 0.0, 0.0));
        let n3 = Node3d::default();
        assert_eq!((n3.tag, n3.x, n3.y, n3.z), (0, 0.0, 0.0, 0.0));
    }
}
