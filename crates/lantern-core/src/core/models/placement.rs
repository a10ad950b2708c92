use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A user-supplied spatial placement of one part: a position in design units
/// and a rotation in degrees per axis. Missing fields default to the origin
/// and zero rotation rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    #[serde(default = "origin")]
    pub position: Point3<f64>,
    #[serde(default = "zero_rotation")]
    pub rotation: Vector3<f64>,
}

fn origin() -> Point3<f64> {
    Point3::origin()
}

fn zero_rotation() -> Vector3<f64> {
    Vector3::zeros()
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: origin(),
            rotation: zero_rotation(),
        }
    }
}

impl Placement {
    pub fn new(position: Point3<f64>, rotation: Vector3<f64>) -> Self {
        Self { position, rotation }
    }

    /// Placement at the given position with zero rotation.
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Point3::new(x, y, z),
            rotation: zero_rotation(),
        }
    }

    /// True when every coordinate and angle is a finite number. Non-finite
    /// placements cannot be scored and are rejected at the pipeline boundary.
    pub fn is_finite(&self) -> bool {
        self.position.coords.iter().all(|c| c.is_finite())
            && self.rotation.iter().all(|c| c.is_finite())
    }
}
