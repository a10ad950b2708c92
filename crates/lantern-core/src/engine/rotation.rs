use crate::core::utils::geometry;
use nalgebra::Vector3;

/// The Y axis is the primary hinge axis for lantern joints, so it carries
/// half the rotation score on its own.
const Y_AXIS_WEIGHT: f64 = 0.5;
const SIDE_AXIS_WEIGHT: f64 = 0.25;

/// Scores the angular alignment of a joint attempt, in `[0, 1]`.
///
/// Each axis contributes its shortest-arc alignment; adding whole turns to
/// any axis leaves the score unchanged.
pub fn score(rot_a: &Vector3<f64>, rot_b: &Vector3<f64>) -> f64 {
    let score_x = geometry::axis_alignment(rot_a.x, rot_b.x);
    let score_y = geometry::axis_alignment(rot_a.y, rot_b.y);
    let score_z = geometry::axis_alignment(rot_a.z, rot_b.z);

    score_y * Y_AXIS_WEIGHT + (score_x + score_z) * SIDE_AXIS_WEIGHT
}
