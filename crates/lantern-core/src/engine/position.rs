use crate::core::models::part::ConnectionPoint;
use crate::core::utils::geometry;
use nalgebra::Point3;

/// Separation at which two lantern parts seat perfectly, in design units.
pub const IDEAL_JOINT_DISTANCE: f64 = 0.15;

const DISTANCE_WEIGHT: f64 = 0.7;
const POINT_MATCH_WEIGHT: f64 = 0.3;

/// Point-match sub-score used when either part declares no connection points.
const NEUTRAL_POINT_MATCH: f64 = 0.5;
const POINT_MATCH_BASE: f64 = 0.3;
const POINT_MATCH_SPAN: f64 = 0.7;

/// Scores the spatial placement of a joint attempt, in `[0, 1]`.
///
/// The distance sub-score peaks when the parts sit exactly
/// [`IDEAL_JOINT_DISTANCE`] apart and falls off linearly, reaching zero once
/// the error equals the ideal distance itself. The point-match sub-score is a
/// cardinality heuristic only: it compares how many connection points each
/// part declares, not their kinds or geometry.
pub fn score(
    points_a: &[ConnectionPoint],
    points_b: &[ConnectionPoint],
    pos_a: &Point3<f64>,
    pos_b: &Point3<f64>,
) -> f64 {
    let distance = geometry::distance(pos_a, pos_b);
    let distance_score = (1.0 - (distance - IDEAL_JOINT_DISTANCE).abs() / IDEAL_JOINT_DISTANCE)
        .max(0.0);

    let point_match = if !points_a.is_empty() && !points_b.is_empty() {
        let smaller = points_a.len().min(points_b.len()) as f64;
        let larger = points_a.len().max(points_b.len()).max(1) as f64;
        POINT_MATCH_BASE + (smaller / larger) * POINT_MATCH_SPAN
    } else {
        NEUTRAL_POINT_MATCH
    };

    distance_score * DISTANCE_WEIGHT + point_match * POINT_MATCH_WEIGHT
}
