use nalgebra::Point3;

pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (b - a).norm()
}

/// Shortest-arc angular distance between two angles in degrees, in `[0, 180]`.
/// Invariant under adding whole turns to either angle.
pub fn wrapped_angle_deg(a: f64, b: f64) -> f64 {
    let delta = (b - a).abs() % 360.0;
    delta.min(360.0 - delta)
}

/// Alignment of two angles as a score in `[0, 1]`: 1 when identical modulo a
/// full turn, 0 when opposed.
pub fn axis_alignment(a: f64, b: f64) -> f64 {
    1.0 - wrapped_angle_deg(a, b) / 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_is_euclidean() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0, 5.0, 7.0);
        assert_relative_eq!(distance(&a, &b), 5.0);
    }

    #[test]
    fn distance_of_a_point_to_itself_is_zero() {
        let p = Point3::new(-0.3, 0.1, 2.5);
        assert_eq!(distance(&p, &p), 0.0);
    }

    #[test]
    fn wrapped_angle_takes_the_shortest_arc() {
        assert_relative_eq!(wrapped_angle_deg(0.0, 10.0), 10.0);
        assert_relative_eq!(wrapped_angle_deg(0.0, 350.0), 10.0);
        assert_relative_eq!(wrapped_angle_deg(0.0, 180.0), 180.0);
    }

    #[test]
    fn wrapped_angle_ignores_whole_turns() {
        assert_relative_eq!(wrapped_angle_deg(0.0, 720.0), 0.0);
        assert_relative_eq!(wrapped_angle_deg(30.0, 30.0 + 3.0 * 360.0), 0.0);
        assert_relative_eq!(wrapped_angle_deg(-350.0, 0.0), 10.0);
    }

    #[test]
    fn axis_alignment_spans_the_unit_interval() {
        assert_relative_eq!(axis_alignment(45.0, 45.0), 1.0);
        assert_relative_eq!(axis_alignment(0.0, 180.0), 0.0);
        assert_relative_eq!(axis_alignment(0.0, 90.0), 0.5);
    }
}
