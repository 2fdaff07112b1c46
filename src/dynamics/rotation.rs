//! Planar rotation helpers shared by the dynamics model and the policy

use std::f64::consts::PI;

use nalgebra::Matrix3;

/// Body-to-world rotation for a planar pose `[x, y, heading]`
///
/// Maps body-frame `[surge, sway, yaw_rate]` to world-frame pose rate.
pub fn rotation(heading: f64) -> Matrix3<f64> {
    let (s, c) = heading.sin_cos();
    Matrix3::new(
        c, -s, 0.0,
        s, c, 0.0,
        0.0, 0.0, 1.0,
    )
}

/// Wrap an angle into (-pi, pi]
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(2.0 * PI) - PI;
    if wrapped <= -PI {
        wrapped + 2.0 * PI
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotation_is_orthonormal() {
        for i in -40..=40 {
            let heading = i as f64 * 0.37;
            let r = rotation(heading);
            assert_relative_eq!(r * r.transpose(), Matrix3::identity(), epsilon = 1e-12);
            assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let r = rotation(PI / 2.0);
        let world = r * nalgebra::Vector3::new(1.0, 0.0, 0.3);
        assert_relative_eq!(world, nalgebra::Vector3::new(0.0, 1.0, 0.3), epsilon = 1e-12);
    }

    #[test]
    fn test_wrap_angle() {
        assert_relative_eq!(wrap_angle(0.5), 0.5, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(3.0 * PI / 2.0), -PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(-3.0 * PI / 2.0), PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(PI), PI, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(-PI), PI, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(7.0 * PI), PI, epsilon = 1e-9);
    }
}
