//! Cubic Bezier curves and bicubic patches
//!
//! A bicubic patch is 16 control points laid out as four u-direction curves
//! of four points each. Evaluating at `(u, v)` first reduces every u-curve to
//! a single point and its u-derivative, then treats those four points as a
//! v-direction curve.

use glam::Vec3;

/// Position on a cubic Bezier curve at parameter `t`
#[inline]
pub fn bezier(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let mt = 1.0 - t;
    mt * mt * mt * p0 + 3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t * p3
}

/// First derivative of a cubic Bezier curve at parameter `t`
#[inline]
pub fn bezier_derivative(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let mt = 1.0 - t;
    3.0 * mt * mt * (p1 - p0) + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

/// A point on a curve together with the curve's tangent at that point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub position: Vec3,
    pub derivative: Vec3,
}

/// Evaluate position and derivative of one cubic curve
#[inline]
pub fn evaluate_curve(points: &[Vec3; 4], t: f32) -> CurvePoint {
    let [p0, p1, p2, p3] = *points;
    CurvePoint {
        position: bezier(p0, p1, p2, p3, t),
        derivative: bezier_derivative(p0, p1, p2, p3, t),
    }
}

/// Evaluated surface sample of a bicubic patch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub position: Vec3,
    /// Unit surface normal, `normalize(du x dv)`
    pub normal: Vec3,
    /// Derivative along the reduced curve (the v sweep over `c0..c3`)
    pub du: Vec3,
    /// Interpolated u-derivatives of the four source curves
    pub dv: Vec3,
}

/// Reduce the four u-curves of a patch to four points at parameter `u`
pub fn reduce_columns(patch: &[Vec3; 16], u: f32) -> [CurvePoint; 4] {
    std::array::from_fn(|curve| {
        let base = curve * 4;
        evaluate_curve(
            &[
                patch[base],
                patch[base + 1],
                patch[base + 2],
                patch[base + 3],
            ],
            u,
        )
    })
}

/// Evaluate a surface sample from columns already reduced at some `u`
///
/// When the interpolated u-derivative vanishes (every source curve collapsed
/// to a point at a pole) the second curve's derivative `c1` stands in for it,
/// so the normal stays well defined.
pub fn surface_point(columns: &[CurvePoint; 4], v: f32) -> SurfacePoint {
    let [c0, c1, c2, c3] = *columns;

    let along = evaluate_curve(&[c0.position, c1.position, c2.position, c3.position], v);
    let du = along.derivative;
    let mut dv = bezier(
        c0.derivative,
        c1.derivative,
        c2.derivative,
        c3.derivative,
        v,
    );
    if dv.length() < f32::MIN_POSITIVE {
        dv = c1.derivative;
    }

    SurfacePoint {
        position: along.position,
        normal: du.cross(dv).normalize(),
        du,
        dv,
    }
}

/// Evaluate a bicubic patch at `(u, v)`
pub fn evaluate_patch(patch: &[Vec3; 16], u: f32, v: f32) -> SurfacePoint {
    surface_point(&reduce_columns(patch, u), v)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn quad() -> [Vec3; 4] {
        [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 2.0, 0.0),
            Vec3::new(3.0, 2.0, -1.0),
            Vec3::new(4.0, 0.0, 0.5),
        ]
    }

    /// Flat patch on y = 0 spanning [0,3]x[0,3]; curve index walks +x, point index walks -z
    fn flat_patch() -> [Vec3; 16] {
        std::array::from_fn(|i| {
            let curve = (i / 4) as f32;
            let point = (i % 4) as f32;
            Vec3::new(curve, 0.0, -point)
        })
    }

    #[test]
    fn test_bezier_endpoints() {
        let [p0, p1, p2, p3] = quad();
        assert!((bezier(p0, p1, p2, p3, 0.0) - p0).length() < EPS);
        assert!((bezier(p0, p1, p2, p3, 1.0) - p3).length() < EPS);
    }

    #[test]
    fn test_bezier_derivative_endpoints() {
        // B'(0) = 3(p1 - p0), B'(1) = 3(p3 - p2)
        let [p0, p1, p2, p3] = quad();
        assert!((bezier_derivative(p0, p1, p2, p3, 0.0) - 3.0 * (p1 - p0)).length() < EPS);
        assert!((bezier_derivative(p0, p1, p2, p3, 1.0) - 3.0 * (p3 - p2)).length() < EPS);
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let [p0, p1, p2, p3] = quad();
        let h = 1e-3;
        for t in [0.2_f32, 0.5, 0.8] {
            let numeric =
                (bezier(p0, p1, p2, p3, t + h) - bezier(p0, p1, p2, p3, t - h)) / (2.0 * h);
            let analytic = bezier_derivative(p0, p1, p2, p3, t);
            assert!((numeric - analytic).length() < 1e-2, "t = {t}");
        }
    }

    #[test]
    fn test_straight_line_is_linear() {
        let p = [
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
        ];
        let c = evaluate_curve(&p, 0.5);
        assert!((c.position - Vec3::new(1.5, 0.0, 0.0)).length() < EPS);
        assert!((c.derivative - Vec3::new(3.0, 0.0, 0.0)).length() < EPS);
    }

    #[test]
    fn test_patch_corners_hit_control_points() {
        let patch = flat_patch();
        assert!((evaluate_patch(&patch, 0.0, 0.0).position - patch[0]).length() < EPS);
        assert!((evaluate_patch(&patch, 1.0, 0.0).position - patch[3]).length() < EPS);
        assert!((evaluate_patch(&patch, 0.0, 1.0).position - patch[12]).length() < EPS);
        assert!((evaluate_patch(&patch, 1.0, 1.0).position - patch[15]).length() < EPS);
    }

    #[test]
    fn test_flat_patch_normal() {
        // du runs along +x (across curves), dv along -z (along each curve):
        // (+x) x (-z) = +y
        let sample = evaluate_patch(&flat_patch(), 0.4, 0.6);
        assert!((sample.normal - Vec3::Y).length() < EPS);
        assert!((sample.normal.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_pole_uses_second_curve_derivative() {
        // First curve collapsed to a single point: at v = 0 the interpolated
        // u-derivative is exactly zero.
        let mut patch = flat_patch();
        for point in patch.iter_mut().take(4) {
            *point = Vec3::ZERO;
        }

        let u = 0.3;
        let columns = reduce_columns(&patch, u);
        assert_eq!(columns[0].derivative, Vec3::ZERO);

        let sample = surface_point(&columns, 0.0);
        assert_eq!(sample.dv, columns[1].derivative);
        assert!(sample.normal.is_finite());
        assert!((sample.normal.length() - 1.0).abs() < EPS);

        let expected = sample.du.cross(columns[1].derivative).normalize();
        assert!((sample.normal - expected).length() < EPS);
    }
}
