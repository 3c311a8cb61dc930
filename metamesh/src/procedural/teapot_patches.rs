//! Control points of the Utah teapot
//!
//! 32 bicubic patches of 16 points each, from the CGA teapot data set.
//! Within a patch the points are four curves of four points; see
//! [`crate::bezier`] for how they are evaluated.

use glam::Vec3;

/// Number of patches in [`TEAPOT_PATCHES`]
pub const TEAPOT_PATCH_COUNT: usize = 32;

/// Teapot control points, 16 per patch
#[rustfmt::skip]
pub const TEAPOT_PATCHES: [Vec3; TEAPOT_PATCH_COUNT * 16] = [
    Vec3::new(1.4, 2.4, 0.0), Vec3::new(1.4, 2.4, -0.784), Vec3::new(0.784, 2.4, -1.4), Vec3::new(0.0, 2.4, -1.4),
    Vec3::new(1.3375, 2.53125, 0.0), Vec3::new(1.3375, 2.53125, -0.749), Vec3::new(0.749, 2.53125, -1.3375), Vec3::new(0.0, 2.53125, -1.3375),
    Vec3::new(1.4375, 2.53125, 0.0), Vec3::new(1.4375, 2.53125, -0.805), Vec3::new(0.805, 2.53125, -1.4375), Vec3::new(0.0, 2.53125, -1.4375),
    Vec3::new(1.5, 2.4, 0.0), Vec3::new(1.5, 2.4, -0.84), Vec3::new(0.84, 2.4, -1.5), Vec3::new(0.0, 2.4, -1.5),

    Vec3::new(0.0, 2.4, -1.4), Vec3::new(-0.784, 2.4, -1.4), Vec3::new(-1.4, 2.4, -0.784), Vec3::new(-1.4, 2.4, 0.0),
    Vec3::new(0.0, 2.53125, -1.3375), Vec3::new(-0.749, 2.53125, -1.3375), Vec3::new(-1.3375, 2.53125, -0.749), Vec3::new(-1.3375, 2.53125, 0.0),
    Vec3::new(0.0, 2.53125, -1.4375), Vec3::new(-0.805, 2.53125, -1.4375), Vec3::new(-1.4375, 2.53125, -0.805), Vec3::new(-1.4375, 2.53125, 0.0),
    Vec3::new(0.0, 2.4, -1.5), Vec3::new(-0.84, 2.4, -1.5), Vec3::new(-1.5, 2.4, -0.84), Vec3::new(-1.5, 2.4, 0.0),

    Vec3::new(-1.4, 2.4, 0.0), Vec3::new(-1.4, 2.4, 0.784), Vec3::new(-0.784, 2.4, 1.4), Vec3::new(0.0, 2.4, 1.4),
    Vec3::new(-1.3375, 2.53125, 0.0), Vec3::new(-1.3375, 2.53125, 0.749), Vec3::new(-0.749, 2.53125, 1.3375), Vec3::new(0.0, 2.53125, 1.3375),
    Vec3::new(-1.4375, 2.53125, 0.0), Vec3::new(-1.4375, 2.53125, 0.805), Vec3::new(-0.805, 2.53125, 1.4375), Vec3::new(0.0, 2.53125, 1.4375),
    Vec3::new(-1.5, 2.4, 0.0), Vec3::new(-1.5, 2.4, 0.84), Vec3::new(-0.84, 2.4, 1.5), Vec3::new(0.0, 2.4, 1.5),

    Vec3::new(0.0, 2.4, 1.4), Vec3::new(0.784, 2.4, 1.4), Vec3::new(1.4, 2.4, 0.784), Vec3::new(1.4, 2.4, 0.0),
    Vec3::new(0.0, 2.53125, 1.3375), Vec3::new(0.749, 2.53125, 1.3375), Vec3::new(1.3375, 2.53125, 0.749), Vec3::new(1.3375, 2.53125, 0.0),
    Vec3::new(0.0, 2.53125, 1.4375), Vec3::new(0.805, 2.53125, 1.4375), Vec3::new(1.4375, 2.53125, 0.805), Vec3::new(1.4375, 2.53125, 0.0),
    Vec3::new(0.0, 2.4, 1.5), Vec3::new(0.84, 2.4, 1.5), Vec3::new(1.5, 2.4, 0.84), Vec3::new(1.5, 2.4, 0.0),

    Vec3::new(1.5, 2.4, 0.0), Vec3::new(1.5, 2.4, -0.84), Vec3::new(0.84, 2.4, -1.5), Vec3::new(0.0, 2.4, -1.5),
    Vec3::new(1.75, 1.875, 0.0), Vec3::new(1.75, 1.875, -0.98), Vec3::new(0.98, 1.875, -1.75), Vec3::new(0.0, 1.875, -1.75),
    Vec3::new(2.0, 1.35, 0.0), Vec3::new(2.0, 1.35, -1.12), Vec3::new(1.12, 1.35, -2.0), Vec3::new(0.0, 1.35, -2.0),
    Vec3::new(2.0, 0.9, 0.0), Vec3::new(2.0, 0.9, -1.12), Vec3::new(1.12, 0.9, -2.0), Vec3::new(0.0, 0.9, -2.0),

    Vec3::new(0.0, 2.4, -1.5), Vec3::new(-0.84, 2.4, -1.5), Vec3::new(-1.5, 2.4, -0.84), Vec3::new(-1.5, 2.4, 0.0),
    Vec3::new(0.0, 1.875, -1.75), Vec3::new(-0.98, 1.875, -1.75), Vec3::new(-1.75, 1.875, -0.98), Vec3::new(-1.75, 1.875, 0.0),
    Vec3::new(0.0, 1.35, -2.0), Vec3::new(-1.12, 1.35, -2.0), Vec3::new(-2.0, 1.35, -1.12), Vec3::new(-2.0, 1.35, 0.0),
    Vec3::new(0.0, 0.9, -2.0), Vec3::new(-1.12, 0.9, -2.0), Vec3::new(-2.0, 0.9, -1.12), Vec3::new(-2.0, 0.9, 0.0),

    Vec3::new(-1.5, 2.4, 0.0), Vec3::new(-1.5, 2.4, 0.84), Vec3::new(-0.84, 2.4, 1.5), Vec3::new(0.0, 2.4, 1.5),
    Vec3::new(-1.75, 1.875, 0.0), Vec3::new(-1.75, 1.875, 0.98), Vec3::new(-0.98, 1.875, 1.75), Vec3::new(0.0, 1.875, 1.75),
    Vec3::new(-2.0, 1.35, 0.0), Vec3::new(-2.0, 1.35, 1.12), Vec3::new(-1.12, 1.35, 2.0), Vec3::new(0.0, 1.35, 2.0),
    Vec3::new(-2.0, 0.9, 0.0), Vec3::new(-2.0, 0.9, 1.12), Vec3::new(-1.12, 0.9, 2.0), Vec3::new(0.0, 0.9, 2.0),

    Vec3::new(0.0, 2.4, 1.5), Vec3::new(0.84, 2.4, 1.5), Vec3::new(1.5, 2.4, 0.84), Vec3::new(1.5, 2.4, 0.0),
    Vec3::new(0.0, 1.875, 1.75), Vec3::new(0.98, 1.875, 1.75), Vec3::new(1.75, 1.875, 0.98), Vec3::new(1.75, 1.875, 0.0),
    Vec3::new(0.0, 1.35, 2.0), Vec3::new(1.12, 1.35, 2.0), Vec3::new(2.0, 1.35, 1.12), Vec3::new(2.0, 1.35, 0.0),
    Vec3::new(0.0, 0.9, 2.0), Vec3::new(1.12, 0.9, 2.0), Vec3::new(2.0, 0.9, 1.12), Vec3::new(2.0, 0.9, 0.0),

    Vec3::new(2.0, 0.9, 0.0), Vec3::new(2.0, 0.9, -1.12), Vec3::new(1.12, 0.9, -2.0), Vec3::new(0.0, 0.9, -2.0),
    Vec3::new(2.0, 0.45, 0.0), Vec3::new(2.0, 0.45, -1.12), Vec3::new(1.12, 0.45, -2.0), Vec3::new(0.0, 0.45, -2.0),
    Vec3::new(1.5, 0.225, 0.0), Vec3::new(1.5, 0.225, -0.84), Vec3::new(0.84, 0.225, -1.5), Vec3::new(0.0, 0.225, -1.5),
    Vec3::new(1.5, 0.15, 0.0), Vec3::new(1.5, 0.15, -0.84), Vec3::new(0.84, 0.15, -1.5), Vec3::new(0.0, 0.15, -1.5),

    Vec3::new(0.0, 0.9, -2.0), Vec3::new(-1.12, 0.9, -2.0), Vec3::new(-2.0, 0.9, -1.12), Vec3::new(-2.0, 0.9, 0.0),
    Vec3::new(0.0, 0.45, -2.0), Vec3::new(-1.12, 0.45, -2.0), Vec3::new(-2.0, 0.45, -1.12), Vec3::new(-2.0, 0.45, 0.0),
    Vec3::new(0.0, 0.225, -1.5), Vec3::new(-0.84, 0.225, -1.5), Vec3::new(-1.5, 0.225, -0.84), Vec3::new(-1.5, 0.225, 0.0),
    Vec3::new(0.0, 0.15, -1.5), Vec3::new(-0.84, 0.15, -1.5), Vec3::new(-1.5, 0.15, -0.84), Vec3::new(-1.5, 0.15, 0.0),

    Vec3::new(-2.0, 0.9, 0.0), Vec3::new(-2.0, 0.9, 1.12), Vec3::new(-1.12, 0.9, 2.0), Vec3::new(0.0, 0.9, 2.0),
    Vec3::new(-2.0, 0.45, 0.0), Vec3::new(-2.0, 0.45, 1.12), Vec3::new(-1.12, 0.45, 2.0), Vec3::new(0.0, 0.45, 2.0),
    Vec3::new(-1.5, 0.225, 0.0), Vec3::new(-1.5, 0.225, 0.84), Vec3::new(-0.84, 0.225, 1.5), Vec3::new(0.0, 0.225, 1.5),
    Vec3::new(-1.5, 0.15, 0.0), Vec3::new(-1.5, 0.15, 0.84), Vec3::new(-0.84, 0.15, 1.5), Vec3::new(0.0, 0.15, 1.5),

    Vec3::new(0.0, 0.9, 2.0), Vec3::new(1.12, 0.9, 2.0), Vec3::new(2.0, 0.9, 1.12), Vec3::new(2.0, 0.9, 0.0),
    Vec3::new(0.0, 0.45, 2.0), Vec3::new(1.12, 0.45, 2.0), Vec3::new(2.0, 0.45, 1.12), Vec3::new(2.0, 0.45, 0.0),
    Vec3::new(0.0, 0.225, 1.5), Vec3::new(0.84, 0.225, 1.5), Vec3::new(1.5, 0.225, 0.84), Vec3::new(1.5, 0.225, 0.0),
    Vec3::new(0.0, 0.15, 1.5), Vec3::new(0.84, 0.15, 1.5), Vec3::new(1.5, 0.15, 0.84), Vec3::new(1.5, 0.15, 0.0),

    Vec3::new(-1.6, 2.025, 0.0), Vec3::new(-1.6, 2.025, -0.3), Vec3::new(-1.5, 2.25, -0.3), Vec3::new(-1.5, 2.25, 0.0),
    Vec3::new(-2.3, 2.025, 0.0), Vec3::new(-2.3, 2.025, -0.3), Vec3::new(-2.5, 2.25, -0.3), Vec3::new(-2.5, 2.25, 0.0),
    Vec3::new(-2.7, 2.025, 0.0), Vec3::new(-2.7, 2.025, -0.3), Vec3::new(-3.0, 2.25, -0.3), Vec3::new(-3.0, 2.25, 0.0),
    Vec3::new(-2.7, 1.8, 0.0), Vec3::new(-2.7, 1.8, -0.3), Vec3::new(-3.0, 1.8, -0.3), Vec3::new(-3.0, 1.8, 0.0),

    Vec3::new(-1.5, 2.25, 0.0), Vec3::new(-1.5, 2.25, 0.3), Vec3::new(-1.6, 2.025, 0.3), Vec3::new(-1.6, 2.025, 0.0),
    Vec3::new(-2.5, 2.25, 0.0), Vec3::new(-2.5, 2.25, 0.3), Vec3::new(-2.3, 2.025, 0.3), Vec3::new(-2.3, 2.025, 0.0),
    Vec3::new(-3.0, 2.25, 0.0), Vec3::new(-3.0, 2.25, 0.3), Vec3::new(-2.7, 2.025, 0.3), Vec3::new(-2.7, 2.025, 0.0),
    Vec3::new(-3.0, 1.8, 0.0), Vec3::new(-3.0, 1.8, 0.3), Vec3::new(-2.7, 1.8, 0.3), Vec3::new(-2.7, 1.8, 0.0),

    Vec3::new(-2.7, 1.8, 0.0), Vec3::new(-2.7, 1.8, -0.3), Vec3::new(-3.0, 1.8, -0.3), Vec3::new(-3.0, 1.8, 0.0),
    Vec3::new(-2.7, 1.575, 0.0), Vec3::new(-2.7, 1.575, -0.3), Vec3::new(-3.0, 1.35, -0.3), Vec3::new(-3.0, 1.35, 0.0),
    Vec3::new(-2.5, 1.125, 0.0), Vec3::new(-2.5, 1.125, -0.3), Vec3::new(-2.65, 0.9375, -0.3), Vec3::new(-2.65, 0.9375, 0.0),
    Vec3::new(-2.0, 0.9, 0.0), Vec3::new(-2.0, 0.9, -0.3), Vec3::new(-1.9, 0.6, -0.3), Vec3::new(-1.9, 0.6, 0.0),

    Vec3::new(-3.0, 1.8, 0.0), Vec3::new(-3.0, 1.8, 0.3), Vec3::new(-2.7, 1.8, 0.3), Vec3::new(-2.7, 1.8, 0.0),
    Vec3::new(-3.0, 1.35, 0.0), Vec3::new(-3.0, 1.35, 0.3), Vec3::new(-2.7, 1.575, 0.3), Vec3::new(-2.7, 1.575, 0.0),
    Vec3::new(-2.65, 0.9375, 0.0), Vec3::new(-2.65, 0.9375, 0.3), Vec3::new(-2.5, 1.125, 0.3), Vec3::new(-2.5, 1.125, 0.0),
    Vec3::new(-1.9, 0.6, 0.0), Vec3::new(-1.9, 0.6, 0.3), Vec3::new(-2.0, 0.9, 0.3), Vec3::new(-2.0, 0.9, 0.0),

    Vec3::new(1.7, 1.425, 0.0), Vec3::new(1.7, 1.425, -0.66), Vec3::new(1.7, 0.6, -0.66), Vec3::new(1.7, 0.6, 0.0),
    Vec3::new(2.6, 1.425, 0.0), Vec3::new(2.6, 1.425, -0.66), Vec3::new(3.1, 0.825, -0.66), Vec3::new(3.1, 0.825, 0.0),
    Vec3::new(2.3, 2.1, 0.0), Vec3::new(2.3, 2.1, -0.25), Vec3::new(2.4, 2.025, -0.25), Vec3::new(2.4, 2.025, 0.0),
    Vec3::new(2.7, 2.4, 0.0), Vec3::new(2.7, 2.4, -0.25), Vec3::new(3.3, 2.4, -0.25), Vec3::new(3.3, 2.4, 0.0),

    Vec3::new(1.7, 0.6, 0.0), Vec3::new(1.7, 0.6, 0.66), Vec3::new(1.7, 1.425, 0.66), Vec3::new(1.7, 1.425, 0.0),
    Vec3::new(3.1, 0.825, 0.0), Vec3::new(3.1, 0.825, 0.66), Vec3::new(2.6, 1.425, 0.66), Vec3::new(2.6, 1.425, 0.0),
    Vec3::new(2.4, 2.025, 0.0), Vec3::new(2.4, 2.025, 0.25), Vec3::new(2.3, 2.1, 0.25), Vec3::new(2.3, 2.1, 0.0),
    Vec3::new(3.3, 2.4, 0.0), Vec3::new(3.3, 2.4, 0.25), Vec3::new(2.7, 2.4, 0.25), Vec3::new(2.7, 2.4, 0.0),

    Vec3::new(2.7, 2.4, 0.0), Vec3::new(2.7, 2.4, -0.25), Vec3::new(3.3, 2.4, -0.25), Vec3::new(3.3, 2.4, 0.0),
    Vec3::new(2.8, 2.475, 0.0), Vec3::new(2.8, 2.475, -0.25), Vec3::new(3.525, 2.49375, -0.25), Vec3::new(3.525, 2.49375, 0.0),
    Vec3::new(2.9, 2.475, 0.0), Vec3::new(2.9, 2.475, -0.15), Vec3::new(3.45, 2.5125, -0.15), Vec3::new(3.45, 2.5125, 0.0),
    Vec3::new(2.8, 2.4, 0.0), Vec3::new(2.8, 2.4, -0.15), Vec3::new(3.2, 2.4, -0.15), Vec3::new(3.2, 2.4, 0.0),

    Vec3::new(3.3, 2.4, 0.0), Vec3::new(3.3, 2.4, 0.25), Vec3::new(2.7, 2.4, 0.25), Vec3::new(2.7, 2.4, 0.0),
    Vec3::new(3.525, 2.49375, 0.0), Vec3::new(3.525, 2.49375, 0.25), Vec3::new(2.8, 2.475, 0.25), Vec3::new(2.8, 2.475, 0.0),
    Vec3::new(3.45, 2.5125, 0.0), Vec3::new(3.45, 2.5125, 0.15), Vec3::new(2.9, 2.475, 0.15), Vec3::new(2.9, 2.475, 0.0),
    Vec3::new(3.2, 2.4, 0.0), Vec3::new(3.2, 2.4, 0.15), Vec3::new(2.8, 2.4, 0.15), Vec3::new(2.8, 2.4, 0.0),

    Vec3::new(0.0, 3.15, 0.0), Vec3::new(0.0, 3.15, 0.0), Vec3::new(0.0, 3.15, 0.0), Vec3::new(0.0, 3.15, 0.0),
    Vec3::new(0.8, 3.15, 0.0), Vec3::new(0.8, 3.15, -0.45), Vec3::new(0.45, 3.15, -0.8), Vec3::new(0.0, 3.15, -0.8),
    Vec3::new(0.0, 2.85, 0.0), Vec3::new(0.0, 2.85, 0.0), Vec3::new(0.0, 2.85, 0.0), Vec3::new(0.0, 2.85, 0.0),
    Vec3::new(0.2, 2.7, 0.0), Vec3::new(0.2, 2.7, -0.112), Vec3::new(0.112, 2.7, -0.2), Vec3::new(0.0, 2.7, -0.2),

    Vec3::new(0.0, 3.15, 0.0), Vec3::new(0.0, 3.15, 0.0), Vec3::new(0.0, 3.15, 0.0), Vec3::new(0.0, 3.15, 0.0),
    Vec3::new(0.0, 3.15, -0.8), Vec3::new(-0.45, 3.15, -0.8), Vec3::new(-0.8, 3.15, -0.45), Vec3::new(-0.8, 3.15, 0.0),
    Vec3::new(0.0, 2.85, 0.0), Vec3::new(0.0, 2.85, 0.0), Vec3::new(0.0, 2.85, 0.0), Vec3::new(0.0, 2.85, 0.0),
    Vec3::new(0.0, 2.7, -0.2), Vec3::new(-0.112, 2.7, -0.2), Vec3::new(-0.2, 2.7, -0.112), Vec3::new(-0.2, 2.7, 0.0),

    Vec3::new(0.0, 3.15, 0.0), Vec3::new(0.0, 3.15, 0.0), Vec3::new(0.0, 3.15, 0.0), Vec3::new(0.0, 3.15, 0.0),
    Vec3::new(-0.8, 3.15, 0.0), Vec3::new(-0.8, 3.15, 0.45), Vec3::new(-0.45, 3.15, 0.8), Vec3::new(0.0, 3.15, 0.8),
    Vec3::new(0.0, 2.85, 0.0), Vec3::new(0.0, 2.85, 0.0), Vec3::new(0.0, 2.85, 0.0), Vec3::new(0.0, 2.85, 0.0),
    Vec3::new(-0.2, 2.7, 0.0), Vec3::new(-0.2, 2.7, 0.112), Vec3::new(-0.112, 2.7, 0.2), Vec3::new(0.0, 2.7, 0.2),

    Vec3::new(0.0, 3.15, 0.0), Vec3::new(0.0, 3.15, 0.0), Vec3::new(0.0, 3.15, 0.0), Vec3::new(0.0, 3.15, 0.0),
    Vec3::new(0.0, 3.15, 0.8), Vec3::new(0.45, 3.15, 0.8), Vec3::new(0.8, 3.15, 0.45), Vec3::new(0.8, 3.15, 0.0),
    Vec3::new(0.0, 2.85, 0.0), Vec3::new(0.0, 2.85, 0.0), Vec3::new(0.0, 2.85, 0.0), Vec3::new(0.0, 2.85, 0.0),
    Vec3::new(0.0, 2.7, 0.2), Vec3::new(0.112, 2.7, 0.2), Vec3::new(0.2, 2.7, 0.112), Vec3::new(0.2, 2.7, 0.0),

    Vec3::new(0.2, 2.7, 0.0), Vec3::new(0.2, 2.7, -0.112), Vec3::new(0.112, 2.7, -0.2), Vec3::new(0.0, 2.7, -0.2),
    Vec3::new(0.4, 2.55, 0.0), Vec3::new(0.4, 2.55, -0.224), Vec3::new(0.224, 2.55, -0.4), Vec3::new(0.0, 2.55, -0.4),
    Vec3::new(1.3, 2.55, 0.0), Vec3::new(1.3, 2.55, -0.728), Vec3::new(0.728, 2.55, -1.3), Vec3::new(0.0, 2.55, -1.3),
    Vec3::new(1.3, 2.4, 0.0), Vec3::new(1.3, 2.4, -0.728), Vec3::new(0.728, 2.4, -1.3), Vec3::new(0.0, 2.4, -1.3),

    Vec3::new(0.0, 2.7, -0.2), Vec3::new(-0.112, 2.7, -0.2), Vec3::new(-0.2, 2.7, -0.112), Vec3::new(-0.2, 2.7, 0.0),
    Vec3::new(0.0, 2.55, -0.4), Vec3::new(-0.224, 2.55, -0.4), Vec3::new(-0.4, 2.55, -0.224), Vec3::new(-0.4, 2.55, 0.0),
    Vec3::new(0.0, 2.55, -1.3), Vec3::new(-0.728, 2.55, -1.3), Vec3::new(-1.3, 2.55, -0.728), Vec3::new(-1.3, 2.55, 0.0),
    Vec3::new(0.0, 2.4, -1.3), Vec3::new(-0.728, 2.4, -1.3), Vec3::new(-1.3, 2.4, -0.728), Vec3::new(-1.3, 2.4, 0.0),

    Vec3::new(-0.2, 2.7, 0.0), Vec3::new(-0.2, 2.7, 0.112), Vec3::new(-0.112, 2.7, 0.2), Vec3::new(0.0, 2.7, 0.2),
    Vec3::new(-0.4, 2.55, 0.0), Vec3::new(-0.4, 2.55, 0.224), Vec3::new(-0.224, 2.55, 0.4), Vec3::new(0.0, 2.55, 0.4),
    Vec3::new(-1.3, 2.55, 0.0), Vec3::new(-1.3, 2.55, 0.728), Vec3::new(-0.728, 2.55, 1.3), Vec3::new(0.0, 2.55, 1.3),
    Vec3::new(-1.3, 2.4, 0.0), Vec3::new(-1.3, 2.4, 0.728), Vec3::new(-0.728, 2.4, 1.3), Vec3::new(0.0, 2.4, 1.3),

    Vec3::new(0.0, 2.7, 0.2), Vec3::new(0.112, 2.7, 0.2), Vec3::new(0.2, 2.7, 0.112), Vec3::new(0.2, 2.7, 0.0),
    Vec3::new(0.0, 2.55, 0.4), Vec3::new(0.224, 2.55, 0.4), Vec3::new(0.4, 2.55, 0.224), Vec3::new(0.4, 2.55, 0.0),
    Vec3::new(0.0, 2.55, 1.3), Vec3::new(0.728, 2.55, 1.3), Vec3::new(1.3, 2.55, 0.728), Vec3::new(1.3, 2.55, 0.0),
    Vec3::new(0.0, 2.4, 1.3), Vec3::new(0.728, 2.4, 1.3), Vec3::new(1.3, 2.4, 0.728), Vec3::new(1.3, 2.4, 0.0),

    Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(1.425, 0.0, 0.0), Vec3::new(1.425, 0.0, 0.798), Vec3::new(0.798, 0.0, 1.425), Vec3::new(0.0, 0.0, 1.425),
    Vec3::new(1.5, 0.075, 0.0), Vec3::new(1.5, 0.075, 0.84), Vec3::new(0.84, 0.075, 1.5), Vec3::new(0.0, 0.075, 1.5),
    Vec3::new(1.5, 0.15, 0.0), Vec3::new(1.5, 0.15, 0.84), Vec3::new(0.84, 0.15, 1.5), Vec3::new(0.0, 0.15, 1.5),

    Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(0.0, 0.0, 1.425), Vec3::new(-0.798, 0.0, 1.425), Vec3::new(-1.425, 0.0, 0.798), Vec3::new(-1.425, 0.0, 0.0),
    Vec3::new(0.0, 0.075, 1.5), Vec3::new(-0.84, 0.075, 1.5), Vec3::new(-1.5, 0.075, 0.84), Vec3::new(-1.5, 0.075, 0.0),
    Vec3::new(0.0, 0.15, 1.5), Vec3::new(-0.84, 0.15, 1.5), Vec3::new(-1.5, 0.15, 0.84), Vec3::new(-1.5, 0.15, 0.0),

    Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(-1.425, 0.0, 0.0), Vec3::new(-1.425, 0.0, -0.798), Vec3::new(-0.798, 0.0, -1.425), Vec3::new(0.0, 0.0, -1.425),
    Vec3::new(-1.5, 0.075, 0.0), Vec3::new(-1.5, 0.075, -0.84), Vec3::new(-0.84, 0.075, -1.5), Vec3::new(0.0, 0.075, -1.5),
    Vec3::new(-1.5, 0.15, 0.0), Vec3::new(-1.5, 0.15, -0.84), Vec3::new(-0.84, 0.15, -1.5), Vec3::new(0.0, 0.15, -1.5),

    Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(0.0, 0.0, -1.425), Vec3::new(0.798, 0.0, -1.425), Vec3::new(1.425, 0.0, -0.798), Vec3::new(1.425, 0.0, 0.0),
    Vec3::new(0.0, 0.075, -1.5), Vec3::new(0.84, 0.075, -1.5), Vec3::new(1.5, 0.075, -0.84), Vec3::new(1.5, 0.075, 0.0),
    Vec3::new(0.0, 0.15, -1.5), Vec3::new(0.84, 0.15, -1.5), Vec3::new(1.5, 0.15, -0.84), Vec3::new(1.5, 0.15, 0.0),
];
