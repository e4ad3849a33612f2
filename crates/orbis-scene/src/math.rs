//! 4×4 matrix math for camera and model transforms.
//!
//! Column-major layout matching WGSL `mat4x4<f32>`, right-handed, with a
//! `[0, 1]` clip-space depth range as wgpu expects.

/// 4×4 column-major matrix stored as `[f32; 16]`.
pub type Mat4 = [f32; 16];

pub type Vec3 = [f32; 3];

/// Identity matrix.
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// Perspective projection.
///
/// `fov_y` is the vertical field of view in radians; `near` and `far` must be > 0.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y * 0.5).tan();
    let range_inv = 1.0 / (near - far);

    [
        f / aspect, 0.0, 0.0, 0.0,
        0.0, f, 0.0, 0.0,
        0.0, 0.0, far * range_inv, -1.0,
        0.0, 0.0, near * far * range_inv, 0.0,
    ]
}

/// View matrix looking from `eye` toward `target`.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = normalize(sub(target, eye));
    let s = normalize(cross(f, up));
    let u = cross(s, f);

    [
        s[0], u[0], -f[0], 0.0,
        s[1], u[1], -f[1], 0.0,
        s[2], u[2], -f[2], 0.0,
        -dot(s, eye), -dot(u, eye), dot(f, eye), 1.0,
    ]
}

/// Rotation around the X axis.
pub fn rotate_x(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        1.0, 0.0, 0.0, 0.0, 0.0, c, s, 0.0, 0.0, -s, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Rotation around the Y axis.
pub fn rotate_y(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        c, 0.0, -s, 0.0, 0.0, 1.0, 0.0, 0.0, s, 0.0, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Rotation around the Z axis.
pub fn rotate_z(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        c, s, 0.0, 0.0, -s, c, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Intrinsic `XYZ` Euler rotation: `Rx * Ry * Rz`, so Z acts on a point first.
pub fn rotate_xyz(r: Vec3) -> Mat4 {
    mul(&rotate_x(r[0]), &mul(&rotate_y(r[1]), &rotate_z(r[2])))
}

/// Multiply two 4×4 column-major matrices: result = a × b.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            out[col * 4 + row] = sum;
        }
    }
    out
}

/// Transforms a point (w = 1) and performs the perspective divide.
pub fn transform_point(m: &Mat4, p: Vec3) -> Vec3 {
    let x = m[0] * p[0] + m[4] * p[1] + m[8] * p[2] + m[12];
    let y = m[1] * p[0] + m[5] * p[1] + m[9] * p[2] + m[13];
    let z = m[2] * p[0] + m[6] * p[1] + m[10] * p[2] + m[14];
    let w = m[3] * p[0] + m[7] * p[1] + m[11] * p[2] + m[15];
    let w = if w.abs() > f32::EPSILON { w } else { 1.0 };
    [x / w, y / w, z / w]
}

// ── vector helpers ─────────────────────────────────────────────────────────

#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn scale(a: Vec3, s: f32) -> Vec3 {
    [a[0] * s, a[1] * s, a[2] * s]
}

#[inline]
pub fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    add(a, scale(sub(b, a), t))
}

#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
pub fn length(a: Vec3) -> f32 {
    dot(a, a).sqrt()
}

/// Unit vector in the direction of `a`; the zero vector stays zero.
#[inline]
pub fn normalize(a: Vec3) -> Vec3 {
    let len = length(a);
    if len > 0.0 { scale(a, 1.0 / len) } else { a }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: Vec3, b: Vec3) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-4)
    }

    #[test]
    fn identity_mul_identity() {
        assert_eq!(mul(&IDENTITY, &IDENTITY), IDENTITY);
    }

    #[test]
    fn look_at_moves_eye_to_origin() {
        let eye = [0.0, -1.2, 1.0];
        let v = look_at(eye, [0.0; 3], [0.0, 1.0, 0.0]);
        assert!(approx(transform_point(&v, eye), [0.0, 0.0, 0.0]));
        // Target ends up straight ahead on -Z.
        let t = transform_point(&v, [0.0; 3]);
        assert!(t[0].abs() < 1e-4 && t[1].abs() < 1e-4);
        assert!((t[2] + length(eye)).abs() < 1e-4);
    }

    #[test]
    fn perspective_maps_near_and_far_to_unit_depth() {
        let p = perspective(45f32.to_radians(), 1.5, 0.1, 1000.0);
        assert!(transform_point(&p, [0.0, 0.0, -0.1])[2].abs() < 1e-4);
        assert!((transform_point(&p, [0.0, 0.0, -1000.0])[2] - 1.0).abs() < 1e-4);
        assert!((p[11] + 1.0).abs() < 1e-6);
    }

    #[test]
    fn rotate_y_quarter_turn() {
        let r = rotate_y(FRAC_PI_2);
        assert!(approx(transform_point(&r, [1.0, 0.0, 0.0]), [0.0, 0.0, -1.0]));
    }

    #[test]
    fn rotate_xyz_with_zero_is_identity() {
        let r = rotate_xyz([0.0; 3]);
        assert!(approx(transform_point(&r, [1.0, 2.0, 3.0]), [1.0, 2.0, 3.0]));
    }

    #[test]
    fn rotate_xyz_applies_y_before_x() {
        use std::f32::consts::FRAC_PI_2;
        let r = rotate_xyz([FRAC_PI_2, FRAC_PI_2, 0.0]);
        // Ry sends +X to -Z, then Rx sends -Z to +Y.
        assert!(approx(transform_point(&r, [1.0, 0.0, 0.0]), [0.0, 1.0, 0.0]));
    }

    #[test]
    fn normalize_zero_stays_zero() {
        assert_eq!(normalize([0.0; 3]), [0.0; 3]);
        assert!((length(normalize([3.0, 4.0, 0.0])) - 1.0).abs() < 1e-6);
    }
}
