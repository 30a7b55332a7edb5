//! 4x4 Matrix utilities for 3D transformations
//!
//! Matrices are column-major (`m[column][row]`), matching WGSL's `mat4x4<f32>`
//! so they can be written into uniform buffers unchanged.

use crate::Vec3;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Create a rotation matrix in the plane spanned by two axes.
///
/// Rotates axis `p1` towards axis `p2` by `angle` radians
/// (0=X, 1=Y, 2=Z). `plane_rotation(a, 1, 2)` is a rotation about X.
pub fn plane_rotation(angle: f32, p1: usize, p2: usize) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;

    m[p1][p1] = cs;
    m[p2][p2] = cs;
    m[p1][p2] = sn;
    m[p2][p1] = -sn;

    m
}

/// Rotation about the X axis
pub fn rotation_x(angle: f32) -> Mat4 {
    plane_rotation(angle, 1, 2)
}

/// Rotation about the Y axis
pub fn rotation_y(angle: f32) -> Mat4 {
    plane_rotation(angle, 2, 0)
}

/// Rotation about the Z axis
pub fn rotation_z(angle: f32) -> Mat4 {
    plane_rotation(angle, 0, 1)
}

/// Euler rotation in XYZ order: `Rx * Ry * Rz`
pub fn euler_xyz(rotation: Vec3) -> Mat4 {
    mul(rotation_x(rotation.x), mul(rotation_y(rotation.y), rotation_z(rotation.z)))
}

/// Translation matrix
pub fn translation(t: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = t.x;
    m[3][1] = t.y;
    m[3][2] = t.z;
    m
}

/// Uniform scale matrix
pub fn uniform_scale(s: f32) -> Mat4 {
    let mut m = IDENTITY;
    m[0][0] = s;
    m[1][1] = s;
    m[2][2] = s;
    m
}

/// Object-to-world matrix: scale, then rotate (XYZ Euler), then translate
pub fn model_matrix(position: Vec3, rotation: Vec3, scale: f32) -> Mat4 {
    mul(translation(position), mul(euler_xyz(rotation), uniform_scale(scale)))
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Right-handed perspective projection mapping depth to `[0, 1]` (wgpu clip space)
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let range = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, far * range, -1.0],
        [0.0, 0.0, far * near * range, 0.0],
    ]
}

/// Right-handed look-at view matrix
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = (target - eye).normalized();
    let s = f.cross(up).normalized();
    let u = s.cross(f);

    [
        [s.x, u.x, -f.x, 0.0],
        [s.y, u.y, -f.y, 0.0],
        [s.z, u.z, -f.z, 0.0],
        [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    /// Apply `m` to a point (w = 1), ignoring projective w
    fn transform_point(m: Mat4, v: Vec3) -> Vec3 {
        Vec3::new(
            m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z + m[3][0],
            m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z + m[3][1],
            m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z + m[3][2],
        )
    }

    #[test]
    fn test_identity() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(transform_point(IDENTITY, v), v));
    }

    #[test]
    fn test_rotation_axes() {
        // Right-handed: X about Z goes to Y, Y about X goes to Z, Z about Y goes to X
        let r = transform_point(rotation_z(FRAC_PI_2), Vec3::X);
        assert!(vec_approx_eq(r, Vec3::Y), "got {:?}", r);

        let r = transform_point(rotation_x(FRAC_PI_2), Vec3::Y);
        assert!(vec_approx_eq(r, Vec3::Z), "got {:?}", r);

        let r = transform_point(rotation_y(FRAC_PI_2), Vec3::Z);
        assert!(vec_approx_eq(r, Vec3::X), "got {:?}", r);
    }

    #[test]
    fn test_mul_applies_right_first() {
        // Translate after rotating: rotate X to Y, then shift by +X
        let m = mul(translation(Vec3::X), rotation_z(FRAC_PI_2));
        let r = transform_point(m, Vec3::X);
        assert!(vec_approx_eq(r, Vec3::new(1.0, 1.0, 0.0)), "got {:?}", r);
    }

    #[test]
    fn test_model_matrix_scale_then_translate() {
        let m = model_matrix(Vec3::new(5.0, 0.0, -2.0), Vec3::ZERO, 3.0);
        let r = transform_point(m, Vec3::new(1.0, 1.0, 1.0));
        assert!(vec_approx_eq(r, Vec3::new(8.0, 3.0, 1.0)), "got {:?}", r);
    }

    #[test]
    fn test_perspective_depth_range() {
        let proj = perspective(FRAC_PI_2, 1.0, 0.1, 100.0);

        // A point on the near plane maps to depth 0, far plane to depth 1
        let clip = |z: f32| {
            let zc = proj[2][2] * z + proj[3][2];
            let wc = proj[2][3] * z;
            zc / wc
        };
        assert!((clip(-0.1) - 0.0).abs() < EPSILON);
        assert!((clip(-100.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_look_at_moves_eye_to_origin() {
        let eye = Vec3::new(0.0, 0.0, 30.0);
        let view = look_at(eye, Vec3::ZERO, Vec3::Y);
        assert!(vec_approx_eq(transform_point(view, eye), Vec3::ZERO));

        // The target ends up straight ahead (negative Z in view space)
        let target = transform_point(view, Vec3::ZERO);
        assert!(vec_approx_eq(target, Vec3::new(0.0, 0.0, -30.0)), "got {:?}", target);
    }
}
