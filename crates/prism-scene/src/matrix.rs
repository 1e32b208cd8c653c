//! 4×4 matrix math for node transforms and camera projection.
//!
//! Column-major layout matching WGSL `mat4x4<f32>`.

use prism_common::Vec3;

/// 4×4 column-major matrix stored as `[f32; 16]`.
pub type Mat4 = [f32; 16];

pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// Perspective projection matrix.
///
/// `fov_y` is vertical field of view in radians.
/// `near` and `far` are the clip planes (must be > 0).
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y * 0.5).tan();
    let range_inv = 1.0 / (near - far);

    [
        f / aspect,
        0.0,
        0.0,
        0.0,
        0.0,
        f,
        0.0,
        0.0,
        0.0,
        0.0,
        (far + near) * range_inv,
        -1.0,
        0.0,
        0.0,
        2.0 * far * near * range_inv,
        0.0,
    ]
}

pub fn rotate_x(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        1.0, 0.0, 0.0, 0.0, 0.0, c, s, 0.0, 0.0, -s, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

pub fn rotate_y(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        c, 0.0, -s, 0.0, 0.0, 1.0, 0.0, 0.0, s, 0.0, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

pub fn rotate_z(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        c, s, 0.0, 0.0, -s, c, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

pub fn translate(v: Vec3) -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, v.x, v.y, v.z, 1.0,
    ]
}

/// Per-axis scale matrix.
pub fn scale(v: Vec3) -> Mat4 {
    [
        v.x, 0.0, 0.0, 0.0, 0.0, v.y, 0.0, 0.0, 0.0, 0.0, v.z, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
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

/// Local transform `T · Ry · Rx · Rz · S` (yaw, pitch, roll).
pub fn compose(position: Vec3, rotation: Vec3, scale_v: Vec3) -> Mat4 {
    let r = mul(&mul(&rotate_y(rotation.y), &rotate_x(rotation.x)), &rotate_z(rotation.z));
    mul(&mul(&translate(position), &r), &scale(scale_v))
}

pub fn transform_point(m: &Mat4, p: Vec3) -> Vec3 {
    Vec3::new(
        m[0] * p.x + m[4] * p.y + m[8] * p.z + m[12],
        m[1] * p.x + m[5] * p.y + m[9] * p.z + m[13],
        m[2] * p.x + m[6] * p.y + m[10] * p.z + m[14],
    )
}
