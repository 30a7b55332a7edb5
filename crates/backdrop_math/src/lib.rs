//! 3D Mathematics Library
//!
//! Vector and matrix types for the backdrop animator.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Axis`] - One of the three coordinate axes
//! - [`Mat4`] - Column-major 4x4 matrix and transform helpers

mod vec3;
pub mod mat4;

pub use vec3::{Vec3, Axis};
pub use mat4::Mat4;
