//! Small math primitives shared across the workspace.

mod axis;
mod vector3;

pub use axis::Axis;
pub use vector3::Vector3;
