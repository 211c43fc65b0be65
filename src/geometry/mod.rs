//! Surface shapes and domain transforms feeding positions to the noise.

mod shape;
mod transform;

pub use shape::{index_to_uv, Shape, SurfacePoint};
pub use transform::{DomainMotion, SpaceTrs};
