/*!
scattervox
==========

**scattervox** rasterizes idealized geometric scatterers (points, elliptical
disks, spheres and ellipsoids) into dense 3-dimensional voxel occupancy
grids, for use as synthetic microscopy scene content.

Each scatterer is described in continuous physical units (position, size,
rotation). A rasterization call converts it into a finite grid of per-voxel
occupancy fractions, with anti-aliasing quality controlled by an integer
supersampling factor: the shape is evaluated on a refined grid, then
box-filtered back down to the native resolution, and structurally empty
boundary slices are trimmed from the result.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]
#![doc(html_root_url = "http://docs.rs/scattervox/0.1.0")]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod error;
pub mod raster;
pub mod shape;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Matrix3, Point2, Point3, Rotation2, Rotation3, Vector2, Vector3};

    /// The scalar type used throughout this crate.
    pub use f64 as Real;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the rasterization space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The rotation matrix type.
    pub use Rotation3 as Rotation;
}
