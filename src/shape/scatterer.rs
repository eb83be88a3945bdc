use crate::error::RasterizationError;
use crate::math::{Real, Vector};
use crate::raster::{AxisMask, VoxelGrid};
use crate::shape::{Ellipse, Ellipsoid, PointParticle, Sphere};

/// An idealized scatterer shape.
///
/// The set of supported shapes is closed: rasterization dispatches on this
/// tag, and every variant exposes the same two operations, parameter
/// normalization (through the shape constructors) and rasterization.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Scatterer {
    /// A single-voxel point scatterer.
    Point(PointParticle),
    /// An elliptical disk occupying a single axial slice.
    Ellipse(Ellipse),
    /// A sphere.
    Sphere(Sphere),
    /// A triaxial ellipsoid.
    Ellipsoid(Ellipsoid),
}

impl Scatterer {
    /// A point scatterer.
    pub fn point() -> Self {
        Scatterer::Point(PointParticle::new())
    }

    /// An elliptical disk built from a variable-arity radius.
    pub fn ellipse(radius: &[Real], rotation: Real) -> Result<Self, RasterizationError> {
        Ellipse::from_radii(radius, rotation).map(Scatterer::Ellipse)
    }

    /// A sphere with the given radius.
    pub fn sphere(radius: Real) -> Result<Self, RasterizationError> {
        Sphere::new(radius).map(Scatterer::Sphere)
    }

    /// An ellipsoid built from variable-arity radius and rotation inputs.
    pub fn ellipsoid(radius: &[Real], rotation: &[Real]) -> Result<Self, RasterizationError> {
        Ellipsoid::from_params(radius, rotation).map(Scatterer::Ellipsoid)
    }

    /// Rasterizes this shape on a grid with the given voxel size, without
    /// any resampling or cropping.
    ///
    /// The resulting grid is centered on the shape and spans
    /// `2 * ceil(radius_in_voxels)` voxels per axis (always an even
    /// extent); see the individual shapes for their exact membership tests.
    pub fn rasterize_raw(
        &self,
        voxel_size: &Vector<Real>,
    ) -> Result<VoxelGrid, RasterizationError> {
        match self {
            Scatterer::Point(point) => {
                crate::raster::check_voxel_size(voxel_size)?;
                Ok(point.rasterize_raw())
            }
            Scatterer::Ellipse(ellipse) => ellipse.rasterize_raw(voxel_size),
            Scatterer::Sphere(sphere) => sphere.rasterize_raw(voxel_size),
            Scatterer::Ellipsoid(ellipsoid) => ellipsoid.rasterize_raw(voxel_size),
        }
    }

    /// The supersampling factor actually applied when rasterizing this
    /// shape with the requested factor.
    ///
    /// A point has no extent to refine, so it forces the factor to 1.
    pub fn effective_upsample(&self, requested: u32) -> u32 {
        match self {
            Scatterer::Point(_) => 1,
            _ => requested,
        }
    }

    /// The grid axes actually refined when rasterizing this shape with the
    /// requested axis set.
    ///
    /// A point supports no supersampling at all, and a disk only refines
    /// its two in-plane axes (its third axis is a single slice).
    pub fn effective_upsample_axes(&self, requested: AxisMask) -> AxisMask {
        match self {
            Scatterer::Point(_) => AxisMask::empty(),
            Scatterer::Ellipse(_) => AxisMask::X | AxisMask::Y,
            _ => requested,
        }
    }
}

impl From<PointParticle> for Scatterer {
    fn from(shape: PointParticle) -> Self {
        Scatterer::Point(shape)
    }
}

impl From<Ellipse> for Scatterer {
    fn from(shape: Ellipse) -> Self {
        Scatterer::Ellipse(shape)
    }
}

impl From<Sphere> for Scatterer {
    fn from(shape: Sphere) -> Self {
        Scatterer::Sphere(shape)
    }
}

impl From<Ellipsoid> for Scatterer {
    fn from(shape: Ellipsoid) -> Self {
        Scatterer::Ellipsoid(shape)
    }
}
