use crate::error::RasterizationError;
use crate::math::{Real, Vector};
use crate::raster::VoxelGrid;

/// A spherical scatterer.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Sphere {
    /// The radius of the sphere, in physical units.
    pub radius: Real,
}

impl Sphere {
    /// Creates a sphere with the given radius.
    pub fn new(radius: Real) -> Result<Self, RasterizationError> {
        if radius <= 0.0 {
            return Err(RasterizationError::InvalidRadius);
        }
        Ok(Sphere { radius })
    }

    /// Rasterizes this sphere on a grid with the given voxel size, without
    /// any resampling or cropping.
    ///
    /// The scalar radius is converted per axis, so anisotropic voxels make
    /// the grid-space body an axis-aligned ellipsoid. The grid spans
    /// `[-ceil(rad_i), ceil(rad_i))` voxels along axis `i`, and a voxel
    /// belongs to the sphere iff the sum of `(x_i/rad_i)^2` over the three
    /// axes is at most 1.
    pub fn rasterize_raw(
        &self,
        voxel_size: &Vector<Real>,
    ) -> Result<VoxelGrid, RasterizationError> {
        crate::raster::check_voxel_size(voxel_size)?;

        let rad = Vector::repeat(self.radius).component_div(voxel_size);
        let c = rad.map(|r| r.ceil() as i64);

        let mut grid = VoxelGrid::zeros([(2 * c.x) as usize, (2 * c.y) as usize, (2 * c.z) as usize]);
        let [nx, ny, nz] = grid.dimensions();

        for k in 0..nz {
            let z = (k as i64 - c.z) as Real / rad.z;
            for j in 0..ny {
                let y = (j as i64 - c.y) as Real / rad.y;
                for i in 0..nx {
                    let x = (i as i64 - c.x) as Real / rad.x;

                    if x * x + y * y + z * z <= 1.0 {
                        *grid.voxel_mut(i, j, k) = 1.0;
                    }
                }
            }
        }

        Ok(grid)
    }
}
