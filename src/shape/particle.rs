use crate::error::RasterizationError;
use crate::math::{Point, Real, Vector, Vector2};
use crate::raster::{RasterConfig, VoxelGrid};
use crate::shape::Scatterer;

/// The unit in which a particle position is expressed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum PositionUnit {
    /// Physical lengths (e.g. meters), converted to voxel-grid units using
    /// the scene voxel size.
    #[default]
    Physical,
    /// Voxel-grid units, used as-is.
    Voxel,
}

/// The position of a particle in the scene.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Position {
    /// An in-plane position, with the coordinate along the axis normal to
    /// the camera plane supplied separately.
    Planar(Vector2<Real>, Real),
    /// A full 3-dimensional position.
    Spatial(Vector<Real>),
}

/// A scatterer together with its placement in the scene.
///
/// The `value` is a characteristic magnitude of the particle (e.g. a
/// refractive index or an emission intensity). It is opaque to the
/// rasterizer, which only ever produces geometric occupancy; downstream
/// imaging code combines the two.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Particle {
    /// The shape being rasterized.
    pub shape: Scatterer,
    /// Where the particle sits in the scene.
    pub position: Position,
    /// Characteristic magnitude, passed through untouched.
    pub value: Real,
    /// The unit of `position`.
    pub position_unit: PositionUnit,
}

impl Particle {
    /// Creates a particle with unit value and a physically expressed
    /// position.
    pub fn new(shape: Scatterer, position: Position) -> Self {
        Particle {
            shape,
            position,
            value: 1.0,
            position_unit: PositionUnit::Physical,
        }
    }

    /// The particle position expressed in voxel-grid units.
    ///
    /// A physical position is divided element-wise by the matching leading
    /// components of `voxel_size`; a voxel-native position passes through
    /// unchanged. The separately supplied axial coordinate of a
    /// [`Position::Planar`] is never rescaled.
    pub fn position_in_voxels(&self, voxel_size: &Vector<Real>) -> Point<Real> {
        match (&self.position, self.position_unit) {
            (Position::Planar(xy, z), PositionUnit::Physical) => {
                Point::new(xy.x / voxel_size.x, xy.y / voxel_size.y, *z)
            }
            (Position::Planar(xy, z), PositionUnit::Voxel) => Point::new(xy.x, xy.y, *z),
            (Position::Spatial(pos), PositionUnit::Physical) => {
                Point::from(pos.component_div(voxel_size))
            }
            (Position::Spatial(pos), PositionUnit::Voxel) => Point::from(*pos),
        }
    }

    /// Rasterizes this particle's shape with the given configuration.
    pub fn rasterize(&self, config: &RasterConfig) -> Result<VoxelGrid, RasterizationError> {
        crate::raster::rasterize(&self.shape, config)
    }
}

#[cfg(test)]
mod test {
    use super::{Particle, Position, PositionUnit};
    use crate::math::{Point, Vector, Vector2};
    use crate::shape::Scatterer;

    #[test]
    fn physical_positions_are_rescaled() {
        let particle = Particle::new(
            Scatterer::point(),
            Position::Spatial(Vector::new(4.0, 9.0, 10.0)),
        );
        let pos = particle.position_in_voxels(&Vector::new(2.0, 3.0, 5.0));
        assert_eq!(pos, Point::new(2.0, 3.0, 2.0));
    }

    #[test]
    fn planar_axial_coordinate_is_not_rescaled() {
        let particle = Particle::new(
            Scatterer::point(),
            Position::Planar(Vector2::new(4.0, 9.0), 7.0),
        );
        let pos = particle.position_in_voxels(&Vector::new(2.0, 3.0, 5.0));
        assert_eq!(pos, Point::new(2.0, 3.0, 7.0));
    }

    #[test]
    fn voxel_native_positions_pass_through() {
        let mut particle = Particle::new(
            Scatterer::point(),
            Position::Spatial(Vector::new(4.0, 9.0, 10.0)),
        );
        particle.position_unit = PositionUnit::Voxel;
        let pos = particle.position_in_voxels(&Vector::new(2.0, 3.0, 5.0));
        assert_eq!(pos, Point::new(4.0, 9.0, 10.0));
    }
}
