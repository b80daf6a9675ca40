//! Map coordinate data and transforms.
//!
//! An antigenic map carries its own transformation (rotation/reflection from
//! optimization alignment) and translation. Coordinates supplied from
//! outside, such as bootstrap samples, must pass through both before they can
//! be displayed alongside the map's points.

use glam::{Mat3, Vec3};

/// The active map's coordinate transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapData {
    transformation: Mat3,
    translation: Vec3,
}

impl MapData {
    /// Creates map data from a transformation and a translation.
    pub fn new(transformation: Mat3, translation: Vec3) -> Self {
        Self {
            transformation,
            translation,
        }
    }

    /// Returns the map transformation.
    pub fn transformation(&self) -> Mat3 {
        self.transformation
    }

    /// Returns the map translation.
    pub fn translation(&self) -> Vec3 {
        self.translation
    }
}

impl Default for MapData {
    fn default() -> Self {
        Self {
            transformation: Mat3::IDENTITY,
            translation: Vec3::ZERO,
        }
    }
}

/// Applies a map transformation then translation to a coordinate.
///
/// The input keeps its dimensionality: a 2-D coordinate comes back 2-D.
/// Missing components are treated as zero while transforming. Padding to 3-D
/// for display is a separate, later step with overlay-specific fill values.
pub fn transform_translate_coords(
    coord: &[f32],
    transformation: &Mat3,
    translation: &Vec3,
) -> Vec<f32> {
    let dim = coord.len().min(3);
    let padded = Vec3::new(
        coord.first().copied().unwrap_or(0.0),
        coord.get(1).copied().unwrap_or(0.0),
        coord.get(2).copied().unwrap_or(0.0),
    );
    let out = *transformation * padded + *translation;
    out.to_array()[..dim].to_vec()
}
