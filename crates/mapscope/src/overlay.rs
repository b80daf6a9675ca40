//! Bootstrap uncertainty overlays.
//!
//! Repeated map optimizations on resampled titer data give, for every point,
//! a cloud of plausible positions or a contour outlining them. The overlay
//! turns that data into a per-point scene representation whose visibility is
//! gated by point selection.
//!
//! Sample coordinates pass through the active map's transformation and
//! translation before display, then are padded to three dimensions: clouds
//! sit slightly behind the map plane, contours on it.

use glam::Vec3;
use mapscope_core::error::{MapscopeError, Result};
use mapscope_core::map::{transform_translate_coords, MapData};
use mapscope_core::scene::{Node, NodeId, Scene};
use mapscope_core::{Material, MaterialKind, Vec4};

use crate::point::PointKind;
use crate::viewer::Viewer;

/// Depth filler for point-cloud samples supplied in fewer than 3 dimensions.
pub const CLOUD_FILL: f32 = -0.2;
/// Depth filler for contour vertices supplied in fewer than 3 dimensions.
pub const CONTOUR_FILL: f32 = 0.0;

/// Bootstrap samples for one point.
#[derive(Debug, Clone, Default)]
pub struct CloudData {
    /// Per-sample antigen noise; drives coloring for antigen points only.
    pub ag_noise: Vec<f32>,
    /// Per-sample coordinates, 2-D or 3-D.
    pub coords: Vec<Vec<f32>>,
}

/// A contour polygon for one point, as parallel coordinate arrays.
#[derive(Debug, Clone, Default)]
pub struct ContourData {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
}

/// Bootstrap data for the whole map, rows are resamples and columns points.
#[derive(Debug, Clone, Default)]
pub struct BootstrapData {
    pub ag_noise: Vec<Vec<f32>>,
    pub coords: Vec<Vec<Vec<f32>>>,
}

/// The built representation of one point's uncertainty.
#[derive(Debug)]
pub struct Overlay {
    pub repr: OverlayRepr,
    /// Root scene node of the representation.
    pub node: NodeId,
}

/// The two mutually exclusive overlay representations.
#[derive(Debug, PartialEq)]
pub enum OverlayRepr {
    /// Sampled coordinate perturbations with per-sample colors.
    Cloud {
        positions: Vec<Vec3>,
        colors: Vec<Vec3>,
    },
    /// Polygon outline of the sampled region.
    Contour { positions: Vec<Vec3> },
}

/// Maps an antigen error value to its red/blue channel pair.
///
/// Positive error saturates the red channel, negative the blue; the scale
/// clamps at an error magnitude of 3 and the 0.35 exponent lifts small
/// errors into a visible range.
pub fn error_color(error: f32) -> Vec3 {
    let red = (error / 3.0).clamp(0.0, 1.0).powf(0.35);
    let blue = (-error / 3.0).clamp(0.0, 1.0).powf(0.35);
    Vec3::new(red, 0.0, blue)
}

fn pad_to_3d(coord: &[f32], fill: f32) -> Vec3 {
    Vec3::new(
        coord.first().copied().unwrap_or(fill),
        coord.get(1).copied().unwrap_or(fill),
        coord.get(2).copied().unwrap_or(fill),
    )
}

/// Builds a point-cloud overlay.
///
/// Only antigen points receive the error coloring; sera keep all-zero
/// colors.
pub fn build_cloud(data: &CloudData, kind: PointKind, map: &MapData, scene: &mut Scene) -> Overlay {
    let transformation = map.transformation();
    let translation = map.translation();

    let positions: Vec<Vec3> = data
        .coords
        .iter()
        .map(|coord| {
            let transformed = transform_translate_coords(coord, &transformation, &translation);
            pad_to_3d(&transformed, CLOUD_FILL)
        })
        .collect();

    let colors: Vec<Vec3> = match kind {
        PointKind::Antigen => data
            .coords
            .iter()
            .enumerate()
            .map(|(i, _)| error_color(data.ag_noise.get(i).copied().unwrap_or(0.0)))
            .collect(),
        PointKind::Serum => vec![Vec3::ZERO; data.coords.len()],
    };

    let node = scene.insert(Node::with_material(cloud_material()));
    Overlay {
        repr: OverlayRepr::Cloud { positions, colors },
        node,
    }
}

/// Builds a contour overlay from parallel x/y arrays.
pub fn build_contour(data: &ContourData, map: &MapData, scene: &mut Scene) -> Overlay {
    let transformation = map.transformation();
    let translation = map.translation();

    let positions: Vec<Vec3> = data
        .x
        .iter()
        .zip(&data.y)
        .map(|(&x, &y)| {
            let transformed = transform_translate_coords(&[x, y], &transformation, &translation);
            pad_to_3d(&transformed, CONTOUR_FILL)
        })
        .collect();

    let node = scene.insert(Node::with_material(contour_material()));
    Overlay {
        repr: OverlayRepr::Contour { positions },
        node,
    }
}

fn cloud_material() -> Material {
    Material {
        kind: MaterialKind::Basic,
        color: Vec4::new(0.0, 0.0, 0.0, 0.3),
        ..Material::default()
    }
}

fn contour_material() -> Material {
    Material {
        kind: MaterialKind::Line,
        ..Material::default()
    }
}

impl Viewer {
    /// Attaches bootstrap point clouds to every map point.
    ///
    /// Every row of the data must carry one column per point. Each point's
    /// overlay becomes visible as soon as that point is selected.
    pub fn show_bootstrap_points(&mut self, data: &BootstrapData) -> Result<()> {
        let width = self.points.len();
        for (index, point) in self.points.iter_mut().enumerate() {
            let per_point = CloudData {
                ag_noise: column(&data.ag_noise, index, width)?,
                coords: column(&data.coords, index, width)?,
            };
            point.add_cloud_overlay(&per_point, &self.map, &mut self.scene);
        }
        log::debug!("attached bootstrap clouds to {} points", self.points.len());
        Ok(())
    }

    /// Attaches bootstrap contours to every map point.
    ///
    /// `data` is indexed by point; only the first contour per point is
    /// consumed. Points with no contour are left untouched.
    pub fn show_bootstrap_contours(&mut self, data: &[Vec<ContourData>]) -> Result<()> {
        if data.len() != self.points.len() {
            return Err(MapscopeError::BootstrapSizeMismatch {
                expected: self.points.len(),
                actual: data.len(),
            });
        }
        for (point, contours) in self.points.iter_mut().zip(data) {
            if let Some(contour) = contours.first() {
                point.add_contour_overlay(contour, &self.map, &mut self.scene);
            }
        }
        log::debug!("attached bootstrap contours to {} points", data.len());
        Ok(())
    }

    /// Discards one point's overlay.
    pub fn remove_bootstrap(&mut self, index: usize) {
        self.points[index].remove_overlay(&mut self.scene);
    }

    /// Discards every point's overlay.
    pub fn clear_bootstrap(&mut self) {
        for point in &mut self.points {
            point.remove_overlay(&mut self.scene);
        }
    }
}

/// Extracts column `index` from a row-major matrix, checking row widths.
fn column<T: Clone>(rows: &[Vec<T>], index: usize, width: usize) -> Result<Vec<T>> {
    rows.iter()
        .map(|row| {
            row.get(index)
                .cloned()
                .ok_or(MapscopeError::BootstrapSizeMismatch {
                    expected: width,
                    actual: row.len(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_color_clamps() {
        assert_eq!(error_color(6.0).x, 1.0);
        assert_eq!(error_color(6.0).z, 0.0);
        assert_eq!(error_color(-6.0).z, 1.0);
        assert_eq!(error_color(-6.0).x, 0.0);
        assert_eq!(error_color(0.0), Vec3::ZERO);
    }

    #[test]
    fn test_error_color_exponent() {
        let c = error_color(1.5);
        assert!((c.x - 0.5f32.powf(0.35)).abs() < 1e-6);
        assert_eq!(c.z, 0.0);
    }

    #[test]
    fn test_cloud_pads_2d_coords() {
        let mut scene = Scene::new();
        let data = CloudData {
            ag_noise: vec![0.0, 0.0],
            coords: vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]],
        };
        let overlay = build_cloud(&data, PointKind::Serum, &MapData::default(), &mut scene);
        let OverlayRepr::Cloud { positions, .. } = overlay.repr else {
            panic!("expected a cloud");
        };
        assert_eq!(positions[0], Vec3::new(1.0, 2.0, CLOUD_FILL));
        // 3-D input is never padded.
        assert_eq!(positions[1], Vec3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn test_contour_pads_with_zero() {
        let mut scene = Scene::new();
        let data = ContourData {
            x: vec![0.0, 1.0],
            y: vec![0.0, 1.0],
        };
        let overlay = build_contour(&data, &MapData::default(), &mut scene);
        let OverlayRepr::Contour { positions } = overlay.repr else {
            panic!("expected a contour");
        };
        assert_eq!(positions[0].z, CONTOUR_FILL);
        assert_eq!(positions[1], Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_sera_get_no_error_coloring() {
        let mut scene = Scene::new();
        let data = CloudData {
            ag_noise: vec![6.0],
            coords: vec![vec![0.0, 0.0]],
        };
        let overlay = build_cloud(&data, PointKind::Serum, &MapData::default(), &mut scene);
        let OverlayRepr::Cloud { colors, .. } = overlay.repr else {
            panic!("expected a cloud");
        };
        assert_eq!(colors, vec![Vec3::ZERO]);
    }
}
