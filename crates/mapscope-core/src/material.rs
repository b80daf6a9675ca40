//! Material model for constructed elements.
//!
//! Only the parts of a material the composition engine observes are modeled:
//! the shading kind, base color, and the accumulated clipping-plane list.
//! Shader programs, lighting, and draw calls belong to the render layer.

use glam::Vec4;
use serde::Deserialize;

use crate::clip_plane::ClipPlane;
use crate::plot::PlotProperties;

/// Shading kind requested by a plot descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    #[default]
    Basic,
    Lambert,
    Phong,
    Line,
}

/// A material attached to a scene node.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub kind: MaterialKind,
    pub color: Vec4,
    pub double_side: bool,
    /// Dashed line rendering, only meaningful for [`MaterialKind::Line`].
    pub dashed: bool,
    /// Accumulated clipping planes. Append-only; planes never replace
    /// earlier ones and no dedup is performed.
    pub clipping_planes: Vec<ClipPlane>,
}

impl Material {
    /// Builds a material from descriptor properties.
    ///
    /// The descriptor is read, never mutated; the material owns its own
    /// records from here on.
    pub fn from_properties(props: &PlotProperties) -> Self {
        let color = props.color.unwrap_or_default();
        let alpha = props.opacity.unwrap_or(color.a);
        Self {
            kind: props.mat,
            color: Vec4::new(color.r, color.g, color.b, alpha),
            double_side: props.double_side,
            dashed: props.mat == MaterialKind::Line && props.gap_size.is_some(),
            clipping_planes: Vec::new(),
        }
    }

    /// Appends clipping planes to this material.
    pub fn append_clipping_planes(&mut self, planes: &[ClipPlane]) {
        self.clipping_planes.extend_from_slice(planes);
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            kind: MaterialKind::Basic,
            color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            double_side: false,
            dashed: false,
            clipping_planes: Vec::new(),
        }
    }
}
