//! Plot description schema.
//!
//! A plot description is a JSON document listing typed plot objects. It is
//! produced upstream (by the map-making process) and consumed once at plot
//! load time; descriptors are immutable inputs and the engine never writes
//! back into them.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::clip_plane::PlaneRef;
use crate::error::{MapscopeError, Result};
use crate::material::MaterialKind;

/// The closed set of plot-object types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotKind {
    Point,
    Line,
    GlPoints,
    GlLine,
    Text,
    Sphere,
    Surface,
    Grid,
    Triangle,
    Shape,
}

impl PlotKind {
    /// Every recognized kind, in descriptor order.
    pub const ALL: [PlotKind; 10] = [
        PlotKind::Point,
        PlotKind::Line,
        PlotKind::GlPoints,
        PlotKind::GlLine,
        PlotKind::Text,
        PlotKind::Sphere,
        PlotKind::Surface,
        PlotKind::Grid,
        PlotKind::Triangle,
        PlotKind::Shape,
    ];

    /// The descriptor tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            PlotKind::Point => "point",
            PlotKind::Line => "line",
            PlotKind::GlPoints => "glpoints",
            PlotKind::GlLine => "glline",
            PlotKind::Text => "text",
            PlotKind::Sphere => "sphere",
            PlotKind::Surface => "surface",
            PlotKind::Grid => "grid",
            PlotKind::Triangle => "triangle",
            PlotKind::Shape => "shape",
        }
    }
}

impl FromStr for PlotKind {
    type Err = MapscopeError;

    fn from_str(s: &str) -> Result<Self> {
        PlotKind::ALL
            .into_iter()
            .find(|k| k.tag() == s)
            .ok_or_else(|| MapscopeError::UnrecognizedType(s.to_string()))
    }
}

impl fmt::Display for PlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for PlotKind {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

/// An RGBA color as carried in plot descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "Color::default_alpha")]
    pub a: f32,
}

impl Color {
    fn default_alpha() -> f32 {
        1.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }
    }
}

/// Recognized configuration options of a plot object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlotProperties {
    /// Draw-order override for the constructed element.
    #[serde(rename = "renderOrder")]
    pub render_order: Option<i32>,
    /// Whether the element's leaves take part in selection.
    pub interactive: bool,
    /// Display label; also makes the element selectable and grouped.
    pub label: Option<String>,
    /// Name of the visibility toggle this element belongs to.
    pub toggle: Option<String>,
    /// Face-anchoring tokens, e.g. `"x+y-"`.
    pub faces: Option<String>,
    /// Corner-anchoring codes; only the first entry is consulted.
    pub corners: Vec<String>,
    /// Element-local clipping planes, applied before the ambient ones.
    #[serde(rename = "clippingPlanes")]
    pub clipping_planes: Vec<PlaneRef>,
    /// Exempt from the ambient plot clipping planes.
    pub xpd: bool,
    /// Split the element into independently clippable sub-meshes.
    #[serde(rename = "breakupMesh")]
    pub breakup_mesh: bool,

    // Appearance
    pub mat: MaterialKind,
    pub color: Option<Color>,
    pub opacity: Option<f32>,
    #[serde(rename = "doubleSide")]
    pub double_side: bool,
    #[serde(rename = "gapSize")]
    pub gap_size: Option<f32>,
    pub size: Option<f32>,
}

/// Declarative descriptor of one visual element to add to the scene.
#[derive(Debug, Clone, Deserialize)]
pub struct PlotObject {
    #[serde(rename = "type")]
    pub kind: PlotKind,
    /// External identifiers, 1-based, one per leaf of the built element.
    #[serde(rename = "ID", default)]
    pub ids: Vec<u32>,
    #[serde(default)]
    pub properties: PlotProperties,
    /// Companion descriptor built alongside and shown on selection.
    #[serde(default)]
    pub highlight: Option<Box<PlotObject>>,
    /// 1-based indices into the full element list, resolved in a second pass.
    #[serde(default)]
    pub group: Option<Vec<u32>>,

    // Geometry (interpretation depends on the kind)
    #[serde(default)]
    pub coords: Vec<Vec<f32>>,
    #[serde(default)]
    pub text: Vec<String>,
}

/// A full plot description.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlotData {
    #[serde(default)]
    pub plot: Vec<PlotObject>,
}

impl PlotData {
    /// Parses a plot description from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
