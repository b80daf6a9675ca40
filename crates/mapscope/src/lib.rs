//! mapscope: a plot composition engine for interactive antigenic-cartography
//! maps.
//!
//! A map viewer receives a declarative plot description and turns it into a
//! live scene: grouped, toggleable elements with inherited clipping,
//! face/corner-anchored decorations, and per-point bootstrap uncertainty
//! overlays gated by selection.
//!
//! # Quick Start
//!
//! ```
//! use mapscope::*;
//!
//! fn main() -> Result<()> {
//!     let mut viewer = Viewer::new(MapData::default());
//!
//!     let data = PlotData::from_json(
//!         r#"{ "plot": [ {
//!             "type": "point",
//!             "ID": [1],
//!             "coords": [[0.0, 0.0, 0.0]],
//!             "properties": { "interactive": true, "toggle": "antigens" }
//!         } ] }"#,
//!     )?;
//!     viewer.populate_plot(&data)?;
//!
//!     viewer.set_toggle("antigens", false);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`PlotData`] / [`PlotObject`]: the immutable plot description, usually
//!   parsed from JSON.
//! - [`Viewer`]: the explicit composition context owning the scene, the
//!   element arena, toggles, decoration buckets, clipping planes, and the
//!   map's points. No global state.
//! - [`element`]: the element factory, one constructor per plot-object kind.
//! - [`composer`]: two-pass composition, construction then group wiring.
//! - [`overlay`]: bootstrap point clouds and contours per map point,
//!   visibility synchronized with selection.

// Graphics code intentionally uses casts for indices, colors, and coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod composer;
pub mod decoration;
pub mod element;
pub mod overlay;
pub mod point;
pub mod toggle;
pub mod viewer;

pub use decoration::{DecorationBuckets, EDGE_CODES, FACE_TOKENS, POSITION_CODES};
pub use element::{Element, ElementId, ElementStore};
pub use overlay::{BootstrapData, CloudData, ContourData, Overlay, OverlayRepr};
pub use point::{MapPoint, PointKind};
pub use toggle::{Toggle, ToggleRegistry};
pub use viewer::Viewer;

// Re-export the core crate's public surface
pub use mapscope_core::{
    transform_translate_coords, ClipPlane, ClipPlaneRegistry, Color, MapData, MapscopeError,
    Material, MaterialKind, Node, NodeId, PlaneRef, PlotData, PlotKind, PlotObject,
    PlotProperties, Result, Scene,
};

// Re-export glam types for convenience
pub use glam::{Mat3, Vec3, Vec4};
