//! Core abstractions for mapscope.
//!
//! This crate provides the fundamental types used throughout mapscope:
//! - The plot description schema ([`PlotData`], [`PlotObject`])
//! - The scene-graph node arena ([`Scene`], [`NodeId`])
//! - Materials and accumulating clipping planes
//! - Map coordinate transforms
//! - The shared error taxonomy

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Descriptor structs legitimately have many boolean flags
#![allow(clippy::struct_excessive_bools)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod clip_plane;
pub mod error;
pub mod map;
pub mod material;
pub mod plot;
pub mod scene;

pub use clip_plane::{ClipPlane, ClipPlaneRegistry, PlaneRef};
pub use error::{MapscopeError, Result};
pub use map::{transform_translate_coords, MapData};
pub use material::{Material, MaterialKind};
pub use plot::{Color, PlotData, PlotKind, PlotObject, PlotProperties};
pub use scene::{Node, NodeId, Scene};

// Re-export glam types for convenience
pub use glam::{Mat3, Vec3, Vec4};
