//! Clipping planes for cutting rendered geometry.
//!
//! A clipping plane is a geometric half-space; geometry on the negative side
//! (opposite to the normal) is discarded by the renderer. Planes accumulate
//! on materials, they never replace an existing set.

use std::collections::HashMap;

use glam::Vec3;
use serde::Deserialize;

use crate::error::{MapscopeError, Result};

/// A clipping half-space defined by a point and a normal direction.
///
/// The normal points toward the kept geometry.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ClipPlane {
    /// A point on the plane.
    pub origin: Vec3,
    /// The normal direction of the plane (points toward kept geometry).
    pub normal: Vec3,
}

impl ClipPlane {
    /// Creates a clipping plane from an origin and a normal.
    ///
    /// The normal is normalized on construction.
    pub fn new(origin: Vec3, normal: Vec3) -> Self {
        Self {
            origin,
            normal: normal.normalize(),
        }
    }

    /// Returns the signed distance from a point to the plane.
    ///
    /// Positive values are on the normal side (kept), negative on the opposite
    /// (clipped).
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        (point - self.origin).dot(self.normal)
    }

    /// Returns whether a point is on the kept side of the plane.
    pub fn is_kept(&self, point: Vec3) -> bool {
        self.signed_distance(point) >= 0.0
    }

    /// Projects a point onto the plane.
    pub fn project(&self, point: Vec3) -> Vec3 {
        point - self.signed_distance(point) * self.normal
    }
}

/// A reference to a clipping plane inside a plot description.
///
/// Plot objects either name a plane registered on the viewer or carry the
/// plane inline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PlaneRef {
    /// Reference by registered name.
    Named(String),
    /// An anonymous plane carried in the descriptor itself.
    Inline(ClipPlane),
}

/// Registry of named clipping planes plus the ambient plot planes.
///
/// The ambient planes bound the whole plotting region and are appended to
/// every element's material unless the element is marked exempt (`xpd`).
#[derive(Debug, Default)]
pub struct ClipPlaneRegistry {
    named: HashMap<String, ClipPlane>,
    ambient: Vec<ClipPlane>,
}

impl ClipPlaneRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a plane under a name, replacing any previous registration.
    pub fn register(&mut self, name: impl Into<String>, plane: ClipPlane) {
        self.named.insert(name.into(), plane);
    }

    /// Looks up a named plane.
    pub fn get(&self, name: &str) -> Option<&ClipPlane> {
        self.named.get(name)
    }

    /// Appends a plane to the ambient plot set.
    pub fn push_ambient(&mut self, plane: ClipPlane) {
        self.ambient.push(plane);
    }

    /// Returns the ambient plot planes.
    pub fn ambient(&self) -> &[ClipPlane] {
        &self.ambient
    }

    /// Resolves a list of plane references to concrete planes.
    ///
    /// Fails on the first name with no registration.
    pub fn resolve(&self, refs: &[PlaneRef]) -> Result<Vec<ClipPlane>> {
        refs.iter()
            .map(|r| match r {
                PlaneRef::Named(name) => self
                    .named
                    .get(name)
                    .copied()
                    .ok_or_else(|| MapscopeError::ClipPlaneNotFound(name.clone())),
                PlaneRef::Inline(plane) => Ok(*plane),
            })
            .collect()
    }
}
