//! Map points and their overlay state machine.
//!
//! A map point is an antigen or a serum. Each point owns at most one
//! uncertainty overlay at a time, lazily built when bootstrap data arrives
//! and replaced wholesale by later arrivals. Overlay visibility is pushed
//! from the outside: selection changes call into
//! [`set_selected`](MapPoint::set_selected), the overlay never observes
//! selection itself.

use mapscope_core::map::MapData;
use mapscope_core::scene::Scene;

use crate::overlay::{self, CloudData, ContourData, Overlay};

/// Whether a point is an antigen or a serum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    Antigen,
    Serum,
}

/// One point of the map.
#[derive(Debug)]
pub struct MapPoint {
    kind: PointKind,
    /// Index of this point within its own kind (the n-th antigen or serum).
    type_index: usize,
    selected: bool,
    overlay: Option<Overlay>,
}

impl MapPoint {
    /// Creates an unselected point with no overlay.
    pub fn new(kind: PointKind, type_index: usize) -> Self {
        Self {
            kind,
            type_index,
            selected: false,
            overlay: None,
        }
    }

    /// The point's kind.
    pub fn kind(&self) -> PointKind {
        self.kind
    }

    /// Index within the point's kind.
    pub fn type_index(&self) -> usize {
        self.type_index
    }

    /// Whether the point is currently selected.
    pub fn selected(&self) -> bool {
        self.selected
    }

    /// The built overlay, if any.
    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// Builds a bootstrap point-cloud overlay for this point, replacing any
    /// previous representation. Shown immediately iff the point is selected.
    pub fn add_cloud_overlay(&mut self, data: &CloudData, map: &MapData, scene: &mut Scene) {
        self.replace_overlay(overlay::build_cloud(data, self.kind, map, scene), scene);
    }

    /// Builds a bootstrap contour overlay for this point, replacing any
    /// previous representation. Shown immediately iff the point is selected.
    pub fn add_contour_overlay(&mut self, data: &ContourData, map: &MapData, scene: &mut Scene) {
        self.replace_overlay(overlay::build_contour(data, map, scene), scene);
    }

    fn replace_overlay(&mut self, overlay: Overlay, scene: &mut Scene) {
        self.remove_overlay(scene);
        self.overlay = Some(overlay);
        if self.selected {
            self.show_overlay(scene);
        }
    }

    /// Adds the built overlay's node to the scene. Idempotent; no-op with
    /// nothing built.
    pub fn show_overlay(&self, scene: &mut Scene) {
        if let Some(overlay) = &self.overlay {
            scene.add(overlay.node);
        }
    }

    /// Removes the built overlay's node from the scene without discarding
    /// the representation. Idempotent.
    pub fn hide_overlay(&self, scene: &mut Scene) {
        if let Some(overlay) = &self.overlay {
            scene.remove(overlay.node);
        }
    }

    /// Hides then discards the overlay representation.
    pub fn remove_overlay(&mut self, scene: &mut Scene) {
        self.hide_overlay(scene);
        self.overlay = None;
    }

    /// Updates the selection flag and synchronizes overlay visibility.
    pub fn set_selected(&mut self, selected: bool, scene: &mut Scene) {
        self.selected = selected;
        if selected {
            self.show_overlay(scene);
        } else {
            self.hide_overlay(scene);
        }
    }
}
