//! The viewer context.
//!
//! All composition state is owned by one [`Viewer`] value passed by reference
//! into every operation; there is no hidden global state. Everything runs
//! synchronously on the caller's thread.

use mapscope_core::clip_plane::ClipPlaneRegistry;
use mapscope_core::map::MapData;
use mapscope_core::scene::Scene;

use crate::decoration::DecorationBuckets;
use crate::element::{ElementId, ElementStore};
use crate::point::{MapPoint, PointKind};
use crate::toggle::ToggleRegistry;

/// One viewer instance: scene, elements, registries, and map points.
#[derive(Debug, Default)]
pub struct Viewer {
    /// The scene graph and its membership set.
    pub scene: Scene,
    /// Arena of all built elements.
    pub store: ElementStore,
    /// The authoritative element list: every leaf, in registration order.
    /// Group indices and external ids resolve against this list.
    pub elements: Vec<ElementId>,
    /// Root elements in construction order, for the group-resolution pass.
    pub roots: Vec<ElementId>,
    /// Named visibility toggles.
    pub toggles: ToggleRegistry,
    /// Face and corner decoration buckets.
    pub decorations: DecorationBuckets,
    /// Named clipping planes plus the ambient plot planes.
    pub clip_planes: ClipPlaneRegistry,
    /// Elements whose placement tracks the bounding cube.
    pub dynamic_elements: Vec<ElementId>,
    /// Elements registered with the selection subsystem.
    pub selectable: Vec<ElementId>,
    /// The active map's transformation and translation.
    pub map: MapData,
    /// The map's points, antigens and sera.
    pub points: Vec<MapPoint>,
}

impl Viewer {
    /// Creates a viewer for a map.
    pub fn new(map: MapData) -> Self {
        Self {
            map,
            ..Self::default()
        }
    }

    /// Adds a map point and returns its index.
    pub fn add_point(&mut self, kind: PointKind, type_index: usize) -> usize {
        self.points.push(MapPoint::new(kind, type_index));
        self.points.len() - 1
    }

    /// Sets a point's selection flag and synchronizes its overlay
    /// visibility: selection shows any built overlay, deselection hides it.
    pub fn set_point_selected(&mut self, index: usize, selected: bool) {
        self.points[index].set_selected(selected, &mut self.scene);
    }

    /// Shows or hides every element of a named toggle.
    ///
    /// Unknown names are ignored; toggles come from user interaction, not
    /// from the validated plot description.
    pub fn set_toggle(&mut self, name: &str, visible: bool) {
        let Some(members) = self.toggles.get(name).map(|t| t.members().to_vec()) else {
            return;
        };
        for id in members {
            let element = self.store.get(id);
            if visible {
                element.show(&mut self.scene);
            } else {
                element.hide(&mut self.scene);
            }
        }
    }
}
