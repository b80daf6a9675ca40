//! Plot composition.
//!
//! Turns a plot description into live scene content in two passes: every
//! descriptor is built and registered in order, then group references are
//! wired up once the whole batch exists, since a group may point at elements
//! created later in the same batch.
//!
//! Per element the order of operations is fixed at the ends: construction
//! always comes first and scene registration always last. A failure midway
//! (a bad decoration code, an ID count mismatch) leaves the scene partially
//! registered and is fatal to that plot load; plot data is validated
//! upstream and there is no retry.

use mapscope_core::error::{MapscopeError, Result};
use mapscope_core::plot::{PlotData, PlotObject, PlotProperties};

use crate::element::{self, ElementId};
use crate::viewer::Viewer;

impl Viewer {
    /// Populates the scene from a plot description.
    pub fn populate_plot(&mut self, data: &PlotData) -> Result<()> {
        for plotobj in &data.plot {
            self.add_plot_element(plotobj)?;
        }
        self.resolve_groups()?;
        log::info!(
            "populated plot: {} objects, {} elements",
            data.plot.len(),
            self.elements.len()
        );
        Ok(())
    }

    /// Builds one plot object and registers it with the scene.
    ///
    /// Group references are only recorded here; they resolve in the second
    /// pass of [`populate_plot`](Self::populate_plot).
    pub fn add_plot_element(&mut self, plotobj: &PlotObject) -> Result<ElementId> {
        let props = &plotobj.properties;

        // Construction first: build the primary element graph.
        let id = element::build(plotobj, &mut self.scene, &mut self.store);

        // Companion highlight element, hidden until selection shows it.
        if let Some(hl) = &plotobj.highlight {
            let hl_id = element::build(hl, &mut self.scene, &mut self.store);
            self.store.get(hl_id).hide(&mut self.scene);
            self.store.get_mut(id).highlight = Some(hl_id);
            let hl_node = self.store.get(hl_id).node();
            self.scene.add(hl_node);
        }

        // Interactive or labelled elements take part in selection.
        if props.interactive || props.label.is_some() {
            let leaves = self.store.get(id).leaves().to_vec();
            self.selectable.extend(leaves);
        }

        if let Some(name) = &props.toggle {
            self.toggles.add(name, id);
        }

        if let Some(label) = &props.label {
            self.store.get_mut(id).label = Some(label.clone());
        }

        // Decorations anchored to the bounding cube.
        if let Some(faces) = &props.faces {
            self.dynamic_elements.push(id);
            self.decorations.place_faces(faces, id)?;
        }
        if let Some(code) = props.corners.first() {
            self.dynamic_elements.push(id);
            self.decorations.place_corner(code, id)?;
        }

        self.apply_clipping(id, props)?;

        if props.breakup_mesh {
            let pieces = (plotobj.coords.len() / 3).max(1);
            self.store.get(id).breakup_mesh(&mut self.scene, pieces);
        }

        // Record 0-based group references for the second pass.
        if let Some(group) = &plotobj.group {
            let len = self.elements.len();
            let indices = group
                .iter()
                .map(|&g| {
                    (g as usize)
                        .checked_sub(1)
                        .ok_or(MapscopeError::GroupIndexOutOfRange { index: 0, len })
                })
                .collect::<Result<Vec<_>>>()?;
            self.store.get_mut(id).group_indices = Some(indices);
        }

        // Assign external ids, one per leaf.
        let leaves = self.store.get(id).leaves().to_vec();
        if leaves.len() != plotobj.ids.len() {
            return Err(MapscopeError::IdCountMismatch {
                expected: leaves.len(),
                actual: plotobj.ids.len(),
            });
        }
        for (&leaf, &external) in leaves.iter().zip(&plotobj.ids) {
            self.store.get_mut(leaf).id = Some(external.saturating_sub(1));
        }

        // Scene registration last.
        self.elements.extend(leaves);
        self.roots.push(id);
        let node = self.store.get(id).node();
        self.scene.add(node);
        Ok(id)
    }

    /// Appends clipping planes to the element's material(s).
    ///
    /// Own-declared planes first, then the ambient plot planes unless the
    /// element is exempt (`xpd`). Composite elements get the same appends on
    /// every child that carries a material; material-less children are
    /// skipped. Planes accumulate, never replace, and are not deduplicated.
    fn apply_clipping(&mut self, id: ElementId, props: &PlotProperties) -> Result<()> {
        let mut planes = self.clip_planes.resolve(&props.clipping_planes)?;
        if !props.xpd {
            planes.extend_from_slice(self.clip_planes.ambient());
        }
        if planes.is_empty() {
            return Ok(());
        }

        let node = self.store.get(id).node();
        if self.scene.node(node).material.is_some() {
            if let Some(material) = self.scene.node_mut(node).material.as_mut() {
                material.append_clipping_planes(&planes);
            }
        } else {
            let children = self.scene.node(node).children.clone();
            for child in children {
                if let Some(material) = self.scene.node_mut(child).material.as_mut() {
                    material.append_clipping_planes(&planes);
                }
            }
        }
        Ok(())
    }

    /// Second pass: materialize group membership.
    ///
    /// Runs only after every element of the batch exists, so forward
    /// references resolve. A labelled element without an explicit group
    /// becomes a singleton group of itself.
    fn resolve_groups(&mut self) -> Result<()> {
        let roots = self.roots.clone();
        for id in roots {
            if let Some(indices) = self.store.get_mut(id).group_indices.take() {
                let mut group = Vec::with_capacity(indices.len());
                for index in indices {
                    let member = self.elements.get(index).copied().ok_or(
                        MapscopeError::GroupIndexOutOfRange {
                            index,
                            len: self.elements.len(),
                        },
                    )?;
                    group.push(member);
                }
                self.store.get_mut(id).group = Some(group);
            } else if self.store.get(id).label.is_some() && self.store.get(id).group.is_none() {
                self.store.get_mut(id).group = Some(vec![id]);
            }
        }
        Ok(())
    }
}
