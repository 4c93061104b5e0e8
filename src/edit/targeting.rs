//! Ray targeting and block placement/removal
//!
//! The camera collaborator supplies a ray; targeting picks the nearest block
//! whose unit cube the ray enters and remembers the entry face. Place and
//! remove are permissive: with no target they are silent no-ops.

use crate::core::types::{IVec3, Vec3};
use crate::math::{Aabb, Ray};
use crate::render::Renderer;
use crate::voxel::block::BlockType;
use crate::voxel::store::BlockStore;

/// The block a ray currently points at
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    /// Coordinate of the targeted block
    pub pos: IVec3,
    /// Outward normal of the hit face (unit axis vector)
    pub normal: IVec3,
    /// Ray parameter at the hit point
    pub distance: f32,
}

/// Find the nearest block whose unit cube the ray intersects
pub fn target_block(ray: &Ray, store: &BlockStore) -> Option<Target> {
    let mut nearest: Option<Target> = None;

    for (pos, _) in store.iter() {
        let aabb = Aabb::unit_cube(pos.as_vec3());
        if let Some((t, normal)) = ray.entry_face(&aabb) {
            if nearest.is_none_or(|n| t < n.distance) {
                nearest = Some(Target {
                    pos,
                    normal: normal.as_ivec3(),
                    distance: t,
                });
            }
        }
    }

    nearest
}

/// Editing state: the selected palette entry and the current target
pub struct Editor {
    selected: BlockType,
    target: Option<Target>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self {
            selected: BlockType::Grass,
            target: None,
        }
    }

    /// Currently selected block type
    pub fn selected(&self) -> BlockType {
        self.selected
    }

    /// Current target, if any
    pub fn target(&self) -> Option<Target> {
        self.target
    }

    /// Select a palette entry
    pub fn select(&mut self, ty: BlockType) {
        self.selected = ty;
        log::info!("selected block type: {}", ty.display_name());
    }

    /// Select by palette name; unknown names are rejected without change
    pub fn select_by_name(&mut self, name: &str) -> bool {
        match BlockType::from_name(name) {
            Some(ty) => {
                self.select(ty);
                true
            }
            None => false,
        }
    }

    /// Recompute the target from a fresh camera ray
    pub fn update_target(&mut self, ray: &Ray, store: &BlockStore) {
        self.target = target_block(ray, store);
    }

    /// Place the selected block one unit along the targeted face's normal.
    ///
    /// Returns the placed coordinate, or None when there is no target or
    /// the coordinate was already occupied.
    pub fn place_adjacent(
        &mut self,
        store: &mut BlockStore,
        renderer: &mut dyn Renderer,
    ) -> Option<IVec3> {
        let target = self.target?;
        let pos = target.pos + target.normal;
        if store.add(renderer, pos, self.selected) {
            log::info!(
                "placed {} block at ({}, {}, {})",
                self.selected.name(),
                pos.x,
                pos.y,
                pos.z
            );
            Some(pos)
        } else {
            None
        }
    }

    /// Remove the targeted block.
    ///
    /// Returns the removed type, or None when there is no target.
    pub fn remove_targeted(
        &mut self,
        store: &mut BlockStore,
        renderer: &mut dyn Renderer,
    ) -> Option<BlockType> {
        let target = self.target?;
        let removed = store.remove(renderer, target.pos);
        if let Some(ty) = removed {
            log::info!(
                "removed {} block at ({}, {}, {})",
                ty.name(),
                target.pos.x,
                target.pos.y,
                target.pos.z
            );
            self.target = None;
        }
        removed
    }
}
