//! External renderer contract
//!
//! The world draws nothing itself. Every block registers a unit-cube
//! primitive with a renderer collaborator and releases it when the block
//! disappears; the handle lifetime is tied 1:1 to the block's presence in
//! the store. Keeping the contract this narrow lets the whole domain model
//! run headless in tests and benches.

use crate::core::types::IVec3;

/// Opaque handle to a registered render primitive
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderHandle(pub u64);

/// Per-block material flags passed to the renderer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaterialFlags {
    pub transparent: bool,
    pub glowing: bool,
}

/// Renderer collaborator: draws opaque cube primitives at block positions
pub trait Renderer {
    /// Register a unit cube at the given block coordinate.
    /// Returns a handle that must later be passed to `release_block`.
    fn register_block(&mut self, pos: IVec3, color: [u8; 3], flags: MaterialFlags) -> RenderHandle;

    /// Release a previously registered primitive
    fn release_block(&mut self, handle: RenderHandle);
}

/// Renderer that allocates handles but draws nothing.
///
/// Used headless (benches, the walk_world binary) and as the default test
/// double. Tracks the live handle count so tests can assert that every
/// removed or evicted block released its primitive.
#[derive(Default)]
pub struct NullRenderer {
    next_id: u64,
    live: u64,
}

impl NullRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently registered primitives
    pub fn live_count(&self) -> u64 {
        self.live
    }

    /// Total primitives ever registered
    pub fn total_registered(&self) -> u64 {
        self.next_id
    }
}

impl Renderer for NullRenderer {
    fn register_block(&mut self, _pos: IVec3, _color: [u8; 3], _flags: MaterialFlags) -> RenderHandle {
        let handle = RenderHandle(self.next_id);
        self.next_id += 1;
        self.live += 1;
        handle
    }

    fn release_block(&mut self, _handle: RenderHandle) {
        self.live = self.live.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_renderer_handle_lifecycle() {
        let mut renderer = NullRenderer::new();
        let a = renderer.register_block(IVec3::ZERO, [0, 0, 0], MaterialFlags::default());
        let b = renderer.register_block(IVec3::ONE, [0, 0, 0], MaterialFlags::default());
        assert_ne!(a, b);
        assert_eq!(renderer.live_count(), 2);

        renderer.release_block(a);
        assert_eq!(renderer.live_count(), 1);
        assert_eq!(renderer.total_registered(), 2);
    }
}
