//! World-to-screen viewport mapping

use glam::Vec2;

use crate::sim::course::Rect;

/// Uniform-scale camera mapping world coordinates onto a pixel viewport
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Pixels per world unit
    pub scale: f32,
    /// Screen position of the world origin
    pub offset: Vec2,
    /// Viewport size in pixels
    pub viewport: Vec2,
}

impl Camera {
    /// Fit a hole's bounds into the viewport, centered, preserving aspect
    /// ratio (letterboxed on the long axis)
    pub fn fit(bounds: &Rect, viewport: Vec2, margin: f32) -> Self {
        let usable = (viewport - Vec2::splat(margin * 2.0)).max(Vec2::ONE);
        let world = bounds.size().max(Vec2::ONE);
        let scale = (usable.x / world.x).min(usable.y / world.y);

        // Center the mapped bounds in the viewport
        let mapped = world * scale;
        let offset = (viewport - mapped) * 0.5 - bounds.min * scale;

        Self {
            scale,
            offset,
            viewport,
        }
    }

    #[inline]
    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        p * self.scale + self.offset
    }

    #[inline]
    pub fn screen_to_world(&self, p: Vec2) -> Vec2 {
        (p - self.offset) / self.scale
    }
}
