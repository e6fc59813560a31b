use super::SurfaceSize;

/// Viewport rectangle in physical pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ViewportRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ViewportRect {
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Viewport covering the whole surface.
    #[inline]
    pub const fn covering(size: SurfaceSize) -> Self {
        Self::new(0, 0, size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covering_spans_full_surface() {
        let vp = ViewportRect::covering(SurfaceSize::new(800, 600));
        assert_eq!(vp, ViewportRect::new(0, 0, 800, 600));
    }

    #[test]
    fn covering_keeps_zero_dimensions() {
        assert_eq!(
            ViewportRect::covering(SurfaceSize::new(0, 600)),
            ViewportRect::new(0, 0, 0, 600)
        );
    }
}
