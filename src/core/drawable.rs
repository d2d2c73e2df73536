/// Drawable size in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawableSize {
    pub width: u32,
    pub height: u32,
}

impl DrawableSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A zero-sized surface cannot hand out drawables
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }
}

impl From<(u32, u32)> for DrawableSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// Single-use render target for one frame
pub trait Drawable {
    /// Submit the finished frame for presentation
    fn present(self);

    /// Drop the frame without presenting it
    fn discard(self);
}

/// Something that can hand out one drawable per display refresh
pub trait DrawableSource {
    type Drawable: Drawable;

    /// Current size of the drawables this source produces
    fn drawable_size(&self) -> DrawableSize;

    /// Track a new view size
    fn resize(&mut self, size: DrawableSize);

    /// Next drawable, or `None` while resizing, suspended or zero-sized
    fn next_drawable(&mut self) -> Option<Self::Drawable>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_from_tuple() {
        let size = DrawableSize::from((1920, 1080));
        assert_eq!(size, DrawableSize::new(1920, 1080));
        assert_eq!(size.pixel_count(), 1920 * 1080);
    }

    #[test]
    fn test_zero_sides_are_empty() {
        assert!(DrawableSize::new(0, 600).is_empty());
        assert!(DrawableSize::new(800, 0).is_empty());
        assert!(DrawableSize::default().is_empty());
        assert!(!DrawableSize::new(1, 1).is_empty());
    }

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(DrawableSize::new(1280, 720).aspect_ratio(), 1280.0 / 720.0);
        assert_eq!(DrawableSize::new(640, 0).aspect_ratio(), 1.0);
    }

    #[test]
    fn test_large_sizes_do_not_overflow_pixel_count() {
        let size = DrawableSize::new(u32::MAX, 2);
        assert_eq!(size.pixel_count(), u32::MAX as usize * 2);
    }
}
