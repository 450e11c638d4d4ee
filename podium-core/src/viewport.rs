//! Viewport state and responsive sizing policy

use serde::{Deserialize, Serialize};

/// Model scale applied on viewports at least 1200 px wide
pub const SCALE_DESKTOP: f32 = 1.4;
/// Model scale applied on viewports between 768 and 1199 px wide
pub const SCALE_TABLET: f32 = 1.3;
/// Model scale applied on viewports narrower than 768 px
pub const SCALE_PHONE: f32 = 1.1;

/// Window dimensions in device pixels
///
/// Source of truth for the camera aspect ratio and the render surface size.
/// Updated on every resize event, read by the render loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Create a new viewport
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Aspect ratio (width over height)
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Uniform model scale for this viewport width
    ///
    /// Piecewise by width: >= 1200 px gets 1.4, 768..=1199 gets 1.3,
    /// anything narrower gets 1.1. Evaluated once, at load-completion time.
    pub fn responsive_scale(&self) -> f32 {
        if self.width >= 1200 {
            SCALE_DESKTOP
        } else if self.width >= 768 {
            SCALE_TABLET
        } else {
            SCALE_PHONE
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_responsive_scale_piecewise() {
        assert_relative_eq!(Viewport::new(1920, 1080).responsive_scale(), 1.4);
        assert_relative_eq!(Viewport::new(1024, 768).responsive_scale(), 1.3);
        assert_relative_eq!(Viewport::new(400, 800).responsive_scale(), 1.1);
    }

    #[test]
    fn test_responsive_scale_boundaries() {
        assert_relative_eq!(Viewport::new(1200, 800).responsive_scale(), 1.4);
        assert_relative_eq!(Viewport::new(1199, 800).responsive_scale(), 1.3);
        assert_relative_eq!(Viewport::new(768, 800).responsive_scale(), 1.3);
        assert_relative_eq!(Viewport::new(767, 800).responsive_scale(), 1.1);
    }

    #[test]
    fn test_aspect_ratio() {
        assert_relative_eq!(Viewport::new(1600, 800).aspect(), 2.0);
        // Degenerate height must not divide by zero
        assert_relative_eq!(Viewport::new(1600, 0).aspect(), 1.0);
    }
}
