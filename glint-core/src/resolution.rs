use std::fmt;

/// Output image size in pixels, with the usual named presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const R144P: Resolution = Resolution::new(256, 144);
    pub const R240P: Resolution = Resolution::new(426, 240);
    pub const R360P: Resolution = Resolution::new(640, 360);
    pub const R480P: Resolution = Resolution::new(854, 480);
    pub const HD: Resolution = Resolution::new(1280, 720);
    pub const FULL_HD: Resolution = Resolution::new(1920, 1080);
    pub const QHD: Resolution = Resolution::new(2560, 1440);
    pub const UHD_4K: Resolution = Resolution::new(3840, 2160);

    pub const fn new(width: u32, height: u32) -> Resolution {
        Resolution { width, height }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution::R360P
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_of_widescreen_presets() {
        assert!((Resolution::R360P.aspect_ratio() - 16.0 / 9.0).abs() < 1e-4);
        assert!((Resolution::FULL_HD.aspect_ratio() - 16.0 / 9.0).abs() < 1e-4);
    }
}
