/// Decides whether a pointer press lands on the card
pub trait HitRegion {
    fn contains(&self, x: f64, y: f64) -> bool;
}

/// Axis-aligned screen rectangle in physical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given relative size centered in a viewport
    pub fn centered(viewport_width: f64, viewport_height: f64, fraction: f64) -> Self {
        let width = viewport_width * fraction;
        let height = viewport_height * fraction;
        Self::new(
            (viewport_width - width) * 0.5,
            (viewport_height - height) * 0.5,
            width,
            height,
        )
    }
}

impl HitRegion for ScreenRect {
    fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Whole-viewport hit region
pub struct Anywhere;

impl HitRegion for Anywhere {
    fn contains(&self, _x: f64, _y: f64) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = ScreenRect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(10.0, 20.0));
        assert!(rect.contains(60.0, 45.0));
        assert!(!rect.contains(5.0, 45.0));
        assert!(!rect.contains(60.0, 71.0));
    }

    #[test]
    fn test_centered_rect() {
        let rect = ScreenRect::centered(1200.0, 800.0, 0.5);
        assert_eq!(rect, ScreenRect::new(300.0, 200.0, 600.0, 400.0));
    }
}
