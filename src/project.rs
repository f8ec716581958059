//! Projection from sheet pixels to logical (CSS) pixels
//!
//! A sprite stored at 2x occupies twice as many sheet pixels as it covers on
//! the page. Dividing by the sprite's own factor gives the box a stylesheet
//! should use for it.

use crate::layout::Placement;

/// A sprite's box in logical units.
///
/// `x` and `y` are background offsets: the negated sheet position, ready to
/// be written into `background-position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogicalRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The whole sheet's size in logical units, as seen at one sprite's density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogicalSize {
    pub width: f64,
    pub height: f64,
}

/// Project a placement into logical units.
pub fn project(placement: &Placement) -> LogicalRect {
    let factor = placement.factor();
    let rect = &placement.rect;
    LogicalRect {
        x: (-rect.min_x) as f64 / factor,
        y: (-rect.min_y) as f64 / factor,
        width: rect.width() as f64 / factor,
        height: rect.height() as f64 / factor,
    }
}

/// Size of a `width × height` sheet when scaled to a sprite of `factor`.
///
/// Each magnified sprite's rule states its own `background-size`, since the
/// runtime scales the whole background uniformly for that rule.
pub fn sheet_size(width: u32, height: u32, factor: f64) -> LogicalSize {
    LogicalSize { width: f64::from(width) / factor, height: f64::from(height) / factor }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{layout, NamedImage};
    use image::RgbaImage;

    const EPSILON: f64 = 1e-9;

    fn sheet(sprites: &[(&str, u32, u32)]) -> crate::layout::SheetLayout {
        let images: Vec<NamedImage> = sprites
            .iter()
            .map(|(name, w, h)| NamedImage::new(*name, RgbaImage::new(*w, *h)))
            .collect();
        layout(&images)
    }

    #[test]
    fn test_unmagnified_is_identity() {
        let s = sheet(&[("a", 4, 10), ("b", 6, 20)]);
        let r = project(&s.placements[1]);
        assert_eq!(r, LogicalRect { x: 0.0, y: -10.0, width: 6.0, height: 20.0 });
    }

    #[test]
    fn test_retina_halves_everything() {
        let s = sheet(&[("a", 4, 10), ("b@2x", 8, 16)]);
        let r = project(&s.placements[1]);
        // top padding 2 => sheet top 12
        assert_eq!(r, LogicalRect { x: 0.0, y: -6.0, width: 4.0, height: 8.0 });
    }

    #[test]
    fn test_projection_inverts_scaling() {
        let s = sheet(&[("a@3x", 9, 10), ("b@1.5x", 7, 11), ("c", 2, 5), ("d@2x", 5, 15)]);
        for p in &s.placements {
            let r = project(p);
            assert!((r.width * p.factor() - p.rect.width() as f64).abs() < EPSILON);
            assert!((r.height * p.factor() - p.rect.height() as f64).abs() < EPSILON);
        }
    }

    #[test]
    fn test_fudged_first_sprite_offset() {
        let s = sheet(&[("odd@2x", 6, 15)]);
        let r = project(&s.placements[0]);
        assert_eq!(r.y, 0.5);
        assert_eq!(r.height, 8.0);
    }

    #[test]
    fn test_sheet_size_uses_sprite_factor() {
        assert_eq!(sheet_size(100, 60, 2.0), LogicalSize { width: 50.0, height: 30.0 });
        assert_eq!(sheet_size(100, 60, 1.0), LogicalSize { width: 100.0, height: 60.0 });
    }

    #[test]
    fn test_zero_offset_is_not_negative_zero() {
        let s = sheet(&[("a@2x", 4, 4)]);
        let r = project(&s.placements[0]);
        assert!(r.x.is_sign_positive());
        assert!(r.y.is_sign_positive());
    }
}
