//! Sheet compositing - copies each sprite into its placement rectangle

use image::{Rgba, RgbaImage};

use crate::layout::{NamedImage, SheetLayout, SheetRect};

/// Background of rows and columns no sprite covers
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Compose the sheet image for a layout.
///
/// `images` must be the slice the layout was computed from. Pixels are
/// replaced, not blended, so transparent sprite pixels stay transparent.
pub fn compose(sheet: &SheetLayout, images: &[NamedImage]) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(sheet.width, sheet.height, TRANSPARENT);

    for (placement, named) in sheet.placements.iter().zip(images) {
        copy_into_rect(&mut canvas, &named.image, &placement.rect);
    }

    canvas
}

/// Copy `sprite` into `canvas` starting at the rectangle's top-left corner.
///
/// The copy is clipped to the rectangle, the sprite and the canvas. Rows
/// clipped off the top of the canvas are dropped from the top of the sprite.
fn copy_into_rect(canvas: &mut RgbaImage, sprite: &RgbaImage, rect: &SheetRect) {
    let canvas_h = i64::from(canvas.height());
    let canvas_w = i64::from(canvas.width());
    let rows = rect.height().min(i64::from(sprite.height()));
    let cols = rect.width().min(i64::from(sprite.width()));

    for sy in 0..rows {
        let dy = rect.min_y + sy;
        if dy < 0 || dy >= canvas_h {
            continue;
        }
        for sx in 0..cols {
            let dx = rect.min_x + sx;
            if dx < 0 || dx >= canvas_w {
                continue;
            }
            let pixel = *sprite.get_pixel(sx as u32, sy as u32);
            canvas.put_pixel(dx as u32, dy as u32, pixel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    fn solid(name: &str, w: u32, h: u32, color: Rgba<u8>) -> NamedImage {
        NamedImage::new(name, RgbaImage::from_pixel(w, h, color))
    }

    #[test]
    fn test_empty_sheet() {
        let sheet = layout(&[]);
        let img = compose(&sheet, &[]);
        assert_eq!(img.dimensions(), (0, 0));
    }

    #[test]
    fn test_stacked_sprites() {
        let images = vec![solid("a", 2, 2, RED), solid("b", 3, 1, BLUE)];
        let sheet = layout(&images);
        let img = compose(&sheet, &images);

        assert_eq!(img.dimensions(), (3, 3));
        assert_eq!(*img.get_pixel(0, 0), RED);
        assert_eq!(*img.get_pixel(1, 1), RED);
        // Narrow sprite leaves the rest of its rows transparent
        assert_eq!(*img.get_pixel(2, 0), TRANSPARENT);
        assert_eq!(*img.get_pixel(2, 2), BLUE);
    }

    #[test]
    fn test_gutter_rows_stay_transparent() {
        let images = vec![solid("a@2x", 2, 2, RED), solid("b", 2, 1, BLUE)];
        let sheet = layout(&images);
        let img = compose(&sheet, &images);

        assert_eq!(img.height(), 5);
        assert_eq!(*img.get_pixel(0, 2), TRANSPARENT);
        assert_eq!(*img.get_pixel(0, 3), TRANSPARENT);
        assert_eq!(*img.get_pixel(0, 4), BLUE);
    }

    #[test]
    fn test_fudged_sprite_is_shifted_up() {
        let mut tall = RgbaImage::from_pixel(1, 3, RED);
        tall.put_pixel(0, 2, BLUE);
        let images = vec![solid("a", 1, 2, RED), NamedImage::new("t@2x", tall)];
        let sheet = layout(&images);
        let img = compose(&sheet, &images);

        // rect covers rows 3..7 (gutter 2, fudge 1); sprite lands on rows 3..=5
        assert_eq!(sheet.placements[1].rect.min_y, 3);
        assert_eq!(*img.get_pixel(0, 2), TRANSPARENT);
        assert_eq!(*img.get_pixel(0, 3), RED);
        assert_eq!(*img.get_pixel(0, 5), BLUE);
    }

    #[test]
    fn test_fudged_first_sprite_loses_top_row() {
        let green = Rgba([0, 255, 0, 255]);
        let mut odd = RgbaImage::new(1, 3);
        odd.put_pixel(0, 0, RED);
        odd.put_pixel(0, 1, green);
        odd.put_pixel(0, 2, BLUE);
        let images = vec![NamedImage::new("odd@2x", odd)];
        let sheet = layout(&images);
        let img = compose(&sheet, &images);

        assert_eq!(sheet.placements[0].rect.min_y, -1);
        assert_eq!(img.dimensions(), (1, 3));
        assert_eq!(*img.get_pixel(0, 0), green);
        assert_eq!(*img.get_pixel(0, 1), BLUE);
        assert_eq!(*img.get_pixel(0, 2), TRANSPARENT);
    }

    #[test]
    fn test_replace_keeps_transparent_pixels() {
        let images = vec![NamedImage::new("clear", RgbaImage::from_pixel(1, 1, TRANSPARENT))];
        let sheet = layout(&images);
        let img = compose(&sheet, &images);
        assert_eq!(*img.get_pixel(0, 0), TRANSPARENT);
    }
}
